//! Fixed color palette shared by backgrounds and shapes.

use image::Rgb;
use rand::Rng;

/// Named palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

/// Every palette entry, in sampling order.
pub const PALETTE: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Purple,
    Color::Orange,
    Color::Pink,
    Color::Cyan,
];

impl Color {
    /// Pick a palette color uniformly at random.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }

    /// Lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Cyan => "cyan",
        }
    }

    /// RGB value used when painting.
    pub fn rgb(self) -> Rgb<u8> {
        let channels = match self {
            Color::Red => [255, 0, 0],
            Color::Blue => [0, 0, 255],
            Color::Green => [0, 128, 0],
            Color::Yellow => [255, 255, 0],
            Color::Purple => [128, 0, 128],
            Color::Orange => [255, 165, 0],
            Color::Pink => [255, 192, 203],
            Color::Cyan => [0, 255, 255],
        };
        Rgb(channels)
    }
}
