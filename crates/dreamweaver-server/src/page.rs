//! Static client assets embedded in the binary.

/// Page shell served at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Client script served at `/static/js/script.js`.
pub const SCRIPT_JS: &str = include_str!("../assets/script.js");
