//! JSON merge helpers for layered configuration.

use serde_json::Value;

/// Merge overlay values into the base, recursively overriding objects.
///
/// An explicit `null` in the overlay clears the base value.
pub(super) fn merge_json_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::merge_json_values;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn nested_objects_merge_key_by_key() {
        let mut base = json!({ "server": { "host": "0.0.0.0", "port": 80 } });
        merge_json_values(&mut base, &json!({ "server": { "port": 8080 } }));
        assert_eq!(base, json!({ "server": { "host": "0.0.0.0", "port": 8080 } }));
    }

    #[test]
    fn null_overlay_clears_value() {
        let mut base = json!({ "synth": { "seed": 3 } });
        merge_json_values(&mut base, &json!({ "synth": { "seed": null } }));
        assert_eq!(base, json!({ "synth": { "seed": null } }));
    }
}
