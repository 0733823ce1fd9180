//! Merge semantics for configuration fragments.
//!
//! Two layers of merging live here:
//! - [`deep_merge`] for opaque JSON values (generic key-by-key merge),
//!   used for the open `extra` keys of a type's config fragment.
//! - [`merge_type_config`] for the structured fragment itself, where
//!   targets replace wholesale at the target level and tags union.

use super::types::TypeConfig;
use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans are replaced entirely
/// - If overlay is null, the base value is preserved (null means "not specified")
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Union `from` into `into`, preserving first-seen order and suppressing
/// duplicates.
pub fn union_tags(into: &mut Vec<String>, from: &[String]) {
    for tag in from {
        if !into.iter().any(|t| t == tag) {
            into.push(tag.clone());
        }
    }
}

/// Merge a more-specific fragment onto a base fragment.
///
/// - `targets` merge key-by-key; a target redefined in `overlay` replaces
///   the base definition entirely (executor and options together; there
///   is no deep merge below the target level)
/// - `tags` union, duplicates removed, first-seen order
/// - remaining keys deep-merge generically
pub fn merge_type_config(mut base: TypeConfig, overlay: TypeConfig) -> TypeConfig {
    for (name, target) in overlay.targets {
        base.targets.insert(name, target);
    }
    union_tags(&mut base.tags, &overlay.tags);
    let extra = deep_merge(
        Value::Object(std::mem::take(&mut base.extra)),
        Value::Object(overlay.extra),
    );
    if let Value::Object(extra) = extra {
        base.extra = extra;
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TargetConfig;
    use serde_json::json;

    #[test]
    fn test_merge_simple_objects() {
        let base = json!({"a": 1, "b": 2});
        let overlay = json!({"b": 3, "c": 4});
        let result = deep_merge(base, overlay);
        assert_eq!(result, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_merge_nested_objects() {
        let base = json!({
            "build": {"cache": true, "outputs": ["dist"]},
            "strict": true
        });
        let overlay = json!({
            "build": {"cache": false}
        });
        let result = deep_merge(base, overlay);
        assert_eq!(
            result,
            json!({
                "build": {"cache": false, "outputs": ["dist"]},
                "strict": true
            })
        );
    }

    #[test]
    fn test_arrays_replaced_not_merged() {
        let base = json!({"items": [1, 2, 3]});
        let overlay = json!({"items": [4, 5]});
        assert_eq!(deep_merge(base, overlay), json!({"items": [4, 5]}));
    }

    #[test]
    fn test_null_preserves_base() {
        let base = json!({"a": 1, "b": {"c": 2}});
        let overlay = json!({"a": null, "b": {"c": null}});
        assert_eq!(deep_merge(base, overlay), json!({"a": 1, "b": {"c": 2}}));
    }

    #[test]
    fn test_union_tags_first_seen_order() {
        let mut tags = vec!["y".to_string(), "z".to_string()];
        union_tags(&mut tags, &["x".to_string(), "y".to_string()]);
        assert_eq!(tags, vec!["y", "z", "x"]);
    }

    #[test]
    fn test_child_target_replaces_whole_definition() {
        let base: TypeConfig = serde_json::from_value(json!({
            "targets": {
                "build": {
                    "executor": "old:build",
                    "options": {"tsConfig": "tsconfig.json", "minify": true}
                }
            }
        }))
        .unwrap();
        let overlay: TypeConfig = serde_json::from_value(json!({
            "targets": {
                "build": { "executor": "new:build", "options": {"minify": false} }
            }
        }))
        .unwrap();

        let merged = merge_type_config(base, overlay);
        let build = &merged.targets["build"];
        assert_eq!(build.executor, "new:build");
        // Whole replacement: the base-only option is gone.
        assert!(!build.options.contains_key("tsConfig"));
        assert_eq!(build.options["minify"], json!(false));
    }

    #[test]
    fn test_child_adds_target_without_erasing_parent_targets() {
        let mut base = TypeConfig::default();
        base.targets.insert("build".into(), TargetConfig::new("x:build"));
        let mut overlay = TypeConfig::default();
        overlay.targets.insert("serve".into(), TargetConfig::new("x:serve"));

        let merged = merge_type_config(base, overlay);
        assert!(merged.targets.contains_key("build"));
        assert!(merged.targets.contains_key("serve"));
    }

    #[test]
    fn test_extra_keys_deep_merge() {
        let base: TypeConfig = serde_json::from_value(json!({
            "settings": {"cache": true, "parallel": 3}
        }))
        .unwrap();
        let overlay: TypeConfig = serde_json::from_value(json!({
            "settings": {"parallel": 1}
        }))
        .unwrap();

        let merged = merge_type_config(base, overlay);
        assert_eq!(
            merged.extra["settings"],
            json!({"cache": true, "parallel": 1})
        );
    }
}
