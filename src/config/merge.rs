use super::schema::{AppConfig, PartialConfig};
use crate::safety::defaults::default_blocklist;
use std::path::PathBuf;

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    /// For blocked_patterns: REPLACE semantics (if self has Some, use it entirely).
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            build_output: self.build_output.or(fallback.build_output),
            search_root: self.search_root.or(fallback.search_root),
            blocked_patterns: self.blocked_patterns.or(fallback.blocked_patterns),
            seed_missing: self.seed_missing.or(fallback.seed_missing),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    pub fn finalize(self) -> AppConfig {
        AppConfig {
            build_output: self.build_output,
            search_root: self
                .search_root
                .unwrap_or_else(|| PathBuf::from("src/S7Tools/bin")),
            blocked_patterns: self.blocked_patterns.unwrap_or_else(default_blocklist),
            seed_missing: self.seed_missing.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_priority_values_win() {
        let high = PartialConfig {
            build_output: Some(PathBuf::from("/opt/s7tools")),
            ..Default::default()
        };
        let low = PartialConfig {
            build_output: Some(PathBuf::from("/srv/s7tools")),
            search_root: Some(PathBuf::from("bin")),
            ..Default::default()
        };

        let merged = high.with_fallback(low);
        assert_eq!(merged.build_output, Some(PathBuf::from("/opt/s7tools")));
        // Gaps fall through to the lower layer.
        assert_eq!(merged.search_root, Some(PathBuf::from("bin")));
    }

    #[test]
    fn blocked_patterns_replace_not_append() {
        let high = PartialConfig {
            blocked_patterns: Some(vec![("custom".into(), "custom reason".into())]),
            ..Default::default()
        };
        let low = PartialConfig {
            blocked_patterns: Some(vec![
                ("a".into(), "r1".into()),
                ("b".into(), "r2".into()),
            ]),
            ..Default::default()
        };

        let merged = high.with_fallback(low);
        assert_eq!(merged.blocked_patterns.unwrap().len(), 1);
    }

    #[test]
    fn finalize_fills_defaults() {
        let config = PartialConfig::default().finalize();
        assert!(config.build_output.is_none());
        assert_eq!(config.search_root, PathBuf::from("src/S7Tools/bin"));
        assert!(!config.blocked_patterns.is_empty());
        assert!(config.seed_missing);
    }
}
