//! Board settings loaded via OrthoConfig.
//!
//! Values layer CLI arguments over `BOARD_*` environment variables over an
//! optional configuration file.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::Page;

const DEFAULT_TAKE: i64 = 100;
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration values for the board service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOARD")]
pub struct BoardSettings {
    /// Page size used when a listing request omits `take`.
    pub default_take: Option<i64>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Tracing filter directive applied when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl BoardSettings {
    /// Return the configured page size, falling back to the default.
    #[must_use]
    pub fn default_take(&self) -> i64 {
        self.default_take.unwrap_or(DEFAULT_TAKE)
    }

    /// Return the configured tracing filter, falling back to `info`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Build a listing window from optional query values.
    ///
    /// Missing `skip` means the start of the listing and missing `take`
    /// means [`Self::default_take`]. Supplied values are kept as given, so a
    /// negative `skip` or non-positive `take` still yields an empty window.
    #[must_use]
    pub fn page(&self, skip: Option<i64>, take: Option<i64>) -> Page {
        Page::new(skip.unwrap_or(0), take.unwrap_or_else(|| self.default_take()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for board configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> BoardSettings {
        BoardSettings::load_from_iter([OsString::from("board")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("BOARD_DEFAULT_TAKE", None::<String>),
            ("BOARD_JSON_LOGS", None::<String>),
            ("BOARD_LOG_FILTER", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.default_take(), DEFAULT_TAKE);
        assert!(!settings.json_logs);
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BOARD_DEFAULT_TAKE", Some("25".to_owned())),
            ("BOARD_JSON_LOGS", Some("true".to_owned())),
            ("BOARD_LOG_FILTER", Some("board_backend=debug".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.default_take(), 25);
        assert!(settings.json_logs);
        assert_eq!(settings.log_filter(), "board_backend=debug");
    }

    #[rstest]
    #[case(None, None, Page::new(0, 40))]
    #[case(Some(10), None, Page::new(10, 40))]
    #[case(None, Some(5), Page::new(0, 5))]
    #[case(Some(-1), Some(0), Page::new(-1, 0))]
    fn page_fills_missing_values(
        #[case] skip: Option<i64>,
        #[case] take: Option<i64>,
        #[case] expected: Page,
    ) {
        let settings = BoardSettings {
            default_take: Some(40),
            json_logs: false,
            log_filter: None,
        };
        assert_eq!(settings.page(skip, take), expected);
    }

    #[rstest]
    fn page_preserves_empty_window_rule() {
        let settings = BoardSettings {
            default_take: None,
            json_logs: false,
            log_filter: None,
        };
        assert!(settings.page(Some(-3), None).is_empty());
        assert!(!settings.page(None, None).is_empty());
    }
}
