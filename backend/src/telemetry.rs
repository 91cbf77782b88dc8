//! Tracing subscriber initialisation.

use std::error::Error;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::BoardSettings;

/// Install the global fmt subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// [`BoardSettings::log_filter`]. Returns an error instead of panicking when
/// the filter does not parse or a global subscriber is already installed.
pub fn init_tracing(settings: &BoardSettings) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_filter()))?;
    let builder = fmt().with_env_filter(filter);
    if settings.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn second_installation_is_reported_not_panicked() {
        let _guard = lock_env([("RUST_LOG", None::<String>)]);
        let settings = BoardSettings {
            default_take: None,
            json_logs: true,
            log_filter: Some("board_backend=debug".to_owned()),
        };

        init_tracing(&settings).expect("first installation succeeds");
        assert!(init_tracing(&settings).is_err());
    }
}
