//! log configuration and setup module

use std::env;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Blanket level when the operator hasn't set RUST_LOG themselves
fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Sets up logging
pub fn setup_logging(debug: bool, db_debug: bool) -> Result<(), log::SetLoggerError> {
    // a user-provided RUST_LOG wins over the --debug flag, so capture whether
    // it was set before we touch it
    let env_overridden = env::var("RUST_LOG").is_ok();

    #[cfg(not(test))]
    if !env_overridden {
        env::set_var("RUST_LOG", "info");
    }

    let mut builder = Builder::from_default_env();

    if !env_overridden {
        builder.filter_level(default_level(debug));
    }

    if !db_debug {
        // We don't always want to see the SQL queries in the logs
        builder.filter(Some("sea_orm::driver::sqlx_sqlite"), LevelFilter::Warn);
        builder.filter(Some("sqlx::query"), LevelFilter::Warn);
    }

    builder.filter(Some("tracing::span"), LevelFilter::Warn);
    builder.target(Target::Stdout);

    #[cfg(not(test))]
    {
        builder.try_init()
    }

    #[cfg(test)]
    {
        if let Err(err) = builder.try_init() {
            use tracing::debug;
            debug!("Error init logging: {:?}", err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{default_level, setup_logging};

    #[test]
    fn test_setup_logging() {
        let test1 = setup_logging(false, true);
        dbg!(&test1);
        assert!(test1.is_ok());
        // it'll probably throw an error because we're trying to re-init the logger, but we're in test so it's OK.
        let test2 = setup_logging(true, true);
        dbg!(&test1);
        assert!(test2.is_ok());
    }

    /// the --debug flag has to actually lower the blanket level
    #[test]
    fn test_debug_flag_sets_debug_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }
}
