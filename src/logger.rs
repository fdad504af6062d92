//! Logger setup shared by the crate's binaries

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards against installing the logger twice
static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade.
///
/// Defaults to `Info` and honours `RUST_LOG` overrides, e.g. `RUST_LOG=chaintable=trace`.
/// Calling it again is a no-op.
pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the embedding program.
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logger();
        init_logger();
        debug!("debug message in test");
        info!("info message in test");
    }
}
