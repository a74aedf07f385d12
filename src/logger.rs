use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade. Safe to call any number of
/// times; only the first call has an effect. `RUST_LOG` overrides the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("rusty_chains", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another backend may already be installed by the embedding program.
        let _ = builder.try_init();
    });
}
