use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Route `log` output from the crate through env_logger once per test binary.
/// `RUST_LOG=simplemap=debug` shows growth events.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("simplemap", LevelFilter::Info)
            .is_test(true)
            .parse_default_env();

        let _ = builder.try_init();
    });
}
