use env_logger::Env;

/// Initializes logging at `info`, overridable through `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
