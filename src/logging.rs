/// Logging setup for the command-line front end
///
/// The library only talks to the `log` facade. This installs `env_logger`
/// behind it, showing debug output by default in development builds (or
/// when the `console_logging` feature is enabled) and only warnings in
/// release builds. `RUST_LOG` always takes precedence.
pub fn init() {
    let default_filter = if cfg!(any(debug_assertions, feature = "console_logging")) {
        "debug"
    } else {
        "warn"
    };

    // A second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
