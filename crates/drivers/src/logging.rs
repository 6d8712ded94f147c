use env_logger::Env;

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env = Env::default().default_filter_or("info");
    if let Err(error) = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init()
    {
        eprintln!("logging already initialised: {error}");
    }
}
