use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_level(true)
        .try_init();

    if let Err(err) = result {
        eprintln!("warning: logging already initialized: {err}");
    }
}
