use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr so stdout only ever carries table output.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects info and `-vv` debug.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    tracing::debug!("tablegen logging initialized at {default_level}");
}
