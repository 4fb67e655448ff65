//! Tracing setup

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber. Logs go to stderr so command output stays clean.
///
/// `RUST_LOG` wins; otherwise `-v` raises the default level.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else {
        match verbose {
            0 if cfg!(debug_assertions) => EnvFilter::new("warn,cream_client=info"),
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info,cream_client=debug"),
            _ => EnvFilter::new("debug"),
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
