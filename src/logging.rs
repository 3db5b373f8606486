use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Environment variable naming a log file path.
pub const LOG_ENV: &str = "STATEFLOW_LOG";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing.
///
/// `verbose` sends logs to stderr. Otherwise nothing is logged unless
/// `STATEFLOW_LOG` names a file, keeping stdout clean for status lines.
/// `RUST_LOG` sets the filter, default `info`.
pub fn init_tracing(verbose: bool) {
    let output = if verbose {
        Some(stderr_layer())
    } else {
        std::env::var(LOG_ENV).ok().and_then(|base| file_layer(&base))
    };
    let Some(output) = output else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init();
}

fn stderr_layer() -> BoxedLayer {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .boxed()
}

fn file_layer(base: &str) -> Option<BoxedLayer> {
    let path = unique_log_path(base, std::process::id());
    match File::create(&path) {
        Ok(file) => Some(fmt::layer().with_writer(Arc::new(file)).with_ansi(false).boxed()),
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            None
        }
    }
}

/// `{base}.{unix_secs}.{pid}`, so concurrent runs never share a file.
fn unique_log_path(base: &str, pid: u32) -> PathBuf {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{base}.{secs}.{pid}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_timestamp_and_pid() {
        let path = unique_log_path("/tmp/stateflow.log", 4242);
        let name = path.file_name().unwrap().to_str().unwrap();
        let rest = name.strip_prefix("stateflow.log.").unwrap();
        let (secs, pid) = rest.split_once('.').unwrap();
        assert!(secs.parse::<u64>().unwrap() > 0);
        assert_eq!(pid, "4242");
    }

    #[test]
    fn unwritable_log_location_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let base = dir.path().join("missing").join("stateflow.log");
        assert!(file_layer(base.to_str().unwrap()).is_none());
    }
}
