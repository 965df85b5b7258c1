//! Tracing setup for the bot process: stdout always, plus an append-mode log file when one
//! is configured.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Level comes from `RUST_LOG` (default `info`); load `.env`
/// first or its `RUST_LOG` is ignored.
///
/// An empty `log_file` logs to stdout only. Otherwise lines are teed to the file, whose
/// parent directories are created.
pub fn init_tracing(log_file: &str) -> anyhow::Result<()> {
    let to_file = !log_file.trim().is_empty();
    let writer =
        log_writer(log_file).with_context(|| format!("Failed to open log file {}", log_file))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(!to_file)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
    Ok(())
}

fn log_writer(log_file: &str) -> io::Result<BoxMakeWriter> {
    if log_file.trim().is_empty() {
        return Ok(BoxMakeWriter::new(io::stdout));
    }
    let path = Path::new(log_file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BoxMakeWriter::new(io::stdout.and(Arc::new(file))))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[test]
    fn test_log_writer_creates_nested_file_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ubot.log");

        let writer = log_writer(path.to_str().unwrap()).unwrap();
        writer.make_writer().write_all(b"first\n").unwrap();
        let writer = log_writer(path.to_str().unwrap()).unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_empty_log_file_means_stdout_only() {
        let writer = log_writer("  ").unwrap();
        writer.make_writer().write_all(b"").unwrap();
    }

    #[test]
    fn test_init_tracing_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the log file.
        assert!(init_tracing(dir.path().to_str().unwrap()).is_err());
    }
}
