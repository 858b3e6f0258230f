use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// File-layer line format: `[<ISO-8601>] [<LEVEL>] <message>`.
struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        write!(writer, "[{}] [{}] ", timestamp, event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize structured logging: console plus a flat log file.
///
/// The log file is truncated here, exactly once per run. Logging is
/// best-effort: if the file cannot be opened the failure is reported on the
/// console and the installer continues with console output only.
pub fn init(log_path: &Path) {
    let file_layer = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
    {
        Ok(file) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(LogLineFormat)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        ),
        Err(source) => {
            eprintln!("Could not open log file {:?}: {}", log_path, source);
            None
        }
    };

    // Warnings and errors go to stderr, everything else to stdout.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(
            std::io::stderr
                .with_max_level(Level::WARN)
                .or_else(std::io::stdout),
        );

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Logging already initialized; keeping existing subscriber");
    }
}
