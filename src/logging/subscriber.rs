//! Tracing subscriber setup: console formatter and initialisation.
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io::IsTerminal as _;

use tracing::field::{Field, Visit};
use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;

use super::logger::{DRY_RUN_TARGET, STAGE_TARGET};
use crate::config::LOG_ENV;

/// How an event is laid out on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Error,
    Warning,
    Stage,
    DryRun,
    Progress,
    Detail,
}

impl LineKind {
    fn of(metadata: &Metadata<'_>) -> Self {
        match *metadata.level() {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warning,
            Level::INFO => match metadata.target() {
                STAGE_TARGET => Self::Stage,
                DRY_RUN_TARGET => Self::DryRun,
                _ => Self::Progress,
            },
            _ => Self::Detail,
        }
    }

    /// Leading marker and its SGR colour code.
    const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Error => ("ERROR ", "31"),
            Self::Warning => ("WARN  ", "33"),
            Self::Stage => ("==> ", "1;34"),
            Self::DryRun => ("  [DRY RUN] ", "33"),
            Self::Progress | Self::Detail => ("  ", "0"),
        }
    }

    /// SGR code applied to the message itself, if any.
    const fn body_style(self) -> Option<&'static str> {
        match self {
            Self::Stage => Some("1"),
            Self::Detail => Some("2"),
            _ => None,
        }
    }
}

/// Colours text only when the writer accepts ANSI escapes.
#[derive(Debug, Clone, Copy)]
struct Paint(bool);

impl Paint {
    fn apply<'a>(self, sgr: &str, text: &'a str) -> Cow<'a, str> {
        if self.0 && sgr != "0" && !text.trim().is_empty() {
            Cow::Owned(format!("\x1b[{sgr}m{text}\x1b[0m"))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Collects an event's message and any structured fields, in order.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Renders installer output: `==>` stage headers, indented progress lines,
/// `[DRY RUN]` actions and dimmed `key=value` fields. Colour is dropped when
/// the output is not a terminal.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let kind = LineKind::of(event.metadata());
        let paint = Paint(writer.has_ansi_escapes());

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let (marker, marker_style) = kind.marker();
        let body = match kind.body_style() {
            Some(style) => paint.apply(style, &visitor.message),
            None => Cow::Borrowed(visitor.message.as_str()),
        };
        write!(writer, "{}{body}", paint.apply(marker_style, marker))?;
        if !visitor.fields.is_empty() {
            write!(writer, "{}", paint.apply("2", &visitor.fields))?;
        }
        writeln!(writer)
    }
}

/// Build the console filter from `HEXXA_LOG`, defaulting to `info`.
fn console_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout. Must be
/// called once at program startup, before any logging.
pub fn init_subscriber() {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(make_writer)
        .with_filter(console_filter());

    tracing_subscriber::registry().with(console_layer).init();
}

/// Run `emit` with a thread-local console subscriber and return everything
/// it rendered.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub fn capture(ansi: bool, emit: impl FnOnce()) -> String {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt as _;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let writer = sink.clone();
    let layer = tracing_subscriber::fmt::layer()
        .event_format(ConsoleFormatter)
        .with_ansi(ansi)
        .with_writer(move || writer.clone());
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, emit);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Logger;

    #[test]
    fn stage_renders_header() {
        let out = capture(false, || Logger::new().stage("Install themes"));
        assert_eq!(out, "==> Install themes\n");
    }

    #[test]
    fn stage_is_bold_on_a_terminal() {
        let out = capture(true, || Logger::new().stage("Install themes"));
        assert_eq!(out, "\x1b[1;34m==> \x1b[0m\x1b[1mInstall themes\x1b[0m\n");
    }

    #[test]
    fn dry_run_renders_marker() {
        let out = capture(false, || Logger::new().dry_run("Would copy a to b"));
        assert_eq!(out, "  [DRY RUN] Would copy a to b\n");
    }

    #[test]
    fn info_is_indented() {
        let out = capture(true, || Logger::new().info("Installed Hexxa"));
        assert_eq!(out, "  Installed Hexxa\n");
    }

    #[test]
    fn warn_and_error_have_prefixes() {
        let out = capture(false, || {
            Logger::new().warn("careful");
            Logger::new().error("boom");
        });
        assert_eq!(out, "WARN  careful\nERROR boom\n");
    }

    #[test]
    fn debug_is_dimmed_on_a_terminal() {
        let out = capture(true, || Logger::new().debug("details"));
        assert_eq!(out, "  \x1b[2mdetails\x1b[0m\n");
    }

    #[test]
    fn structured_fields_follow_the_message() {
        let out = capture(false, || {
            tracing::debug!(tool = "unzip", status = ?Some(9), "extraction failed");
        });
        assert_eq!(out, "  extraction failed tool=unzip status=Some(9)\n");
    }
}
