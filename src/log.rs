use std::fmt;

use tracing::Level;

/// A context value attached to a log record.
#[derive(Clone, Copy)]
pub enum LogValue<'a> {
    Str(&'a str),
    Error(&'a (dyn std::error::Error + 'static)),
}

impl fmt::Debug for LogValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

/// Destination for diagnostic records emitted while translating memos.
///
/// Implementations must be safe to share between request handlers.
/// A sink never influences the translation result.
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, message: &str, fields: &[(&str, LogValue<'_>)]);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _level: Level, _message: &str, _fields: &[(&str, LogValue<'_>)]) {}
}

pub static NOOP_SINK: NoopSink = NoopSink;

/// Forwards records to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

struct Fields<'a, 'b>(&'a [(&'a str, LogValue<'b>)]);

impl fmt::Display for Fields<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        Ok(())
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str, fields: &[(&str, LogValue<'_>)]) {
        let fields = Fields(fields);
        // `tracing` levels are constants, not an enum
        if level == Level::ERROR {
            tracing::error!(fields = %fields, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(fields = %fields, "{message}");
        } else if level == Level::INFO {
            tracing::info!(fields = %fields, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(fields = %fields, "{message}");
        } else {
            tracing::trace!(fields = %fields, "{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_render_in_order() {
        let err = std::fmt::Error;
        let fields = [
            ("memo", LogValue::from("abc")),
            ("cause", LogValue::Error(&err)),
        ];
        assert_eq!(
            Fields(&fields).to_string(),
            "memo=\"abc\" cause=an error occurred when formatting an argument"
        );
    }

    #[test]
    fn sinks_accept_records_without_subscriber() {
        let fields = [("memo", LogValue::from("x"))];
        NOOP_SINK.log(Level::WARN, "ignored", &fields);
        TracingSink.log(Level::DEBUG, "no subscriber installed", &fields);
    }
}
