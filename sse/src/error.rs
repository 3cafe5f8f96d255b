//! Error types for the `sse` layer.
use std::error::Error as StdError;
use std::fmt;

/// Errors in the `sse` layer carry an `error_kind` describing what went wrong and an
/// optional `source` holding the underlying error, mirroring the other layers so that
/// `web` can translate them into HTTP responses.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: SseErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum SseErrorKind {
    Frame(FrameErrorKind),
}

/// Ways a frame can violate the event-stream framing rules.
#[derive(Debug, PartialEq)]
pub enum FrameErrorKind {
    /// The payload contains a line terminator and would split into several `data:` lines.
    MultilinePayload,
}

impl Error {
    pub(crate) fn frame(kind: FrameErrorKind) -> Self {
        Error {
            source: None,
            error_kind: SseErrorKind::Frame(kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SSE Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
