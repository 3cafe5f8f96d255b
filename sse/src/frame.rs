use crate::error::{Error, FrameErrorKind};
use std::fmt;

/// Trait for getting the SSE event type name
pub trait EventType {
    fn event_type(&self) -> &'static str;
}

/// Named event types a frame can carry. Frames without one are delivered to the
/// client's default `message` listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Error,
    End,
}

impl EventType for EventKind {
    fn event_type(&self) -> &'static str {
        match self {
            EventKind::Error => "error",
            EventKind::End => "end",
        }
    }
}

/// One unit of the event stream: an optional event name and a single-line payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    event: Option<EventKind>,
    data: String,
}

impl Frame {
    /// Builds a frame, rejecting payloads that would span more than one `data:` line.
    pub fn new(event: Option<EventKind>, data: impl Into<String>) -> Result<Self, Error> {
        let data = data.into();
        if data.contains(['\n', '\r']) {
            return Err(Error::frame(FrameErrorKind::MultilinePayload));
        }
        Ok(Self { event, data })
    }

    /// For payloads built by this crate that are single-line by construction.
    pub(crate) fn single_line(event: Option<EventKind>, data: String) -> Self {
        debug_assert!(!data.contains(['\n', '\r']));
        Self { event, data }
    }

    pub fn event(&self) -> Option<EventKind> {
        self.event
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_terminal(&self) -> bool {
        self.event == Some(EventKind::End)
    }
}

// The wire form written to clients: optional `event:` line, `data:` line, blank line.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(event) = self.event {
            writeln!(f, "event: {}", event.event_type())?;
        }
        writeln!(f, "data: {}", self.data)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SseErrorKind;

    #[test]
    fn test_error_frame_serializes_event_line_before_data_line() {
        let frame = Frame::new(Some(EventKind::Error), "system has some error.").unwrap();
        assert_eq!(
            frame.to_string(),
            "event: error\ndata: system has some error.\n\n"
        );
    }

    #[test]
    fn test_default_frame_omits_event_line() {
        let frame = Frame::new(None, "The time is 2024-01-02 03:04:05").unwrap();
        assert_eq!(
            frame.to_string(),
            "data: The time is 2024-01-02 03:04:05\n\n"
        );
    }

    #[test]
    fn test_end_frame_is_terminal() {
        let frame = Frame::new(Some(EventKind::End), "The end").unwrap();
        assert!(frame.is_terminal());
        assert_eq!(frame.to_string(), "event: end\ndata: The end\n\n");

        let frame = Frame::new(Some(EventKind::Error), "oops").unwrap();
        assert!(!frame.is_terminal());
    }

    #[test]
    fn test_multiline_payload_is_rejected() {
        for payload in ["two\nlines", "carriage\rreturn", "trailing\r\n"] {
            let err = Frame::new(None, payload).unwrap_err();
            assert_eq!(
                err.error_kind,
                SseErrorKind::Frame(FrameErrorKind::MultilinePayload)
            );
        }
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(EventKind::Error.event_type(), "error");
        assert_eq!(EventKind::End.event_type(), "end");
    }
}
