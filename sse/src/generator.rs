//! The frame sequence for a single event stream.
//!
//! A [`Generator`] is a pure state machine over one tick counter. It does no
//! pacing and no I/O; the [`Ticker`](crate::ticker::Ticker) drives it on a timer.

use crate::frame::{EventKind, Frame};
use chrono::{DateTime, Local};

/// Ticks `[0, ERROR_TICKS)` emit error frames.
pub const ERROR_TICKS: usize = 3;
/// Ticks `[ERROR_TICKS, TIMESTAMP_TICKS_END)` emit timestamp frames.
pub const TIMESTAMP_TICKS_END: usize = 5;
/// Total number of frames in one stream, terminal frame included.
pub const FRAME_COUNT: usize = TIMESTAMP_TICKS_END + 1;

pub const ERROR_MESSAGE: &str = "system has some error.";
pub const END_MESSAGE: &str = "The end";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Default)]
pub struct Generator {
    tick: usize,
}

impl Generator {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// Number of frames produced so far.
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn is_exhausted(&self) -> bool {
        self.tick >= FRAME_COUNT
    }

    /// Produces the next frame, stamping timestamp frames with `now`.
    pub fn next_frame_at(&mut self, now: DateTime<Local>) -> Option<Frame> {
        let frame = match self.tick {
            t if t < ERROR_TICKS => {
                Frame::single_line(Some(EventKind::Error), ERROR_MESSAGE.to_string())
            }
            t if t < TIMESTAMP_TICKS_END => Frame::single_line(
                None,
                format!("The time is {}", now.format(TIMESTAMP_FORMAT)),
            ),
            t if t == TIMESTAMP_TICKS_END => {
                Frame::single_line(Some(EventKind::End), END_MESSAGE.to_string())
            }
            _ => return None,
        };
        // A single counter spans every phase
        self.tick += 1;
        Some(frame)
    }
}

impl Iterator for Generator {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.next_frame_at(Local::now())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = FRAME_COUNT.saturating_sub(self.tick);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Generator {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_reference_sequence() {
        let mut generator = Generator::new();
        let frames: Vec<String> = std::iter::from_fn(|| generator.next_frame_at(fixed_time()))
            .map(|frame| frame.to_string())
            .collect();

        assert_eq!(
            frames,
            vec![
                "event: error\ndata: system has some error.\n\n",
                "event: error\ndata: system has some error.\n\n",
                "event: error\ndata: system has some error.\n\n",
                "data: The time is 2024-03-09 07:05:01\n\n",
                "data: The time is 2024-03-09 07:05:01\n\n",
                "event: end\ndata: The end\n\n",
            ]
        );
    }

    #[test]
    fn test_generator_stays_exhausted_after_terminal_frame() {
        let mut generator = Generator::new();
        assert_eq!(generator.by_ref().count(), FRAME_COUNT);
        assert!(generator.is_exhausted());
        assert!(generator.next().is_none());
        assert!(generator.next_frame_at(fixed_time()).is_none());
        assert_eq!(generator.tick(), FRAME_COUNT);
    }

    #[test]
    fn test_each_generator_starts_from_tick_zero() {
        let mut first = Generator::new();
        first.next();
        first.next();

        let mut second = Generator::new();
        assert_eq!(second.tick(), 0);
        assert_eq!(second.next().unwrap().event(), Some(EventKind::Error));
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut generator = Generator::new();
        assert_eq!(generator.size_hint(), (FRAME_COUNT, Some(FRAME_COUNT)));
        generator.next();
        assert_eq!(generator.len(), FRAME_COUNT - 1);
    }

    #[test]
    fn test_only_last_frame_is_terminal() {
        let terminal: Vec<bool> = Generator::new().map(|f| f.is_terminal()).collect();
        assert_eq!(terminal, vec![false, false, false, false, false, true]);
    }
}
