//! Verifies a received frame sequence against what the server is expected to send.

use crate::sse_client::{Frame, DEFAULT_EVENT_TYPE};

const ERROR_FRAMES: usize = 3;
const TIMESTAMP_FRAMES: usize = 2;
pub const EXPECTED_FRAMES: usize = ERROR_FRAMES + TIMESTAMP_FRAMES + 1;

/// Returns one message per frame that deviates from the expected sequence.
pub fn check_sequence(frames: &[Frame]) -> Vec<String> {
    let mut problems = Vec::new();

    if frames.len() != EXPECTED_FRAMES {
        problems.push(format!(
            "expected {EXPECTED_FRAMES} frames, received {}",
            frames.len()
        ));
    }

    let mut last_stamp: Option<&str> = None;
    for (i, frame) in frames.iter().enumerate() {
        let number = i + 1;
        match i {
            i if i < ERROR_FRAMES => {
                if frame.event_type != "error" || frame.data != "system has some error." {
                    problems.push(format!("frame {number} is not an error frame: {frame:?}"));
                }
            }
            i if i < ERROR_FRAMES + TIMESTAMP_FRAMES => {
                let stamp = frame.data.strip_prefix("The time is ");
                match stamp {
                    Some(stamp)
                        if frame.event_type == DEFAULT_EVENT_TYPE && is_timestamp(stamp) =>
                    {
                        if last_stamp.is_some_and(|last| stamp < last) {
                            problems.push(format!("frame {number} timestamp went backwards"));
                        }
                        last_stamp = Some(stamp);
                    }
                    _ => problems.push(format!("frame {number} is not a timestamp frame: {frame:?}")),
                }
            }
            i if i == EXPECTED_FRAMES - 1 => {
                if frame.event_type != "end" || frame.data != "The end" {
                    problems.push(format!("frame {number} is not the end frame: {frame:?}"));
                }
            }
            _ => problems.push(format!("unexpected frame {number}: {frame:?}")),
        }
    }

    problems
}

/// `YYYY-MM-DD HH:MM:SS`
fn is_timestamp(stamp: &str) -> bool {
    let bytes = stamp.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}
