use crate::connection::{Registration, StreamRegistry};
use crate::frame::Frame;
use crate::generator::Generator;
use log::*;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

/// How a stream task finished. `frames` counts frames handed to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    Completed { frames: usize },
    Disconnected { frames: usize },
}

/// Drives a fresh [`Generator`] for one connection, pacing frames on a tokio timer.
pub struct Ticker;

impl Ticker {
    /// Spawns the stream task and returns the frame receiver plus the task handle.
    ///
    /// The stream is registered before this returns. Dropping the receiver stops the
    /// task at its next send or while it waits for the next tick.
    pub fn spawn(
        interval: Duration,
        registry: Arc<StreamRegistry>,
    ) -> (mpsc::Receiver<Frame>, JoinHandle<StreamOutcome>) {
        let (tx, rx) = mpsc::channel(1);
        let registration = Registration::new(registry);
        debug!("Opened stream {}", registration.connection_id().as_str());

        let handle = tokio::spawn(run(interval, tx, registration));
        (rx, handle)
    }
}

async fn run(
    interval: Duration,
    tx: mpsc::Sender<Frame>,
    registration: Registration,
) -> StreamOutcome {
    let connection_id = registration.connection_id().as_str().to_owned();
    let mut frames = 0;

    for frame in Generator::new() {
        let terminal = frame.is_terminal();
        trace!("Stream {connection_id} frame {}: {frame:?}", frames + 1);

        if tx.send(frame).await.is_err() {
            debug!("Stream {connection_id} receiver dropped after {frames} frame(s)");
            return StreamOutcome::Disconnected { frames };
        }
        frames += 1;
        registration.record_frame();

        if terminal {
            break;
        }

        tokio::select! {
            _ = time::sleep(interval) => {}
            _ = tx.closed() => {
                debug!("Stream {connection_id} client went away after {frames} frame(s)");
                return StreamOutcome::Disconnected { frames };
            }
        }
    }

    info!("Stream {connection_id} completed with {frames} frame(s)");
    StreamOutcome::Completed { frames }
}
