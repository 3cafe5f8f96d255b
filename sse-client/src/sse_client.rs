use anyhow::Result;
use eventsource_client::{self as es, Client};
use futures_util::stream::StreamExt;
use log::*;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Event name the browser assigns to frames sent without an `event:` line.
pub const DEFAULT_EVENT_TYPE: &str = "message";

#[derive(Debug, Clone)]
pub struct Frame {
    pub event_type: String,
    pub data: String,
    pub elapsed: Duration,
}

pub struct Connection {
    frame_rx: mpsc::UnboundedReceiver<Frame>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Connection {
    /// Opens `<base_url>/sse`. Reconnection is disabled: the server sends one finite
    /// sequence per connection and a reconnect would start a new one.
    pub fn establish(base_url: &str) -> Result<Self> {
        let url = format!("{}/sse", base_url.trim_end_matches('/'));
        let (tx, rx) = mpsc::unbounded_channel();

        let client = es::ClientBuilder::for_url(&url)?
            .reconnect(es::ReconnectOptions::reconnect(false).build())
            .build();

        let started = Instant::now();
        let handle = tokio::spawn(async move {
            let mut stream = client.stream();

            loop {
                match stream.next().await {
                    Some(Ok(es::SSE::Event(event))) => {
                        let frame = Frame {
                            event_type: event.event_type,
                            data: event.data,
                            elapsed: started.elapsed(),
                        };

                        if tx.send(frame).is_err() {
                            debug!("Frame receiver dropped for {url}");
                            break;
                        }
                    }
                    Some(Ok(es::SSE::Comment(_))) => {
                        // Ignore comments (keep-alive)
                    }
                    Some(Err(e)) => {
                        debug!("Stream from {url} ended: {e:?}");
                        break;
                    }
                    None => {
                        debug!("Stream from {url} ended");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            frame_rx: rx,
            _handle: handle,
        })
    }

    /// Waits for the next frame. `None` means the server closed the stream.
    pub async fn next_frame(&mut self, timeout: Duration) -> Result<Option<Frame>> {
        match tokio::time::timeout(timeout, self.frame_rx.recv()).await {
            Ok(frame) => Ok(frame),
            Err(_) => anyhow::bail!("Timeout after {timeout:?} waiting for the next frame"),
        }
    }
}
