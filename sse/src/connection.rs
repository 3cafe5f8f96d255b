use chrono::{DateTime, Local};
use dashmap::DashMap;
use log::*;
use std::sync::Arc;

/// Unique identifier for a stream connection (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Bookkeeping for one live stream
#[derive(Debug, Clone)]
pub struct StreamInfo {
    pub opened_at: DateTime<Local>,
    pub frames_sent: usize,
}

/// Registry of the streams currently being produced, one entry per connection.
///
/// Entries are only ever touched by their own ticker task, so each connection's
/// bookkeeping is independent; the map exists so that shutdown and disconnect
/// cleanup can be observed from outside the task.
pub struct StreamRegistry {
    streams: DashMap<ConnectionId, StreamInfo>,
}

impl StreamRegistry {
    pub fn new() -> Self {
        Self {
            streams: DashMap::new(),
        }
    }

    /// Register a new stream - O(1)
    pub fn register(&self) -> ConnectionId {
        let connection_id = ConnectionId::new();
        self.streams.insert(
            connection_id.clone(),
            StreamInfo {
                opened_at: Local::now(),
                frames_sent: 0,
            },
        );
        connection_id
    }

    /// Count one delivered frame against a stream - O(1)
    pub fn record_frame(&self, connection_id: &ConnectionId) {
        match self.streams.get_mut(connection_id) {
            Some(mut info) => info.frames_sent += 1,
            None => warn!(
                "Recorded a frame for unknown stream {}",
                connection_id.as_str()
            ),
        }
    }

    /// Unregister a stream - O(1)
    pub fn unregister(&self, connection_id: &ConnectionId) -> Option<StreamInfo> {
        self.streams.remove(connection_id).map(|(_, info)| info)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.streams.contains_key(connection_id)
    }

    pub fn frames_sent(&self, connection_id: &ConnectionId) -> Option<usize> {
        self.streams.get(connection_id).map(|info| info.frames_sent)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds a registry entry for as long as a stream task is alive and removes it on
/// drop, which also covers tasks aborted mid-stream.
pub struct Registration {
    registry: Arc<StreamRegistry>,
    connection_id: ConnectionId,
}

impl Registration {
    pub fn new(registry: Arc<StreamRegistry>) -> Self {
        let connection_id = registry.register();
        Self {
            registry,
            connection_id,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn record_frame(&self) {
        self.registry.record_frame(&self.connection_id);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(info) = self.registry.unregister(&self.connection_id) {
            debug!(
                "Released stream {} after {} frame(s), opened at {}",
                self.connection_id.as_str(),
                info.frames_sent,
                info.opened_at.to_rfc3339()
            );
        }
    }
}
