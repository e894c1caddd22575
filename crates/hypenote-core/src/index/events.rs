//! Change notification for index observers

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::trace;

/// Something that changed in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// The collection was replaced by a fresh load
    Loaded { count: usize },
    Added { id: String },
    Updated { id: String },
    Removed { id: String },
    /// The collection was re-sorted by recency
    Resorted,
}

/// Fan-out of index events to every live subscriber
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<IndexEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<IndexEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    /// Send `event` to all subscribers, dropping those whose receiver is gone
    pub(crate) fn emit(&mut self, event: IndexEvent) {
        if self.senders.is_empty() {
            return;
        }
        trace!(?event, "Index event");
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
