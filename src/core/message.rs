//! Message sinks for player-facing notifications.
//!
//! Tile actions and the engine announce notable events ("Ada climbs up the
//! ladder!") through a `MessageSink`. The engine never assumes a UI exists:
//! `NullSink` is always a valid choice.

use std::cell::RefCell;
use std::rc::Rc;

/// Receiver for player-facing messages.
pub trait MessageSink {
    /// Display or record one message.
    fn send(&mut self, message: &str);
}

/// Sink that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn send(&mut self, _message: &str) {}
}

impl<F> MessageSink for F
where
    F: FnMut(&str),
{
    fn send(&mut self, message: &str) {
        self(message)
    }
}

/// Shared recorder of sent messages.
///
/// Clones share the same buffer, so a driver can hand one clone to the
/// engine and keep another to read from.
///
/// ```
/// use rust_ladders::core::{MessageLog, MessageSink};
///
/// let log = MessageLog::new();
/// let mut sink = log.clone();
/// sink.send("hello");
/// assert_eq!(log.messages(), vec!["hello".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MessageLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every message sent so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of sent messages equal to `message`.
    #[must_use]
    pub fn count(&self, message: &str) -> usize {
        self.messages.borrow().iter().filter(|m| *m == message).count()
    }

    /// Number of messages sent so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Check if nothing has been sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl MessageSink for MessageLog {
    fn send(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
