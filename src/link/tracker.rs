//! Host-attachment edge detection
//!
//! A two-state machine over the live link signal. One observation per
//! tick; the returned edge event drives greeting emission and session
//! teardown in the service loop.

/// Attachment state as of the end of the previous observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connected,
}

/// Edge event derived from one observation of the live signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// Connection newly established
    Entered,
    /// Connection newly dropped
    Left,
    /// No edge this observation
    Unchanged,
}

/// Tracks the host connection across ticks.
///
/// Owned by the firmware's composition root and passed by reference,
/// so tests can construct independent instances.
pub struct ConnectionTracker {
    state: LinkState,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self {
            state: LinkState::Disconnected,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Feed the latest live signal; returns the edge event.
    ///
    /// The stored state always moves to the new observation,
    /// unconditionally, so a later opposite edge is detected correctly.
    pub fn observe(&mut self, connected: bool) -> LinkEvent {
        let event = match (self.state, connected) {
            (LinkState::Disconnected, true) => LinkEvent::Entered,
            (LinkState::Connected, false) => LinkEvent::Left,
            _ => LinkEvent::Unchanged,
        };

        self.state = if connected {
            LinkState::Connected
        } else {
            LinkState::Disconnected
        };

        event
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
