//! Command interpreter capability
//!
//! The seam between the link core and the firmware's command
//! interpreter. The link feeds bytes in; what the interpreter does with
//! them (parsing, execution, fault reporting) is entirely its own
//! concern and never propagates back through the link.

/// Single-byte ingestion entry point of the command interpreter.
pub trait CommandSink {
    /// Ingest one byte of command input, in arrival order.
    fn push_byte(&mut self, byte: u8);

    /// The host connection dropped mid-session.
    ///
    /// Implementations should abort in-flight command state and return
    /// to idle. Default is a no-op for interpreters with no session
    /// state.
    fn link_lost(&mut self) {}
}
