//! Transport capability consumed by the link core
//!
//! This trait is the seam between the link service loop and the USB
//! device stack. The board support layer implements it over the real
//! CDC driver; tests use the mock implementation below.

/// Abstract byte transport for the host link.
///
/// Implementations that move bytes in interrupt context must make
/// `link_signal` and `input_available` return consistent snapshots
/// (critical section or atomic on the implementing side); the link core
/// reads each at most once per tick and never re-reads mid-tick.
pub trait LinkTransport {
    /// One-time bring-up of the underlying device stack.
    ///
    /// Called once from `SerialLink::init` before the first tick.
    fn init(&mut self);

    /// Periodic housekeeping: flush endpoint queues, answer device-level
    /// control requests. Must not block indefinitely; a stalled
    /// transport is fatal to the firmware as a whole and is not
    /// recovered by the link core.
    fn service(&mut self);

    /// Current host-attachment indicator (e.g. DTR asserted by the host
    /// application that opened the virtual COM port).
    fn link_signal(&self) -> bool;

    /// Number of input bytes currently queued.
    fn input_available(&self) -> usize;

    /// Remove and return the oldest queued input byte.
    ///
    /// Guaranteed `Some` while a previously observed count remains
    /// unconsumed; `None` stops the caller's drain.
    fn input_take(&mut self) -> Option<u8>;

    /// Queue one byte for transmission. May wait for transmit-buffer
    /// space, bounded by the transport's own flow control; never waits
    /// for a host to be attached.
    fn output_byte(&mut self, byte: u8);

    /// Discard all queued input without reading it. Idempotent.
    fn input_flush(&mut self);
}
