//! Link service loop
//!
//! The single periodic entry point for the host link. Each tick drives
//! transport housekeeping, evaluates connection edges (greeting on a new
//! connection, interpreter teardown on a drop), and drains the input
//! queue into the byte dispatcher.

use embedded_io::Write;
use log::{debug, info};

use crate::config;
use crate::dispatcher::ByteDispatcher;
use crate::interpreter::CommandSink;
use crate::link::io::LinkWriter;
use crate::link::tracker::{ConnectionTracker, LinkEvent};
use crate::link::traits::LinkTransport;

/// Host link over a byte transport.
///
/// Owned by the firmware's composition root. Not reentrant: `tick` must
/// only be called from the single main-loop context, never recursively.
pub struct SerialLink<T: LinkTransport, S: CommandSink> {
    transport: T,
    dispatcher: ByteDispatcher<S>,
    tracker: ConnectionTracker,
}

impl<T: LinkTransport, S: CommandSink> SerialLink<T, S> {
    pub fn new(transport: T, sink: S) -> Self {
        Self {
            transport,
            dispatcher: ByteDispatcher::new(sink),
            tracker: ConnectionTracker::new(),
        }
    }

    /// One-time startup; brings up the transport.
    ///
    /// Must be called before the first `tick`.
    pub fn init(&mut self) {
        self.transport.init();
        debug!(
            "host link ready: {} {}",
            config::version::FIRMWARE_NAME,
            config::version::VERSION
        );
    }

    /// Service the link once. Call on a steady period from the main
    /// firmware cycle.
    pub fn tick(&mut self) {
        self.transport.service();

        match self.tracker.observe(self.transport.link_signal()) {
            LinkEvent::Entered => {
                info!("host connected");
                self.emit_greeting();
            }
            LinkEvent::Left => {
                info!("host disconnected");
                self.dispatcher.notify_link_lost();
            }
            LinkEvent::Unchanged => {}
        }

        // Drain only what was queued when the count was taken; bytes
        // arriving mid-drain wait for the next tick. This bounds
        // per-tick latency for the rest of the firmware.
        let mut available = self.transport.input_available();
        while available > 0 {
            match self.transport.input_take() {
                Some(byte) => self.dispatcher.dispatch(byte),
                None => break,
            }
            available -= 1;
        }
    }

    /// Queue one byte for transmission to the host.
    pub fn write_byte(&mut self, byte: u8) {
        self.transport.output_byte(byte);
    }

    /// Borrowing `embedded_io::Write` adapter for multi-byte output.
    pub fn writer(&mut self) -> LinkWriter<'_, T> {
        LinkWriter::new(&mut self.transport)
    }

    /// Discard all queued input without reading it.
    ///
    /// Used by e-stop and soft-reset paths so no stale partial command
    /// keeps being processed. Callable at any time, idempotent.
    pub fn reset_input_buffer(&mut self) {
        self.transport.input_flush();
        debug!("input buffer reset");
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn interpreter(&self) -> &S {
        self.dispatcher.sink()
    }

    pub fn interpreter_mut(&mut self) -> &mut S {
        self.dispatcher.sink_mut()
    }

    fn emit_greeting(&mut self) {
        let mut writer = LinkWriter::new(&mut self.transport);
        let _ = writer.write_all(config::greeting::BANNER.as_bytes());
        let _ = writer.write_all(config::greeting::HINT.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::traits::mock::MockInterpreter;
    use crate::link::traits::mock::MockTransport;

    fn new_link() -> SerialLink<MockTransport, MockInterpreter> {
        SerialLink::new(MockTransport::new(), MockInterpreter::new())
    }

    fn greeting_count(tx: &[u8]) -> usize {
        let banner = config::greeting::BANNER.as_bytes();
        tx.windows(banner.len()).filter(|w| *w == banner).count()
    }

    #[test]
    fn test_init_brings_up_transport() {
        let mut link = new_link();
        assert!(!link.transport().is_initialised());

        link.init();
        assert!(link.transport().is_initialised());
    }

    #[test]
    fn test_greeting_once_at_third_tick() {
        let mut link = new_link();
        link.init();

        // linkSignal() = false, false, true, true, false across five ticks
        let signals = [false, false, true, true, false];
        for (i, &up) in signals.iter().enumerate() {
            link.transport_mut().set_link(up);
            link.tick();

            let expected = if i < 2 { 0 } else { 1 };
            assert_eq!(greeting_count(link.transport().tx_data()), expected);
        }
    }

    #[test]
    fn test_greeting_repeats_on_reconnection() {
        let mut link = new_link();
        link.init();

        for &up in &[true, false, true] {
            link.transport_mut().set_link(up);
            link.tick();
        }

        assert_eq!(greeting_count(link.transport().tx_data()), 2);
    }

    #[test]
    fn test_greeting_contains_version_and_hint() {
        let mut link = new_link();
        link.init();
        link.transport_mut().set_link(true);
        link.tick();

        let tx = core::str::from_utf8(link.transport().tx_data()).unwrap();
        assert!(tx.contains(config::version::VERSION));
        assert!(tx.contains("'$' to dump current settings"));
    }

    #[test]
    fn test_dispatches_queued_bytes_in_order_same_tick() {
        let mut link = new_link();
        link.init();
        link.transport_mut().set_link(true);
        link.transport_mut().queue_rx(&[0x24, 0x0A]); // "$\n"

        link.tick();

        assert_eq!(link.interpreter().received(), &[0x24, 0x0A]);
    }

    #[test]
    fn test_mid_drain_arrivals_deferred_to_next_tick() {
        let mut link = new_link();
        link.init();
        link.transport_mut().set_link(true);
        link.transport_mut().queue_rx(&[0x01, 0x02, 0x03]);
        link.transport_mut().arrive_during_drain(&[0x09, 0x0A]);

        link.tick();
        // Only the snapshot taken at drain start is delivered this tick
        assert_eq!(link.interpreter().received(), &[0x01, 0x02, 0x03]);

        link.tick();
        assert_eq!(
            link.interpreter().received(),
            &[0x01, 0x02, 0x03, 0x09, 0x0A]
        );
    }

    #[test]
    fn test_dispatch_works_without_link_signal() {
        // Bytes already queued are drained even if DTR was never seen
        let mut link = new_link();
        link.init();
        link.transport_mut().queue_rx(b"?");

        link.tick();

        assert_eq!(link.interpreter().received(), b"?");
        assert_eq!(greeting_count(link.transport().tx_data()), 0);
    }

    #[test]
    fn test_transport_serviced_every_tick() {
        let mut link = new_link();
        link.init();

        link.tick();
        link.tick();
        link.tick();

        assert_eq!(link.transport().service_calls(), 3);
    }

    #[test]
    fn test_link_lost_notifies_interpreter_once_per_drop() {
        let mut link = new_link();
        link.init();

        for &up in &[true, false, false, true, false] {
            link.transport_mut().set_link(up);
            link.tick();
        }

        assert_eq!(link.interpreter().link_lost_count(), 2);
    }

    #[test]
    fn test_reset_input_buffer_discards_pending_input() {
        let mut link = new_link();
        link.init();
        link.transport_mut().queue_rx(b"G1 X10\n");

        link.reset_input_buffer();
        assert_eq!(link.transport().input_available(), 0);

        // Idempotent, callable again immediately
        link.reset_input_buffer();
        assert_eq!(link.transport().input_available(), 0);

        link.transport_mut().set_link(true);
        link.tick();
        assert!(link.interpreter().received().is_empty());
    }

    #[test]
    fn test_write_byte_without_live_connection() {
        let mut link = new_link();
        link.init();
        // No host attached; write must complete without blocking
        link.write_byte(b'x');

        assert_eq!(link.transport().tx_data(), b"x");
    }

    #[test]
    fn test_writer_adapter_shares_transport() {
        let mut link = new_link();
        link.init();

        link.writer().write_all(b"ok\r\n").unwrap();
        link.write_byte(b'!');

        assert_eq!(link.transport().tx_data(), b"ok\r\n!");
    }
}
