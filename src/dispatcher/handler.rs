//! Byte dispatch into the command interpreter
//!
//! Thin, synchronous forwarding layer between the link's drain loop and
//! the interpreter. No buffering, parsing, or filtering happens here.

use crate::interpreter::CommandSink;

/// Forwards drained bytes to the command interpreter.
pub struct ByteDispatcher<S: CommandSink> {
    sink: S,
}

impl<S: CommandSink> ByteDispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Forward one byte, synchronously, to the interpreter.
    ///
    /// Never fails from the link's perspective; interpreter faults stay
    /// on the interpreter's side of the seam.
    pub fn dispatch(&mut self, byte: u8) {
        self.sink.push_byte(byte);
    }

    /// Tell the interpreter the host session ended.
    pub fn notify_link_lost(&mut self) {
        self.sink.link_lost();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
