//! Firmware-wide configuration constants for the host link.

/// Firmware identity reported to the host
pub mod version {
    /// Product name token in the connection greeting
    pub const FIRMWARE_NAME: &str = "MotionLink";

    /// Firmware version
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Greeting emitted once per newly-established connection.
///
/// The exact bytes are not a compatibility contract; only the trigger
/// condition (once per connection session) is.
pub mod greeting {
    /// Banner line with product name and version token
    pub const BANNER: &str = concat!("\r\nMotionLink ", env!("CARGO_PKG_VERSION"), "\r\n");

    /// Usage hint printed after the banner
    pub const HINT: &str = "\r\n'$' to dump current settings\r\n";
}

/// Link buffer sizing
pub mod link {
    /// Receive queue capacity, sized to match a typical CDC ring buffer
    pub const RX_BUFFER_SIZE: usize = 512;

    /// Transmit buffer capacity
    pub const TX_BUFFER_SIZE: usize = 512;
}
