pub mod io;
pub mod service;
pub mod tracker;
pub mod traits;

pub use io::{LinkIoError, LinkWriter};
pub use service::SerialLink;
pub use tracker::{ConnectionTracker, LinkEvent, LinkState};
pub use traits::LinkTransport;
