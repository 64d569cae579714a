// libfeig/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
