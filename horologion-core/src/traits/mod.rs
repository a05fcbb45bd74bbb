//! Hardware abstraction traits.

mod display;
mod link;
mod time;

pub use display::LedDisplay;
pub use link::NetworkLink;
pub use time::TimeSource;
