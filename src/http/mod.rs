//! HTTP Protocol.
mod status;
mod date;
mod clock;

pub use status::StatusCode;
pub use date::{httpdate, httpdate_now};
pub use clock::{Clock, FixedClock, SystemClock};
