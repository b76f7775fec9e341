pub mod clock;
pub mod memory;
pub mod mock;
pub mod notifier;

pub use clock::{ManualClock, SystemClock};
