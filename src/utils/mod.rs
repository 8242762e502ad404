pub mod path;
pub mod time;

pub use time::RunClock;
