pub mod colors;
pub mod date;
pub mod path;
pub mod time;

pub use date::day_stamp;
pub use time::{Clock, FixedClock, SystemClock, iso_timestamp};
