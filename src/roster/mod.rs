pub mod menu;
pub mod ops;
pub mod types;

pub use menu::run;
pub use ops::{search, stats, train, RosterStats};
pub use types::{clamp_age, clamp_level, Apprentice, MAX_LEVEL, MIN_AGE};
