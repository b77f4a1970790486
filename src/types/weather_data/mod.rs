pub mod current;
pub mod daily;
pub mod hourly;
pub mod next_hour;
