pub mod binary_clock;
pub mod date;
pub mod weekday;

pub use binary_clock::draw_binary_clock;
pub use date::draw_date;
pub use weekday::draw_weekday;
