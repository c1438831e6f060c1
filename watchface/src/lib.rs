pub mod app;
pub mod cell;
pub mod clock;
pub mod components;
pub mod display;
pub mod draw;
pub mod error;
pub mod font;
pub mod grid;
pub mod layout;
pub mod page;
pub mod settings;
pub mod state;
pub mod text;

pub use app::{App, BinarySexagesimal, TickEvent, TickUnit, Watchface};
pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use error::WatchfaceError;
pub use settings::WatchfaceSettings;

/// Foreground and background of the watch screen.
pub use embedded_graphics::pixelcolor::BinaryColor::{Off as Black, On as White};
