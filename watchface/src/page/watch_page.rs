use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;

use crate::{
    clock::ClockReading,
    components::{draw_binary_clock, draw_date, draw_weekday},
    draw::{clear, DrawError},
    state::WatchfaceState,
};

const TEXT_MARGIN: i32 = 4;
const DAY_Y: i32 = 4;
const DATE_Y: i32 = 34;

/// One full frame of the watch face.
pub struct WatchPage<'a> {
    pub state: &'a WatchfaceState,
    pub reading: ClockReading,
}

impl<'a> WatchPage<'a> {
    pub fn new(state: &'a WatchfaceState, reading: ClockReading) -> Self {
        Self { state, reading }
    }

    pub fn draw<Display>(&self, display: &mut Display) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        let settings = self.state.settings();
        let text_x = settings.layout.text_area().top_left.x + TEXT_MARGIN;

        // Clear the display
        clear(display)?;

        draw_binary_clock(
            display,
            &self.reading,
            &settings.layout,
            settings.ring_method,
        )?;

        draw_weekday(display, self.state.day_text(), text_x, DAY_Y)?;

        draw_date(display, self.state.date_text(), text_x, DATE_Y)?;

        Ok(())
    }
}
