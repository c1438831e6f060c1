use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;

use crate::{
    cell::RingMethod, clock::ClockReading, draw::DrawError, grid::CellGrid, layout::GridLayout,
};

/// Draws hours, minutes and seconds as three columns of binary cells.
pub fn draw_binary_clock<Display>(
    display: &mut Display,
    reading: &ClockReading,
    layout: &GridLayout,
    ring_method: RingMethod,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = BinaryColor>,
    Display::Error: Debug,
{
    CellGrid::from_reading(reading).draw(display, layout, ring_method)
}
