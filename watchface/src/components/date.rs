use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;
use u8g2_fonts::FontRenderer;

use crate::{draw::DrawError, font, text::Text, White};

const LINE_SPACING: i32 = 26;

/// Draws the month and day, one line per `\n` in `date`.
pub fn draw_date<Display>(
    display: &mut Display,
    date: &str,
    x: i32,
    y: i32,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = BinaryColor>,
    Display::Error: Debug,
{
    let font = FontRenderer::new::<font::helv_regular_18>();

    let mut line_y = y;
    for line in date.lines() {
        Text::new(line, &font)
            .x(x)
            .y(line_y)
            .draw(display, White)?;

        line_y += LINE_SPACING;
    }

    Ok(())
}
