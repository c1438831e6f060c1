use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;
use u8g2_fonts::FontRenderer;

use crate::{draw::DrawError, font, text::Text, White};

pub fn draw_weekday<Display>(
    display: &mut Display,
    weekday: &str,
    x: i32,
    y: i32,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = BinaryColor>,
    Display::Error: Debug,
{
    let font = FontRenderer::new::<font::helv_bold_18>();

    Text::new(weekday, &font).x(x).y(y).draw(display, White)?;

    Ok(())
}
