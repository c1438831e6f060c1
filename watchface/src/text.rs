use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
    primitives::Rectangle,
};
use std::fmt::Debug;
use u8g2_fonts::{
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use crate::draw::DrawError;

pub struct Text {
    text: String,
    font: FontRenderer,
    x: i32,
    y: i32,
    vertical_pos: VerticalPosition,
    horizontal_align: HorizontalAlignment,
}

impl Text {
    pub fn new(text: &str, font: &FontRenderer) -> Self {
        Self {
            text: text.to_string(),
            font: font.clone(),
            x: 0,
            y: 0,
            vertical_pos: VerticalPosition::Top,
            horizontal_align: HorizontalAlignment::Left,
        }
    }

    pub fn x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    /// Area the text will cover, `None` for text without visible glyphs.
    pub fn bounding_box(&self) -> Result<Option<Rectangle>, DrawError> {
        self.font
            .get_rendered_dimensions_aligned(
                self.text.as_str(),
                Point::new(self.x, self.y),
                self.vertical_pos,
                self.horizontal_align,
            )
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
    }

    pub fn draw<Display>(
        &self,
        display: &mut Display,
        color: BinaryColor,
    ) -> Result<Option<Rectangle>, DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        self.font
            .render_aligned(
                self.text.as_str(),
                Point::new(self.x, self.y),
                self.vertical_pos,
                self.horizontal_align,
                FontColor::Transparent(color),
                display,
            )
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
    }
}
