use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point, Primitive},
    primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
    Drawable,
};
use std::fmt::Debug;

use crate::{draw::DrawError, Black, White};

/// One position of the binary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    pub filled: bool,
}

/// How an unfilled cell gets its ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RingMethod {
    /// A single circle with an inside stroke and a background interior.
    #[default]
    Stroked,
    /// A foreground disk covered by a smaller background disk, for targets
    /// that can only fill.
    Layered,
}

/// The circle drawn for a cell.
pub struct Indicator {
    pub center: Point,
    pub radius: u32,
    pub line_thickness: u32,
    pub method: RingMethod,
}

impl Indicator {
    pub fn new(center: Point, radius: u32) -> Self {
        Self {
            center,
            radius,
            line_thickness: 1,
            method: RingMethod::default(),
        }
    }

    pub fn line_thickness(mut self, line_thickness: u32) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    pub fn method(mut self, method: RingMethod) -> Self {
        self.method = method;
        self
    }

    /// Odd diameter so the circle sits exactly on its center pixel.
    fn diameter(radius: u32) -> u32 {
        2 * radius + 1
    }

    pub fn draw<Display>(&self, display: &mut Display, filled: bool) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        if filled {
            return self.draw_disk(display, self.radius, PrimitiveStyle::with_fill(White));
        }

        match self.method {
            RingMethod::Stroked => {
                let style = PrimitiveStyleBuilder::new()
                    .fill_color(Black)
                    .stroke_color(White)
                    .stroke_width(self.line_thickness)
                    .stroke_alignment(StrokeAlignment::Inside)
                    .build();

                self.draw_disk(display, self.radius, style)
            }
            RingMethod::Layered => {
                self.draw_disk(display, self.radius, PrimitiveStyle::with_fill(White))?;

                let inner_radius = self.radius.saturating_sub(self.line_thickness);
                if self.line_thickness < self.radius {
                    self.draw_disk(display, inner_radius, PrimitiveStyle::with_fill(Black))?;
                }

                Ok(())
            }
        }
    }

    fn draw_disk<Display>(
        &self,
        display: &mut Display,
        radius: u32,
        style: PrimitiveStyle<BinaryColor>,
    ) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        Circle::with_center(self.center, Self::diameter(radius))
            .into_styled(style)
            .draw(display)
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
    }
}
