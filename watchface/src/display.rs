use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, OriginDimensions, PixelColor, Point, PointsIter, Size},
    primitives::Rectangle,
    Pixel,
};

use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// In-memory frame buffer. Draws outside of it are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameBuffer<C> {
    size: Size,
    pixels: Vec<C>,
}

impl<C: PixelColor> FrameBuffer<C> {
    /// Creates a frame buffer filled with `default_color`.
    pub fn with_default_color(size: Size, default_color: C) -> Self {
        let pixel_count = size.width as usize * size.height as usize;

        FrameBuffer {
            size,
            pixels: vec![default_color; pixel_count],
        }
    }

    /// Returns the color of the pixel at a point.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the frame buffer.
    pub fn get_pixel(&self, point: Point) -> C {
        self.point_to_index(point)
            .and_then(|index| self.pixels.get(index).copied())
            .expect("can't get point outside of frame buffer")
    }

    /// Number of pixels of `color`.
    pub fn count(&self, color: C) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count_in(&self, area: &Rectangle, color: C) -> usize {
        area.intersection(&self.bounding_box())
            .points()
            .filter(|&point| self.get_pixel(point) == color)
            .count()
    }

    fn point_to_index(&self, point: Point) -> Option<usize> {
        if let Ok((x, y)) = <(u32, u32)>::try_from(point) {
            if x < self.size.width && y < self.size.height {
                return Some((x + y * self.size.width) as usize);
            }
        }

        None
    }

    /// Compares this frame with another one of the same size.
    ///
    /// Returns `None` when both are equal, otherwise an image with every
    /// differing pixel set to `BinaryColor::On`.
    ///
    /// # Panics
    ///
    /// Panics if the sizes differ.
    pub fn diff(&self, other: &FrameBuffer<C>) -> Option<FrameBuffer<BinaryColor>> {
        assert!(
            self.size == other.size,
            "both frames must have the same size (self: {}x{}, other: {}x{})",
            self.size.width,
            self.size.height,
            other.size.width,
            other.size.height,
        );

        let pixels = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .map(|(a, b)| BinaryColor::from(a != b))
            .collect::<Vec<_>>();

        if pixels.contains(&BinaryColor::On) {
            Some(FrameBuffer {
                pixels,
                size: self.size,
            })
        } else {
            None
        }
    }
}

impl<C> FrameBuffer<C>
where
    C: PixelColor + From<BinaryColor>,
{
    /// Creates a frame buffer filled with `C::from(BinaryColor::Off)`.
    pub fn new(size: Size) -> Self {
        Self::with_default_color(size, C::from(BinaryColor::Off))
    }

    /// A frame buffer the size of the watch screen.
    pub fn watch() -> Self {
        Self::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }
}

impl<C: PixelColor> DrawTarget for FrameBuffer<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            if let Some(index) = self.point_to_index(point) {
                self.pixels[index] = color;
            }
        }

        Ok(())
    }
}

impl<C> OriginDimensions for FrameBuffer<C> {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::Primitive,
        primitives::{Line, PrimitiveStyle},
        Drawable,
    };

    #[test]
    fn starts_off() {
        let frame: FrameBuffer<BinaryColor> = FrameBuffer::watch();

        assert_eq!(frame.size(), Size::new(144, 168));
        assert_eq!(frame.count(BinaryColor::Off), 144 * 168);
    }

    #[test]
    fn clips_outside_draws() {
        let mut frame: FrameBuffer<BinaryColor> = FrameBuffer::new(Size::new(4, 4));

        Line::new(Point::new(-2, 1), Point::new(8, 1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut frame)
            .unwrap();

        assert_eq!(frame.count(BinaryColor::On), 4);
        assert_eq!(
            frame.count_in(&Rectangle::new(Point::new(0, 1), Size::new(2, 1)), BinaryColor::On),
            2
        );
    }

    #[test]
    fn diff_marks_changed_pixels() {
        let a: FrameBuffer<BinaryColor> = FrameBuffer::new(Size::new(3, 3));
        let mut b = a.clone();

        assert!(a.diff(&b).is_none());

        Pixel(Point::new(1, 2), BinaryColor::On).draw(&mut b).unwrap();
        let diff = a.diff(&b).unwrap();

        assert_eq!(diff.count(BinaryColor::On), 1);
        assert_eq!(diff.get_pixel(Point::new(1, 2)), BinaryColor::On);
    }
}
