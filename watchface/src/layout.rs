use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};
use thiserror::Error;

pub const CANVAS_WIDTH: u32 = 144;
pub const CANVAS_HEIGHT: u32 = 168;

/// Hours, minutes and seconds.
pub const COLUMNS: usize = 3;
/// One row per bit, enough for values up to 63.
pub const ROWS: usize = 6;

pub const CIRCLE_RADIUS: u32 = 12;
pub const CIRCLE_PADDING: u32 = 2;
pub const CIRCLE_LINE_THICKNESS: u32 = 2;

/// Geometry of the binary grid on the canvas.
///
/// The grid is packed against the bottom right corner; whatever is left on the
/// left side belongs to the day/date text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    canvas: Size,
    radius: u32,
    padding: u32,
    line_thickness: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }
}

impl GridLayout {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            radius: CIRCLE_RADIUS,
            padding: CIRCLE_PADDING,
            line_thickness: CIRCLE_LINE_THICKNESS,
        }
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn line_thickness(mut self, line_thickness: u32) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    pub fn validate(self) -> Result<Self, LayoutError> {
        if self.radius == 0 {
            return Err(LayoutError::ZeroRadius);
        }

        if self.line_thickness > self.radius {
            return Err(LayoutError::RingTooThick {
                thickness: self.line_thickness,
                radius: self.radius,
            });
        }

        // screen coordinates are i32
        let max_edge = i32::MAX as u32;
        if self.canvas.width > max_edge || self.canvas.height > max_edge {
            return Err(LayoutError::CanvasTooLarge {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        // an overflowing grid is reported as u32::MAX
        let grid = self
            .checked_grid_size()
            .unwrap_or(Size::new(u32::MAX, u32::MAX));
        if grid.width > self.canvas.width || grid.height > self.canvas.height {
            return Err(LayoutError::GridTooLarge {
                grid_width: grid.width,
                grid_height: grid.height,
                canvas_width: self.canvas.width,
                canvas_height: self.canvas.height,
            });
        }

        Ok(self)
    }

    fn checked_grid_size(&self) -> Option<Size> {
        let cell_size = self.radius.checked_add(self.padding)?.checked_mul(2)?;

        Some(Size::new(
            cell_size.checked_mul(COLUMNS as u32)?,
            cell_size.checked_mul(ROWS as u32)?,
        ))
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    pub fn circle_radius(&self) -> u32 {
        self.radius
    }

    pub fn ring_thickness(&self) -> u32 {
        self.line_thickness
    }

    /// Edge of the square that holds one circle and its padding.
    pub fn cell_size(&self) -> u32 {
        2 * (self.radius + self.padding)
    }

    pub fn grid_size(&self) -> Size {
        let cell_size = self.cell_size();
        Size::new(COLUMNS as u32 * cell_size, ROWS as u32 * cell_size)
    }

    pub fn top_padding(&self) -> i32 {
        self.canvas.height as i32 - self.grid_size().height as i32
    }

    pub fn left_padding(&self) -> i32 {
        self.canvas.width as i32 - self.grid_size().width as i32
    }

    /// Center of the cell at `column`, `row`. (0, 0) is the top left cell.
    pub fn cell_center(&self, column: usize, row: usize) -> Point {
        let cell_size = self.cell_size() as i32;

        Point::new(
            self.left_padding() + cell_size / 2 + cell_size * column as i32,
            self.top_padding() + cell_size / 2 + cell_size * row as i32,
        )
    }

    pub fn grid_area(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.left_padding(), self.top_padding()),
            self.grid_size(),
        )
    }

    /// Strip left of the grid, used for the day and date text.
    pub fn text_area(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.left_padding().max(0) as u32, self.canvas.height),
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Canvas {width}x{height} is too large")]
    CanvasTooLarge { width: u32, height: u32 },
    #[error("Circle radius must not be zero")]
    ZeroRadius,
    #[error("Ring thickness {thickness} exceeds circle radius {radius}")]
    RingTooThick { thickness: u32, radius: u32 },
    #[error(
        "Grid {grid_width}x{grid_height} does not fit on canvas {canvas_width}x{canvas_height}"
    )]
    GridTooLarge {
        grid_width: u32,
        grid_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
}
