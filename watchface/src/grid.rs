use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;

use crate::{
    cell::{Cell, Indicator, RingMethod},
    clock::ClockReading,
    draw::DrawError,
    layout::{GridLayout, COLUMNS, ROWS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Hours = 0,
    Minutes = 1,
    Seconds = 2,
}

impl Column {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Splits `value` into one bit per row, most significant bit in row 0.
pub fn cell_bits(value: u8) -> [bool; ROWS] {
    let max_row = ROWS - 1;
    let mut bits = [false; ROWS];

    for (row, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> (max_row - row)) & 0x1 == 1;
    }

    bits
}

/// Reads a column back, row 0 weighing 32.
pub fn bits_value(bits: &[bool; ROWS]) -> u8 {
    bits.iter().fold(0, |value, &bit| (value << 1) | bit as u8)
}

/// Filled state of every cell for one clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    columns: [[bool; ROWS]; COLUMNS],
}

impl CellGrid {
    pub fn from_reading(reading: &ClockReading) -> Self {
        Self {
            columns: reading.fields().map(cell_bits),
        }
    }

    pub fn column(&self, column: Column) -> [bool; ROWS] {
        self.columns[column.index()]
    }

    pub fn value(&self, column: Column) -> u8 {
        bits_value(&self.columns[column.index()])
    }

    pub fn is_filled(&self, column: Column, row: usize) -> bool {
        self.columns[column.index()][row]
    }

    /// Every cell, column by column, each column from the bottom row up.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, bits)| {
            (0..ROWS).rev().map(move |row| Cell {
                column,
                row,
                filled: bits[row],
            })
        })
    }

    pub fn draw<Display>(
        &self,
        display: &mut Display,
        layout: &GridLayout,
        method: RingMethod,
    ) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        for cell in self.cells() {
            Indicator::new(layout.cell_center(cell.column, cell.row), layout.circle_radius())
                .line_thickness(layout.ring_thickness())
                .method(method)
                .draw(display, cell.filled)?;
        }

        Ok(())
    }
}
