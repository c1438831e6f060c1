use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use std::fmt::Debug;
use thiserror::Error;

use crate::Black;

pub fn clear<Display>(display: &mut Display) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = BinaryColor>,
    Display::Error: Debug,
{
    display
        .clear(Black)
        .map_err(|err| DrawError::DrawFailed(format!("Failed to clear display: {:?}", err)))
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}
