use thiserror::Error;

use crate::{draw::DrawError, layout::LayoutError};

#[derive(Debug, Error)]
pub enum WatchfaceError {
    #[error(transparent)]
    Draw(#[from] DrawError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("Text for {field} does not fit in {capacity} bytes")]
    TextOverflow { field: &'static str, capacity: usize },
}
