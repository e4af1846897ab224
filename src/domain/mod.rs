mod cell;
mod grid;
pub mod templates;

pub use cell::{BlobVariant, Cell, Fate};
pub use grid::{Generation, Grid, COLS, ROWS};
pub use templates::{Template, apply_template, presets};
