//! The falling column of glyphs.
//!
//! [`ColumnAnimator`] owns one column of cells and advances it a frame at a
//! time; [`GlyphFace`] turns a character and an opacity into a styled
//! terminal cell.

mod chars;
mod column;
mod face;

pub use chars::random_printable;
pub use column::ColumnAnimator;
pub use face::GlyphFace;
