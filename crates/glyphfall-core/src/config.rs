//! Compile-time configuration. Nothing here is read from the environment.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Viewport width in pixels.
pub const VIEWPORT_WIDTH: u32 = 1800;
/// Viewport height in pixels.
pub const VIEWPORT_HEIGHT: u32 = 1600;
/// Edge length of one square grid cell in pixels.
pub const CELL_SIZE: u32 = 40;

/// Target frames per second for the render loop.
pub const TARGET_FPS: u32 = 60;

/// Rows the lead advances per frame at startup.
pub const DEFAULT_DESCENT_SPEED: f32 = 0.2;
/// Age-to-opacity multiplier at startup.
pub const DEFAULT_FADE_RATE: f32 = 2.95;
/// Grid column the animated line is drawn in.
pub const INITIAL_COLUMN: u16 = 5;

/// Printable ASCII, space through tilde.
pub const PRINTABLE_ASCII: RangeInclusive<u8> = 32..=126;

// Values assigned by the arrow keys.
pub const FAST_DESCENT_SPEED: f32 = 0.5;
pub const SLOW_DESCENT_SPEED: f32 = 0.1;
pub const LONG_TRAIL_FADE_RATE: f32 = 0.1;
pub const SHORT_TRAIL_FADE_RATE: f32 = 0.5;

/// Time allotted to one iteration of the render loop.
pub fn frame_budget() -> Duration {
    Duration::from_secs(1) / TARGET_FPS
}

/// Pixel dimensions of the drawing area and the grid laid over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Edge length of a grid cell in pixels. Also the row pitch.
    pub cell_size: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            cell_size: CELL_SIZE,
        }
    }
}

impl Viewport {
    /// Number of grid columns across the viewport.
    pub const fn columns(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Number of grid rows down the viewport.
    pub const fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }
}
