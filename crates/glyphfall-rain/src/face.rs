//! Glyph styling: a character at some opacity becomes a terminal cell.

use ratatui::{
    buffer::Buffer,
    layout::Position,
    style::{Color, Modifier, Style},
};

/// The face every glyph in the rain is drawn with.
///
/// Opacity is blended over a black background by scaling the foreground
/// channels, so an opacity of zero is indistinguishable from empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphFace {
    /// Foreground at full opacity.
    foreground: (u8, u8, u8),
    /// Text modifiers, bold by default.
    modifier: Modifier,
}

impl Default for GlyphFace {
    fn default() -> Self {
        Self::new((255, 255, 255), Modifier::BOLD)
    }
}

impl GlyphFace {
    /// Create a face with the given full-opacity foreground.
    pub const fn new(foreground: (u8, u8, u8), modifier: Modifier) -> Self {
        Self {
            foreground,
            modifier,
        }
    }

    /// Style for a glyph at opacity `alpha` (0-255) over black.
    pub fn style(&self, alpha: u8) -> Style {
        let (r, g, b) = self.foreground;
        Style::new()
            .fg(Color::Rgb(blend(r, alpha), blend(g, alpha), blend(b, alpha)))
            .bg(Color::Black)
            .add_modifier(self.modifier)
    }

    /// Draw `character` at `position`. Positions outside the buffer are ignored.
    pub fn draw(&self, buf: &mut Buffer, position: Position, character: char, alpha: u8) {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(character).set_style(self.style(alpha));
        }
    }
}

fn blend(channel: u8, alpha: u8) -> u8 {
    (u16::from(channel) * u16::from(alpha) / 255) as u8
}
