//! A single column of fading, randomly changing characters (stateful).

use glyphfall_core::{Cell, Viewport, opacity};
use rand::rngs::StdRng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};
use tracing::{debug, trace};

use crate::{chars::random_printable, face::GlyphFace};

/// Animates one column of the rain.
///
/// A lead position descends a fraction of a row per frame. Each row it
/// enters is given a fresh character at age zero, and every visible cell
/// fades as it ages. Once the lead reaches the bottom row it stays there
/// and the trail is left to fade out.
#[derive(Debug, Clone)]
pub struct ColumnAnimator {
    /// Grid column the cells are drawn in.
    x_position: u16,
    /// One cell per row. Never resized.
    cells: Vec<Cell>,
    /// Fractional row of the lead, within `[0, rows - 1]`.
    lead_position: f32,
    /// Rows the lead advances per frame.
    descent_speed: f32,
    /// Age-to-opacity multiplier.
    fade_rate: f32,
    /// Source for replacement characters.
    rng: StdRng,
}

impl ColumnAnimator {
    /// Create a column sized to the default viewport.
    pub fn new(x_position: u16, descent_speed: f32, fade_rate: f32, rng: StdRng) -> Self {
        Self::with_rows(
            x_position,
            Viewport::default().rows(),
            descent_speed,
            fade_rate,
            rng,
        )
    }

    /// Create a column with `rows` cells (at least one).
    ///
    /// Every cell starts hidden with a random character except the first,
    /// which is the visible lead.
    pub fn with_rows(
        x_position: u16,
        rows: usize,
        descent_speed: f32,
        fade_rate: f32,
        mut rng: StdRng,
    ) -> Self {
        let mut cells: Vec<Cell> = (0..rows.max(1))
            .map(|_| Cell::hidden(random_printable(&mut rng)))
            .collect();
        cells[0].age = Some(0);

        Self {
            x_position,
            cells,
            lead_position: 0.0,
            descent_speed,
            fade_rate,
            rng,
        }
    }

    /// Advance the animation by one frame.
    pub fn update(&mut self) {
        for cell in &mut self.cells {
            cell.grow_older();
        }

        let last_row = self.last_row();
        if self.lead_position < last_row {
            self.lead_position = (self.lead_position + self.descent_speed).clamp(0.0, last_row);

            let index = self.lead_index();
            let character = random_printable(&mut self.rng);
            self.cells[index].activate(character);

            if self.lead_position >= last_row {
                debug!(column = self.x_position, "lead reached the bottom row");
            }
        }
    }

    /// Draw every visible cell into `buf`, with row 0 at the top of `area`.
    ///
    /// Cells that have faded past zero opacity are hidden here, so this must
    /// run every frame for the trail to disappear. Glyphs falling outside
    /// `area` are clipped.
    pub fn render(&mut self, buf: &mut Buffer, area: Rect, face: &GlyphFace) {
        let x = area.x.saturating_add(self.x_position);

        for (row, cell) in self.cells.iter_mut().enumerate() {
            let Some(age) = cell.age else {
                continue;
            };
            let Some(alpha) = opacity(age, self.fade_rate) else {
                trace!(row, age, "cell faded out");
                cell.hide();
                continue;
            };

            let y = u16::try_from(row).map_or(u16::MAX, |row| area.y.saturating_add(row));
            let position = Position::new(x, y);
            if area.contains(position) {
                face.draw(buf, position, cell.character, alpha);
            }
        }
    }

    /// Set the rows advanced per frame. Not validated.
    pub fn set_descent_speed(&mut self, descent_speed: f32) {
        debug!(descent_speed, "descent speed changed");
        self.descent_speed = descent_speed;
    }

    /// Set the age-to-opacity multiplier. Not validated.
    pub fn set_fade_rate(&mut self, fade_rate: f32) {
        debug!(fade_rate, "fade rate changed");
        self.fade_rate = fade_rate;
    }

    pub fn x_position(&self) -> u16 {
        self.x_position
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn lead_position(&self) -> f32 {
        self.lead_position
    }

    pub fn descent_speed(&self) -> f32 {
        self.descent_speed
    }

    pub fn fade_rate(&self) -> f32 {
        self.fade_rate
    }

    /// Row index of the lead.
    pub fn lead_index(&self) -> usize {
        (self.lead_position.floor() as usize).min(self.last_index())
    }

    /// Whether the lead has stopped at the bottom row.
    pub fn is_exhausted(&self) -> bool {
        self.lead_position >= self.last_row()
    }

    fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    fn last_row(&self) -> f32 {
        self.last_index() as f32
    }
}
