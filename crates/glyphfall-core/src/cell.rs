//! A single character slot and the opacity curve that fades it out.

/// One character slot in a column.
///
/// `age` is `None` while the cell is invisible. A visible cell counts the
/// frames since its character was last activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Symbol drawn in this slot.
    pub character: char,
    /// Frames since activation, `None` when hidden.
    pub age: Option<u32>,
}

impl Cell {
    /// An invisible cell holding `character`.
    pub const fn hidden(character: char) -> Self {
        Self {
            character,
            age: None,
        }
    }

    /// Whether the cell takes part in aging and drawing.
    pub const fn is_visible(&self) -> bool {
        self.age.is_some()
    }

    /// Advance the age of a visible cell by one frame.
    pub fn grow_older(&mut self) {
        if let Some(age) = self.age.as_mut() {
            *age = age.saturating_add(1);
        }
    }

    /// Show `character` as a fresh cell of age zero.
    pub fn activate(&mut self, character: char) {
        self.character = character;
        self.age = Some(0);
    }

    /// Make the cell invisible until it is activated again.
    pub fn hide(&mut self) {
        self.age = None;
    }
}

/// Opacity (0-255) of a cell of `age` frames, or `None` once fully faded.
///
/// Computes `255 - floor(age * fade_rate)`. Values above 255, which only a
/// negative fade rate produces, saturate.
pub fn opacity(age: u32, fade_rate: f32) -> Option<u8> {
    let alpha = 255.0 - (age as f32 * fade_rate).floor();
    if alpha < 0.0 {
        None
    } else {
        Some(alpha.min(255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_fresh_cell() {
        assert_eq!(opacity(0, 2.95), Some(255));
    }

    #[test]
    fn test_opacity_partially_faded() {
        // 255 - floor(29.5)
        assert_eq!(opacity(10, 2.95), Some(226));
    }

    #[test]
    fn test_opacity_fully_faded() {
        // 255 - 295 is negative
        assert_eq!(opacity(100, 2.95), None);
    }

    #[test]
    fn test_opacity_threshold() {
        assert_eq!(opacity(86, 2.95), Some(2));
        assert_eq!(opacity(87, 2.95), None);
        assert_eq!(opacity(510, 0.5), Some(0));
        assert_eq!(opacity(512, 0.5), None);
    }

    #[test]
    fn test_opacity_negative_fade_saturates() {
        assert_eq!(opacity(40, -1.0), Some(255));
    }

    #[test]
    fn test_cell_lifecycle() {
        let mut cell = Cell::hidden('a');
        cell.grow_older();
        assert_eq!(cell.age, None);

        cell.activate('b');
        assert_eq!(cell, Cell { character: 'b', age: Some(0) });
        cell.grow_older();
        cell.grow_older();
        assert_eq!(cell.age, Some(2));

        cell.hide();
        assert!(!cell.is_visible());
        assert_eq!(cell.character, 'b');
    }
}
