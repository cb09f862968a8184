//! Character source for the rain.

use glyphfall_core::config::PRINTABLE_ASCII;
use rand::Rng;

/// Draw a uniformly random printable ASCII character.
pub fn random_printable<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(PRINTABLE_ASCII))
}
