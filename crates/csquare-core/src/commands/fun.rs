//! Randomized easter-egg output: `matrix` and `fortune`.
//!
//! Both draw uniformly from a fixed pool. Callers pass the RNG so tests can
//! seed it; the interpreter seeds a fresh one from entropy per invocation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{FORTUNES_TEXT, matrix};
use crate::models::OutputLine;

/// Header, `matrix::ROWS` rows of random digits, footer.
pub fn matrix_lines<R: Rng + ?Sized>(rng: &mut R) -> Vec<OutputLine> {
    let mut lines = Vec::with_capacity(matrix::ROWS + 2);
    lines.push(OutputLine::info("🔴 ENTERING THE MATRIX..."));
    for _ in 0..matrix::ROWS {
        let row: String = (0..matrix::COLUMNS)
            .map(|_| matrix::ALPHABET[rng.gen_range(0..matrix::ALPHABET.len())])
            .collect();
        lines.push(OutputLine::ascii(row));
    }
    lines.push(OutputLine::info("🔴 MATRIX MODE ACTIVATED"));
    lines
}

/// One line picked from the fortune pool.
pub fn fortune_line<R: Rng + ?Sized>(rng: &mut R) -> OutputLine {
    let fortunes: Vec<&str> = FORTUNES_TEXT.lines().filter(|l| !l.is_empty()).collect();
    let picked = fortunes.choose(rng).copied().unwrap_or_default();
    OutputLine::text(picked)
}
