//! Three-row sliding window over parsed schematic rows.

#[cfg(test)]
mod tests;

use core::mem;

use crate::line::Line;

/// A rolling previous/current/next neighborhood.
///
/// Starts out holding three empty rows. The caller pushes every real row and
/// one trailing empty row; after each push the two sums are evaluated against
/// the row sitting in the `current` slot.
#[derive(Debug, Default)]
pub struct Window {
    previous: Line,
    current: Line,
    next: Line,
}

impl Window {
    /// Construct a window holding three empty rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the window down one row.
    pub fn push(&mut self, line: Line) -> &mut Self {
        self.previous = mem::replace(&mut self.current, mem::replace(&mut self.next, line));
        self
    }

    fn lines(&self) -> impl Iterator<Item = &Line> {
        [&self.previous, &self.current, &self.next].into_iter()
    }

    /// Sum the current row's numbers which have at least one adjacent symbol
    /// in the three-row neighborhood. Each qualifying number is counted once,
    /// no matter how many symbols touch it.
    pub fn part_number_sum(&self) -> u64 {
        self.current
            .numbers
            .iter()
            .filter(|number| {
                self.lines()
                    .flat_map(|line| line.symbols.iter())
                    .any(|symbol| symbol.is_adjacent(number))
            })
            .map(|number| u64::from(number.value))
            .sum()
    }

    /// Sum the gear ratios of the current row's gears.
    ///
    /// A gear contributes the product of its adjacent numbers when exactly
    /// two are adjacent, otherwise nothing. Every candidate number is owned
    /// by exactly one of the three rows, so plain iteration visits each
    /// number once and equal-valued numbers in different rows cannot
    /// collapse.
    pub fn gear_ratio_sum(&self) -> u64 {
        let mut sum = 0;

        for symbol in &self.current.symbols {
            if !symbol.is_gear() {
                continue;
            }

            let mut count = 0;
            let mut ratio = 1;

            for number in self.lines().flat_map(|line| line.numbers.iter()) {
                if !symbol.is_adjacent(number) {
                    continue;
                }

                count += 1;

                // Only the first two factors matter, a third disqualifies
                // the gear.
                if count <= 2 {
                    ratio *= u64::from(number.value);
                }
            }

            if count == 2 {
                sum += ratio;
            }
        }

        sum
    }
}
