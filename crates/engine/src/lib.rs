//! Engine schematic analysis.
//!
//! A schematic is a rectangular grid of bytes where runs of digits are part
//! numbers and anything which is neither a digit nor `.` is a symbol. Each row
//! is parsed into a [Line] and fed through a three-row [Window], which
//! evaluates part numbers and gear ratios against their local neighborhood
//! only.

pub mod cli;
mod line;
mod window;

pub use self::line::{Line, Number, Symbol};
pub use self::window::Window;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::{Line, Number, Symbol, Window};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}

/// Sum part numbers and gear ratios over a whole schematic.
///
/// Every row is parsed and pushed through a single [Window] and both totals
/// accumulate from the same pushes. One empty row is pushed after the last
/// real row, so that the last real row is evaluated with an empty row below
/// it.
///
/// # Examples
///
/// ```
/// let rows = ["467..114..", "...*......", "..35..633."];
///
/// let (part_numbers, gear_ratios) = engine::solve(rows.iter().map(|s| s.as_bytes()));
/// assert_eq!(part_numbers, 467 + 35);
/// assert_eq!(gear_ratios, 467 * 35);
/// ```
pub fn solve<'a, I>(lines: I) -> (u64, u64)
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut window = Window::new();

    let mut part_numbers = 0;
    let mut gear_ratios = 0;
    let mut rows = 0usize;

    for line in lines {
        window.push(Line::parse(line));
        part_numbers += window.part_number_sum();
        gear_ratios += window.gear_ratio_sum();
        rows += 1;
    }

    // The last real row still sits in the `next` slot, one sentinel push
    // moves it into `current`.
    window.push(Line::empty());
    part_numbers += window.part_number_sum();
    gear_ratios += window.gear_ratio_sum();

    log::debug!("processed {rows} rows");
    (part_numbers, gear_ratios)
}
