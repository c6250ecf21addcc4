use super::Window;
use crate::line::Line;
use crate::solve;

fn solve_rows(rows: &[&str]) -> (u64, u64) {
    solve(rows.iter().map(|s| s.as_bytes()))
}

#[test]
fn push_rotates_slots() {
    let mut window = Window::new();

    // A fresh window evaluates an empty current row.
    assert_eq!(window.part_number_sum(), 0);

    window.push(Line::parse(b"467..114.."));
    assert_eq!(window.part_number_sum(), 0);

    window.push(Line::parse(b"...*......"));
    assert_eq!(window.part_number_sum(), 467);

    window.push(Line::empty());
    assert_eq!(window.part_number_sum(), 0);
    // The `*` is now current but only has one adjacent number.
    assert_eq!(window.gear_ratio_sum(), 0);
}

#[test]
fn worked_example() {
    let (part_numbers, gear_ratios) = solve_rows(&[
        "467..114..",
        "...*......",
        "..35..633.",
        "......#...",
        "617*......",
        ".....+.58.",
        "..592.....",
        "......755.",
        "...$.*....",
        ".664.598..",
    ]);

    assert_eq!(part_numbers, 4361);
    assert_eq!(gear_ratios, 467835);
}

#[test]
fn no_symbols() {
    let (part_numbers, gear_ratios) = solve_rows(&["12.34", ".....", "5678."]);
    assert_eq!(part_numbers, 0);
    assert_eq!(gear_ratios, 0);
}

#[test]
fn single_row() {
    let (part_numbers, gear_ratios) = solve_rows(&["12*34"]);
    assert_eq!(part_numbers, 46);
    assert_eq!(gear_ratios, 408);
}

#[test]
fn adjacency_in_all_directions() {
    // A single-digit number in each of the eight cells around the symbol.
    let grids = [
        ["1..", ".#.", "..."],
        [".1.", ".#.", "..."],
        ["..1", ".#.", "..."],
        ["...", "1#.", "..."],
        ["...", ".#1", "..."],
        ["...", ".#.", "1.."],
        ["...", ".#.", ".1."],
        ["...", ".#.", "..1"],
    ];

    for grid in grids {
        let (part_numbers, _) = solve_rows(&grid);
        assert_eq!(part_numbers, 1, "{grid:?}");
    }

    // Two columns away is not adjacent.
    let (part_numbers, _) = solve_rows(&["1...", "..#.", "...."]);
    assert_eq!(part_numbers, 0);
}

#[test]
fn gear_cardinality() {
    // One adjacent number.
    let (_, gear_ratios) = solve_rows(&["12*.."]);
    assert_eq!(gear_ratios, 0);

    // Exactly two.
    let (_, gear_ratios) = solve_rows(&["12*34"]);
    assert_eq!(gear_ratios, 408);

    // Three.
    let (_, gear_ratios) = solve_rows(&["12*34", ".56.."]);
    assert_eq!(gear_ratios, 0);
}

#[test]
fn overcrowded_gear_with_large_numbers() {
    // Three maximal numbers around one gear; the discarded product must not
    // overflow while counting.
    let (part_numbers, gear_ratios) = solve_rows(&["999999999.", "999999999*", ".999999999"]);
    assert_eq!(part_numbers, 3 * 999_999_999);
    assert_eq!(gear_ratios, 0);
}

#[test]
fn only_gears_have_ratios() {
    let (part_numbers, gear_ratios) = solve_rows(&["12#34"]);
    assert_eq!(part_numbers, 46);
    assert_eq!(gear_ratios, 0);
}

#[test]
fn zero_value_number_counts() {
    // If the zero were dropped the gear would only see two numbers and
    // contribute 5 * 7; the zero is a real number, so three are adjacent.
    let (part_numbers, gear_ratios) = solve_rows(&["0.5", ".*.", ".7."]);
    assert_eq!(part_numbers, 12);
    assert_eq!(gear_ratios, 0);
}

#[test]
fn equal_numbers_in_different_rows() {
    // Same span and value in both rows, still two distinct numbers.
    let (part_numbers, gear_ratios) = solve_rows(&["12.", ".*.", "12."]);
    assert_eq!(part_numbers, 24);
    assert_eq!(gear_ratios, 144);
}
