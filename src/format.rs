//! Text rendering of squares.
//!
//! Pure string transformation, outside the evolutionary core: rendering
//! found solutions for display and reshaping a flat comma-separated grid
//! into tab-separated rows.

use crate::individual::Individual;

/// Reshapes a flat comma-separated grid into tab-separated rows.
///
/// The number of items is expected to be a perfect square; the row width
/// is the integer square root of the item count. No trailing newline.
///
/// ```
/// use magic_square_ga::format::format_flat;
///
/// assert_eq!(format_flat("1,2,3,4"), "1\t2\n3\t4");
/// ```
pub fn format_flat(square: &str) -> String {
    let items: Vec<&str> = square.split(',').collect();
    let side = (items.len() as f64).sqrt() as usize;
    if side == 0 {
        return String::new();
    }

    items
        .chunks(side)
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders each solution as N lines of N space-separated integers, with a
/// blank line between independent grids.
pub fn render_solutions(solutions: &[Individual]) -> String {
    solutions
        .iter()
        .map(|s| s.genome().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;

    #[test]
    fn test_format_flat_two_by_two() {
        assert_eq!(format_flat("1,2,3,4"), "1\t2\n3\t4");
    }

    #[test]
    fn test_format_flat_three_by_three() {
        assert_eq!(
            format_flat("2,7,6,9,5,1,4,3,8"),
            "2\t7\t6\n9\t5\t1\n4\t3\t8"
        );
    }

    #[test]
    fn test_format_flat_single_cell() {
        assert_eq!(format_flat("1"), "1");
    }

    #[test]
    fn test_render_solutions_separates_grids() {
        let a = Individual::founder(Genome::new(2, vec![1, 2, 3, 4]).unwrap());
        let b = Individual::founder(Genome::new(2, vec![4, 3, 2, 1]).unwrap());

        assert_eq!(render_solutions(&[a.clone()]), "1 2\n3 4");
        assert_eq!(render_solutions(&[a, b]), "1 2\n3 4\n\n4 3\n2 1");
    }

    #[test]
    fn test_render_solutions_empty() {
        assert_eq!(render_solutions(&[]), "");
    }
}
