//! Permutation-preserving crossover.
//!
//! A naive single-point crossover over flat cell arrays would duplicate and
//! drop values, breaking the permutation invariant. The operator here is an
//! order-based crossover (in the family of Davis' OX): a contiguous block of
//! whole rows is copied verbatim from one parent, and the remaining
//! positions are filled with the other parent's values in their relative
//! order, skipping values already placed. Both children are permutations by
//! construction; no repair pass exists or is needed.
//!
//! Cut points are expressed in row units, not flat indices: a cut at row `c`
//! copies rows `0..=c`.

use crate::genome::Genome;
use rand::Rng;

/// The children of one crossover plus a human-readable description of the
/// operation, kept for lineage diagnostics.
#[derive(Debug, Clone)]
pub struct CrossoverOutcome {
    /// Two valid permutation children.
    pub children: [Genome; 2],

    /// Method name and chosen cut, e.g. `"order crossover, cut after row 2"`.
    pub details: String,
}

/// Order-based crossover of two parent squares.
///
/// The cut row is drawn uniformly from `min_point..=max_point`. When the
/// bounds coincide the cut is fixed at that row. Child 1 takes rows
/// `0..=cut` from `parent1` and is completed from `parent2`; child 2 is the
/// mirror image.
///
/// # Panics
/// Panics if the parents differ in side, or if the bounds do not satisfy
/// `min_point <= max_point < side`. Both are preconditions enforced by
/// configuration validation upstream.
pub fn order_crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    min_point: usize,
    max_point: usize,
    rng: &mut R,
) -> CrossoverOutcome {
    let side = parent1.side();
    assert_eq!(side, parent2.side(), "parents must have equal side");
    assert!(
        min_point <= max_point && max_point < side,
        "cut bounds must satisfy min <= max < side"
    );

    let cut_row = if min_point == max_point {
        min_point
    } else {
        rng.random_range(min_point..=max_point)
    };

    let child1 = build_child(parent1, parent2, cut_row);
    let child2 = build_child(parent2, parent1, cut_row);

    CrossoverOutcome {
        children: [child1, child2],
        details: format!("order crossover, cut after row {cut_row}"),
    }
}

/// Copy rows `0..=cut_row` from `template`, then fill the tail with the
/// values of `donor` in their relative order, skipping those already placed.
fn build_child(template: &Genome, donor: &Genome, cut_row: usize) -> Genome {
    let side = template.side();
    let n = template.len();
    let prefix = (cut_row + 1) * side;

    let mut cells = Vec::with_capacity(n);
    let mut placed = vec![false; n + 1];

    for &value in &template.cells()[..prefix] {
        cells.push(value);
        placed[value as usize] = true;
    }
    for &value in donor.cells() {
        if !placed[value as usize] {
            cells.push(value);
        }
    }

    Genome::from_cells_unchecked(side, cells)
}
