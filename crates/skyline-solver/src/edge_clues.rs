use crate::{Contradiction, PropagationGrid};

/// Applies the bounds each clue implies on its own line.
///
/// For a clue `c` on a line of `N` cells, with `d` the distance of a cell from the clue:
///
/// - `c == 1`: the nearest cell holds `N`.
/// - `c == N`: the cell at distance `d` holds `d + 1`.
/// - otherwise, the cell at distance `d` holds at most `N - c + 1 + d`.
///
/// Removals queue their follow-up tasks as usual; the caller drains the queue.
///
/// # Errors
///
/// Returns a [`Contradiction`] if two clues disagree directly.
pub fn apply_edge_clues(grid: &mut PropagationGrid) -> Result<(), Contradiction> {
    let size = grid.size();
    let n = size.max_height();
    for index in 0..size.clue_count() {
        let clue = grid.clues().get(index);
        let cells = size.clue_cells(index);
        match clue {
            0 => {}
            1 => {
                grid.resolve_to(cells[0], n)?;
            }
            c if c == n => {
                for (d, cell) in (0u8..).zip(cells) {
                    grid.resolve_to(cell, d + 1)?;
                }
            }
            c => {
                for (d, cell) in (0u8..).zip(cells) {
                    for height in n - c + 2 + d..=n {
                        grid.eliminate(cell, height)?;
                    }
                }
            }
        }
        log::trace!("applied clue {clue} at slot {index}");
    }
    Ok(())
}
