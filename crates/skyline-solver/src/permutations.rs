use skyline_core::{HeightSet, MAX_SIZE};
use tinyvec::ArrayVec;

/// Heights assigned to the cells of one line, in line order.
pub type LineHeights = ArrayVec<[u8; MAX_SIZE]>;

/// Enumerates every assignment of pairwise distinct heights to a line, drawing each
/// cell's height from its candidate set.
///
/// The enumeration is an explicit depth-first search, so the stack depth stays constant
/// and the caller may stop at any point. Assignments are produced in lexicographic order.
///
/// # Examples
///
/// ```
/// use skyline_core::HeightSet;
/// use skyline_solver::LinePermutations;
///
/// let domains = [
///     HeightSet::from_iter([1, 2]),
///     HeightSet::from_iter([1]),
///     HeightSet::from_iter([2, 3]),
/// ];
/// let all: Vec<Vec<u8>> = LinePermutations::new(&domains)
///     .map(|heights| heights.to_vec())
///     .collect();
/// assert_eq!(all, vec![vec![2, 1, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct LinePermutations {
    domains: ArrayVec<[HeightSet; MAX_SIZE]>,
    /// Untried heights for every open depth.
    remaining: ArrayVec<[HeightSet; MAX_SIZE]>,
    current: LineHeights,
    used: HeightSet,
}

impl LinePermutations {
    /// Starts an enumeration over the given per-cell candidates.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_SIZE`] domains are given.
    #[must_use]
    pub fn new(domains: &[HeightSet]) -> Self {
        let domains: ArrayVec<[HeightSet; MAX_SIZE]> = domains.iter().copied().collect();
        let mut remaining = ArrayVec::new();
        if let Some(&first) = domains.first() {
            remaining.push(first);
        }
        Self {
            domains,
            remaining,
            current: LineHeights::new(),
            used: HeightSet::new(),
        }
    }
}

impl Iterator for LinePermutations {
    type Item = LineHeights;

    fn next(&mut self) -> Option<LineHeights> {
        loop {
            let depth = self.remaining.len();
            if depth == 0 {
                return None;
            }
            // Undo the height placed at the deepest open level before trying the next.
            if self.current.len() == depth
                && let Some(height) = self.current.pop()
            {
                self.used.remove(height);
            }
            let Some(height) = self.remaining[depth - 1].pop_first() else {
                self.remaining.pop();
                continue;
            };
            self.current.push(height);
            self.used.insert(height);
            if self.current.len() == self.domains.len() {
                return Some(self.current);
            }
            let next = self.domains[depth].difference(self.used);
            self.remaining.push(next);
        }
    }
}

impl std::iter::FusedIterator for LinePermutations {}
