//! Visible-building counting.

/// Counts the buildings visible when looking along `heights` from its first element.
///
/// A building is visible when it is taller than every building before it, so this is the
/// number of strict increases of the running maximum.
///
/// # Examples
///
/// ```
/// use skyline_core::visible_count;
///
/// assert_eq!(visible_count([2, 1, 4, 3]), 2);
/// assert_eq!(visible_count([1, 2, 3, 4]), 4);
/// assert_eq!(visible_count([4, 3, 2, 1]), 1);
/// ```
#[must_use]
pub fn visible_count<I>(heights: I) -> usize
where
    I: IntoIterator<Item = u8>,
{
    let mut tallest = 0;
    let mut visible = 0;
    for height in heights {
        if height > tallest {
            tallest = height;
            visible += 1;
        }
    }
    visible
}
