//! Splitting a source into runs delimited by a separator value.

use crate::source::Source;

/// Partitions `source` into contiguous runs delimited by elements equal to `separator`.
///
/// Separators are dropped. `N` separators always produce `N + 1` runs, so leading,
/// trailing and adjacent separators yield empty runs, and an empty source yields a single
/// empty run.
///
/// # Examples
///
/// ```rust
/// use container_utils::split;
///
/// assert_eq!(split(vec![0, -1, 1, -1, 2], &-1), vec![vec![0], vec![1], vec![2]]);
/// assert_eq!(split(&[-1, 0], &-1), vec![vec![], vec![0]]);
/// ```
pub fn split<S>(source: S, separator: &S::Item) -> Vec<Vec<S::Item>>
where
    S: Source,
    S::Item: PartialEq,
{
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for item in source.into_elements() {
        if item == *separator {
            runs.push(std::mem::take(&mut current));
        } else {
            current.push(item);
        }
    }
    runs.push(current);
    runs
}
