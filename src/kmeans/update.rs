//! recomputation of centers from an assignment vector

use indexmap::IndexMap;
use num_traits::float::Float;

use std::fmt::Debug;

use super::distance::point_avg;
use super::point::{Center, Point};

/// groups points by label. The map iterates labels in the order they are first met
/// scanning `assignments` from left to right.
pub fn group_by_label<'a, T>(
    points: &'a [Point<T>],
    assignments: &[usize],
) -> IndexMap<usize, Vec<&'a Point<T>>>
where
    T: Float + Debug,
{
    assert_eq!(points.len(), assignments.len());
    let mut groups = IndexMap::<usize, Vec<&'a Point<T>>>::new();
    for (label, point) in assignments.iter().zip(points.iter()) {
        groups.entry(*label).or_default().push(point);
    }
    groups
}

/// Computes the mean of each group present in `assignments`.
///
/// The returned centers are ordered by first encounter of their label, not by label value,
/// so rank `i` of the result is generally not label `i`. The next assignment step renumbers
/// points against this order. A label without point has no center, so the number of centers
/// returned never exceeds the number of distinct labels.
pub fn update_centers<T>(points: &[Point<T>], assignments: &[usize]) -> Vec<Center<T>>
where
    T: Float + Debug,
{
    group_by_label(points, assignments)
        .values()
        .map(|group| point_avg(group))
        .collect()
}

//========================================================

// end of mod tests
