//! assignment of points to their nearest center

use num_traits::float::Float;

use std::fmt::Debug;

use super::distance::distance;
use super::point::{Center, Point};

/// returns rank of nearest center.
/// On equal distances the center of lowest rank is kept, only a strictly smaller distance replaces the current best.
pub fn nearest_center<T>(xyz: &[T], centers: &[Center<T>]) -> usize
where
    T: Float,
{
    let mut shortest = T::infinity();
    let mut shortest_index = 0;
    for (i, c) in centers.iter().enumerate() {
        let val = distance(xyz, c);
        if val < shortest {
            shortest = val;
            shortest_index = i;
        }
    }
    shortest_index
}

/// Returns the assignment vector : entry i is the rank in `centers` of the center nearest to points\[i\]
pub fn assign_points<T>(points: &[Point<T>], centers: &[Center<T>]) -> Vec<usize>
where
    T: Float + Debug,
{
    points
        .iter()
        .map(|p| nearest_center(p.get_position(), centers))
        .collect()
}

//========================================================

// end of mod tests
