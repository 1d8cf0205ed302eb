//! cost (inertia) of a clustering

use indexmap::IndexMap;
use num_traits::float::Float;

use std::fmt::Debug;

use super::distance::{distance_squared, point_avg};
use super::point::Point;

#[cfg_attr(doc, katexit::katexit)]
/// Computes $$ \sum_{c} \sum_{p \in c} \| p - \bar{c} \|^2 $$ where $\bar{c}$ is the mean of group $c$.
///
/// Centers are recomputed from the groups, independently of the centers used during iterations.
/// Returns None if there is no group.
pub fn cost_function<T>(groups: &IndexMap<usize, Vec<&Point<T>>>) -> Option<T>
where
    T: Float + Debug,
{
    if groups.is_empty() {
        return None;
    }
    let mut cost = T::zero();
    for points in groups.values() {
        let center = point_avg(points);
        for p in points {
            cost = cost + distance_squared(p.get_position(), &center);
        }
    }
    Some(cost)
} // end of cost_function

//========================================================

// end of mod tests
