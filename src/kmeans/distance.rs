//! euclidean primitives shared by the assignment step and the cost evaluation.
//!
//! Dimensions of arguments must match, a mismatch is a broken contract and panics.

use num_traits::float::Float;

use std::fmt::Debug;

use super::point::{Center, Point};

#[cfg_attr(doc, katexit::katexit)]
/// squared euclidean distance $$ \sum_{i=0}^{d-1} (a_i - b_i)^2 $$
pub fn distance_squared<T: Float>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "distance between points of unequal dimension");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (x, y)| acc + (*x - *y) * (*x - *y))
}

/// euclidean distance, square root of [distance_squared]
pub fn distance<T: Float>(a: &[T], b: &[T]) -> T {
    distance_squared(a, b).sqrt()
}

/// Returns the coordinate-wise mean of points.
/// points must be non empty and of the same dimension.
pub fn point_avg<T>(points: &[&Point<T>]) -> Center<T>
where
    T: Float + Debug,
{
    assert!(!points.is_empty(), "point_avg : no point to average");
    let dim = points[0].get_dimension();
    let mut center = vec![T::zero(); dim];
    for p in points {
        let xyz = p.get_position();
        assert_eq!(xyz.len(), dim, "point_avg : point {} has bad dimension", p.get_id());
        for (c, x) in center.iter_mut().zip(xyz.iter()) {
            *c = *c + *x;
        }
    }
    // points.len() is a usize, conversion to a float cannot fail
    let nb = T::from(points.len()).unwrap();
    center.iter_mut().for_each(|c| *c = *c / nb);
    center
} // end of point_avg

//========================================================

// end of mod tests
