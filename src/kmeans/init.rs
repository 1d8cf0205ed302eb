//! random choice of initial centers

use anyhow::anyhow;
use num_traits::float::Float;
use rand::Rng;

use std::fmt::Debug;

use super::point::{Center, Point};

/// Draws `k` points of `points` uniformly without replacement and returns their positions
/// as initial centers. The random source is provided by the caller so a seeded generator
/// gives reproducible runs.
pub fn generate_k<T, R>(points: &[Point<T>], k: usize, rng: &mut R) -> anyhow::Result<Vec<Center<T>>>
where
    T: Float + Debug,
    R: Rng + ?Sized,
{
    if k == 0 || k > points.len() {
        log::error!(
            "generate_k : asked {} centers from {} points",
            k,
            points.len()
        );
        return Err(anyhow!(
            "invalid number of clusters {}, must be in 1..={}",
            k,
            points.len()
        ));
    }
    let ranks = rand::seq::index::sample(rng, points.len(), k);
    let centers: Vec<Center<T>> = ranks
        .iter()
        .map(|r| points[r].get_position().to_vec())
        .collect();
    log::debug!("initial centers drawn at ranks {:?}", ranks.into_vec());
    Ok(centers)
} // end of generate_k

//========================================================

// end of mod tests
