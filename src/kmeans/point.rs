//! defines data description

use anyhow::anyhow;
use num_traits::float::Float;

use std::fmt::Debug;

/// data to cluster identifier
pub type PointId = usize;

/// A centroid is a bare position, not necessarily equal to a data point.
pub type Center<T> = Vec<T>;

#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    // id to identify points as coming from external client. It is the rank in the dataset
    id: PointId,
    /// data point
    p: Vec<T>,
}

impl<T> Point<T>
where
    T: Float + Debug,
{
    /// a point is characterized by its Id (in fact a rank) and its coordinates
    pub fn new(id: PointId, p: Vec<T>) -> Self {
        Point { id, p }
    }

    /// get id
    pub fn get_id(&self) -> PointId {
        self.id
    }

    /// gets the points coordinate
    pub fn get_position(&self) -> &[T] {
        &self.p
    }

    pub fn get_dimension(&self) -> usize {
        self.p.len()
    }
} // end of impl Point

/// builds points from raw coordinate vectors, ids are ranks in `data`
pub fn points_from_vecs<T>(data: Vec<Vec<T>>) -> Vec<Point<T>>
where
    T: Float + Debug,
{
    data.into_iter()
        .enumerate()
        .map(|(i, p)| Point::new(i, p))
        .collect()
}

/// checks all points share the same dimension and returns it.
/// An empty dataset is an error.
pub fn check_dimension<T>(points: &[Point<T>]) -> anyhow::Result<usize>
where
    T: Float + Debug,
{
    let first = points
        .first()
        .ok_or_else(|| anyhow!("check_dimension : empty dataset"))?;
    let dim = first.get_dimension();
    for pt in points {
        if pt.get_dimension() != dim {
            log::error!(
                "point of id {} has dimension {}, expected {}",
                pt.get_id(),
                pt.get_dimension(),
                dim
            );
            return Err(anyhow!(
                "dimension mismatch, point {} has dimension {} expected {}",
                pt.get_id(),
                pt.get_dimension(),
                dim
            ));
        }
    }
    Ok(dim)
} // end of check_dimension

//========================================================

// end of mod tests
