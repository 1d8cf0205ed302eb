//! Lloyd's k-means clustering of points in R^d.
//!
//! The pipeline is : draw k initial centers among data points ([init]), assign each point to its
//! nearest center ([assign]), recompute centers as group means ([update]) and loop on the last two
//! until the assignment vector does not change anymore ([lloyd]).  
//! The cost of the resulting clustering is computed in [cost].
//!
//! The only metric is the euclidean one.
pub mod assign;
pub mod cost;
pub mod distance;
pub mod init;
pub mod lloyd;
pub mod params;
pub mod point;
pub mod update;

pub use lloyd::{Clustering, Lloyd, LloydState, k_means, k_means_with_rng};
pub use params::KmeansParams;
pub use point::{Center, Point, PointId};
