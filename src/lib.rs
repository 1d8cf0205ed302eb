pub mod io;
pub mod kmeans;
pub mod merit;
