//! reading points from and dumping clusterings to csv files
pub mod csvio;
