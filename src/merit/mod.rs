//! This module is dedicated to comparison of clusterings.
//! A clustering is seen as an affectation of data to labels, two affectations are compared via
//! their contingency table. As labels are arbitrary, clusterings are compared up to renaming of labels.
//!
pub mod affect;
pub mod contingency;
