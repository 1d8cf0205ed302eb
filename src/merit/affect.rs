//! describes affectation of data to clusters

use num_traits::int::PrimInt;

use std::collections::HashSet;
use std::hash::Hash;

/// The cluster affectation of any clustering scheme should be able to provide a structure implementing this trait.
///
/// Typically an affectation abstract a clusterization as something giving the label or the rank of the cluster attached to a dataid.
/// Morally the label is a discrete value (satisfy the PrimInt trait).
///
pub trait Affectation<DataId, DataLabel> {
    /// given a dataId, returns its label or cluster Id
    fn get_affectation(&self, dataid: DataId) -> DataLabel;
    /// returns the number of labels (or clusters)
    fn get_nb_cluster(&self) -> usize;
    /// iterator on couples (dataid, label)
    fn iter(&self) -> impl Iterator<Item = (DataId, DataLabel)>;
}

//===============================================================================

/// Clusters defined by a slice, DataId is an usize, affectation\[i\] gives the label of the i-th data.
/// This is the shape of the assignment vector of k-means.
pub struct VecAffectation<'a, DataLabel> {
    affectation: &'a [DataLabel],
    nb_cluster: usize,
}

impl<'a, DataLabel> VecAffectation<'a, DataLabel>
where
    DataLabel: PrimInt + Hash,
{
    /// builds a vector affectation, the number of clusters is the number of distinct labels
    pub fn new(affectation: &'a [DataLabel]) -> Self {
        let nb_cluster = affectation.iter().collect::<HashSet<_>>().len();
        VecAffectation {
            affectation,
            nb_cluster,
        }
    }
}

impl<DataLabel> Affectation<usize, DataLabel> for VecAffectation<'_, DataLabel>
where
    DataLabel: PrimInt,
{
    fn get_affectation(&self, id: usize) -> DataLabel {
        self.affectation[id]
    }

    fn get_nb_cluster(&self) -> usize {
        self.nb_cluster
    }

    fn iter(&self) -> impl Iterator<Item = (usize, DataLabel)> {
        self.affectation.iter().copied().enumerate()
    }
}

//========================================================

// end of mod tests
