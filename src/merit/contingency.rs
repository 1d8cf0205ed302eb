//! contingency table

use indexmap::IndexSet;
use ndarray::{Array1, Array2, Axis};
use num_traits::int::PrimInt;

use std::hash::Hash;
use std::marker::PhantomData;

use super::affect::*;
//================================================================================

/// Contingency table associated to the 2 affectations to compare.
/// We can compare either true (reference) labels of data or 2 clusterings, or 2 successive
/// assignments of an iterative algorithm.
///
/// Rows are labels of the first affectation, columns labels of the second, both ranked
/// by order of first encounter while iterating on the first affectation.
pub struct Contingency<DataId, DataLabel> {
    // labels of cluster1 in row order
    rows: IndexSet<DataLabel>,
    // labels of cluster2 in column order
    cols: IndexSet<DataLabel>,
    // The contingency table. dimension (cluster1.nb_cluster, cluster2.nb_cluster)
    table: Array2<usize>,
    //
    _t_id: PhantomData<DataId>,
}

impl<DataId, DataLabel> Contingency<DataId, DataLabel>
where
    DataId: Hash + Eq + Copy + Clone + std::fmt::Debug,
    DataLabel: PrimInt + Hash,
{
    /// The data ids visited are those of `clusters1`, `clusters2` must know all of them.
    pub fn new<C1, C2>(clusters1: &C1, clusters2: &C2) -> Self
    where
        C1: Affectation<DataId, DataLabel>,
        C2: Affectation<DataId, DataLabel>,
    {
        let mut rows = IndexSet::<DataLabel>::with_capacity(clusters1.get_nb_cluster());
        let mut cols = IndexSet::<DataLabel>::with_capacity(clusters2.get_nb_cluster());
        let mut couples = Vec::<(usize, usize)>::new();
        for (id, l1) in clusters1.iter() {
            let l2 = clusters2.get_affectation(id);
            let (i, _) = rows.insert_full(l1);
            let (j, _) = cols.insert_full(l2);
            couples.push((i, j));
        }
        let mut table = Array2::<usize>::zeros((rows.len(), cols.len()));
        for (i, j) in couples {
            table[[i, j]] += 1;
        }
        log::debug!("contingency table dim : {:?}", table.dim());
        Contingency {
            rows,
            cols,
            table,
            _t_id: PhantomData,
        }
    } // end of new

    /// returns (nb row, nb columns)
    pub fn get_dim(&self) -> (usize, usize) {
        self.table.dim()
    }

    /// returns labels corresponding to rows (0) or columns (1)
    pub fn get_labels(&self, axis: usize) -> Vec<DataLabel> {
        match axis {
            0 => self.rows.iter().copied().collect(),
            _ => self.cols.iter().copied().collect(),
        }
    }

    /// number of common data between cluster of row rank i and cluster of column rank j
    pub fn get_count(&self, i: usize, j: usize) -> usize {
        self.table[[i, j]]
    }

    /// size of clusters of first affectation
    pub fn get_row_sizes(&self) -> Array1<usize> {
        self.table.sum_axis(Axis(1))
    }

    /// size of clusters of second affectation
    pub fn get_col_sizes(&self) -> Array1<usize> {
        self.table.sum_axis(Axis(0))
    }

    /// true if the two affectations define the same partition, labels may differ.
    /// This is the case iff each row and each column has exactly one non null count.
    pub fn is_relabeling(&self) -> bool {
        let one_nonzero = |lane: ndarray::ArrayView1<usize>| lane.iter().filter(|c| **c > 0).count() == 1;
        self.table.rows().into_iter().all(one_nonzero)
            && self.table.columns().into_iter().all(one_nonzero)
    }
} // end of Contingency

//========================================================

// end of mod tests
