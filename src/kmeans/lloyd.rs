//! Lloyd iterations.
//!
//! Assignments and centers are recomputed alternately until an assignment vector is exactly
//! equal to the previous one. There is no threshold on centers displacement.
//!
//! Labels are not stable across iterations: [update_centers] orders new centers by first
//! encounter of the old labels, and the next assignment numbers points against that order.
//! A cluster can thus change label between two iterations while keeping its members.
//! Convergence is tested on the label values, so a run may need one more iteration after
//! membership has stabilized, just to let labels settle.

use anyhow::anyhow;
use indexmap::IndexMap;
use num_traits::float::Float;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use std::collections::HashSet;
use std::fmt::Debug;

use super::assign::assign_points;
use super::cost::cost_function;
use super::init::generate_k;
use super::params::KmeansParams;
use super::point::{Center, Point, check_dimension};
use super::update::{group_by_label, update_centers};

use crate::merit::affect::VecAffectation;
use crate::merit::contingency::Contingency;

/// state of the iteration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LloydState {
    Running,
    Converged,
}

/// Drives the alternation of assignment and center update on a borrowed dataset.
pub struct Lloyd<'a, T> {
    points: &'a [Point<T>],
    // assignment vector of last step
    assignments: Vec<usize>,
    // assignment vector of the step before, None before first update
    old_assignments: Option<Vec<usize>>,
    // number of center updates done
    nb_iter: usize,
}

impl<'a, T> Lloyd<'a, T>
where
    T: Float + Debug,
{
    /// does the first assignment against initial centers
    pub fn new(points: &'a [Point<T>], centers: &[Center<T>]) -> Self {
        let assignments = assign_points(points, centers);
        Lloyd {
            points,
            assignments,
            old_assignments: None,
            nb_iter: 0,
        }
    }

    pub fn get_state(&self) -> LloydState {
        match &self.old_assignments {
            Some(old) if *old == self.assignments => LloydState::Converged,
            _ => LloydState::Running,
        }
    }

    /// current assignment vector
    pub fn get_assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// number of center updates done
    pub fn get_nb_iter(&self) -> usize {
        self.nb_iter
    }

    /// number of distinct labels in current assignment
    pub fn get_nb_cluster(&self) -> usize {
        self.assignments.iter().collect::<HashSet<_>>().len()
    }

    /// one update of centers followed by a new assignment. Does nothing once converged
    pub fn step(&mut self) -> LloydState {
        if self.get_state() == LloydState::Converged {
            return LloydState::Converged;
        }
        let new_centers = update_centers(self.points, &self.assignments);
        let assignments = assign_points(self.points, &new_centers);
        self.old_assignments = Some(std::mem::replace(&mut self.assignments, assignments));
        self.nb_iter += 1;
        //
        let state = self.get_state();
        if log::log_enabled!(log::Level::Debug) {
            if let Some(old) = &self.old_assignments {
                let contingency = Contingency::new(
                    &VecAffectation::new(old),
                    &VecAffectation::new(&self.assignments),
                );
                log::debug!(
                    "iteration {}, nb centers : {}, same partition as before : {}, state : {:?}",
                    self.nb_iter,
                    new_centers.len(),
                    contingency.is_relabeling(),
                    state
                );
            }
        }
        state
    } // end of step

    /// iterates until convergence. If max_iter is given and reached before convergence an error is returned
    pub fn run(&mut self, max_iter: Option<usize>) -> anyhow::Result<()> {
        while self.get_state() == LloydState::Running {
            if let Some(max_iter) = max_iter {
                if self.nb_iter >= max_iter {
                    log::error!("no convergence after {} iterations", self.nb_iter);
                    return Err(anyhow!("k-means did not converge in {} iterations", max_iter));
                }
            }
            self.step();
        }
        log::info!(
            "converged after {} iterations, nb clusters : {}",
            self.nb_iter,
            self.get_nb_cluster()
        );
        Ok(())
    } // end of run

    /// groups points along the current assignment
    pub fn into_clustering(self) -> Clustering<'a, T> {
        let groups = group_by_label(self.points, &self.assignments);
        Clustering {
            groups,
            assignments: self.assignments,
            nb_iter: self.nb_iter,
        }
    }
} // end of impl Lloyd

//========================================

/// Result of a k-means run. Groups of points indexed by label, labels iterated in order of first
/// appearance in the dataset.
#[derive(Debug)]
pub struct Clustering<'a, T> {
    groups: IndexMap<usize, Vec<&'a Point<T>>>,
    assignments: Vec<usize>,
    nb_iter: usize,
}

impl<'a, T> Clustering<'a, T>
where
    T: Float + Debug,
{
    pub fn get_groups(&self) -> &IndexMap<usize, Vec<&'a Point<T>>> {
        &self.groups
    }

    /// points of cluster labelled `label`
    pub fn get_group(&self, label: usize) -> Option<&[&'a Point<T>]> {
        self.groups.get(&label).map(|g| g.as_slice())
    }

    /// number of clusters, may be less than the number of initial centers
    pub fn get_nb_cluster(&self) -> usize {
        self.groups.len()
    }

    /// final assignment vector, in dataset order
    pub fn get_assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// number of center updates performed
    pub fn get_nb_iter(&self) -> usize {
        self.nb_iter
    }

    /// final assignment as an affectation, to compare with other clusterings
    pub fn get_affectation(&self) -> VecAffectation<'_, usize> {
        VecAffectation::new(&self.assignments)
    }

    /// sum of squared distances of points to their cluster mean, None if there is no cluster
    pub fn cost(&self) -> Option<T> {
        cost_function(&self.groups)
    }
} // end of impl Clustering

//========================================

/// Runs k-means with initial centers drawn from `rng`.
pub fn k_means_with_rng<'a, T, R>(
    points: &'a [Point<T>],
    nb_cluster: usize,
    max_iter: Option<usize>,
    rng: &mut R,
) -> anyhow::Result<Clustering<'a, T>>
where
    T: Float + Debug,
    R: Rng + ?Sized,
{
    let dim = check_dimension(points)?;
    log::info!(
        "k_means : nb points {}, dimension {}, nb cluster asked {}",
        points.len(),
        dim,
        nb_cluster
    );
    let centers = generate_k(points, nb_cluster, rng)?;
    let mut lloyd = Lloyd::new(points, &centers);
    lloyd.run(max_iter)?;
    Ok(lloyd.into_clustering())
} // end of k_means_with_rng

/// Runs k-means as described by `params`.
pub fn k_means<'a, T>(points: &'a [Point<T>], params: &KmeansParams) -> anyhow::Result<Clustering<'a, T>>
where
    T: Float + Debug,
{
    let mut rng = match params.get_seed() {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };
    k_means_with_rng(points, params.get_nb_cluster(), params.get_max_iter(), &mut rng)
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::kmeans::point::points_from_vecs;
    use crate::merit::affect::Affectation;

    use rand::distr::{Distribution, Uniform};
    use rand_distr::Normal;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn line_points() -> Vec<Point<f64>> {
        points_from_vecs(vec![vec![0., 0.], vec![1., 0.], vec![9., 0.], vec![10., 0.]])
    }

    // nb_blob gaussian blobs in dim 2, blob centers on a circle of radius 100
    fn gaussian_blobs(nb_blob: usize, nb_by_blob: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<Point<f64>> {
        let noise = Normal::<f64>::new(0., 1.).unwrap();
        let mut data = Vec::<Vec<f64>>::with_capacity(nb_blob * nb_by_blob);
        for b in 0..nb_blob {
            let angle = 2. * std::f64::consts::PI * b as f64 / nb_blob as f64;
            let (cx, cy) = (100. * angle.cos(), 100. * angle.sin());
            for _ in 0..nb_by_blob {
                data.push(vec![cx + noise.sample(rng), cy + noise.sample(rng)]);
            }
        }
        points_from_vecs(data)
    }

    #[test]
    fn well_separated_line() {
        log_init_test();
        let points = line_points();
        for seed in 0..50_u64 {
            let params = KmeansParams::new(2).with_seed(seed);
            let clustering = k_means(&points, &params).unwrap();
            assert_eq!(clustering.get_nb_cluster(), 2);
            let a = clustering.get_assignments();
            assert_eq!(a[0], a[1]);
            assert_eq!(a[2], a[3]);
            assert_ne!(a[0], a[2]);
            let cost = clustering.cost().unwrap();
            assert!((cost - 1.0).abs() < 1.0e-12);
            let group = clustering.get_group(a[0]).unwrap();
            let ids: Vec<usize> = group.iter().map(|p| p.get_id()).collect();
            assert_eq!(ids, vec![0, 1]);
        }
    }

    #[test]
    fn every_initial_draw_converges() {
        // all possible couples of initial centers
        let points = line_points();
        for i in 0..points.len() {
            for j in 0..points.len() {
                if i == j {
                    continue;
                }
                let centers = vec![
                    points[i].get_position().to_vec(),
                    points[j].get_position().to_vec(),
                ];
                let mut lloyd = Lloyd::new(&points, &centers);
                lloyd.run(None).unwrap();
                let clustering = lloyd.into_clustering();
                let reference: Vec<usize> = vec![0, 0, 1, 1];
                let contingency = Contingency::new(
                    &VecAffectation::new(&reference),
                    &clustering.get_affectation(),
                );
                assert!(contingency.is_relabeling());
                assert!((clustering.cost().unwrap() - 1.0).abs() < 1.0e-12);
            }
        }
    }

    #[test]
    fn one_point_per_center() {
        log_init_test();
        let points = points_from_vecs(vec![vec![3., 1.], vec![-2., 7.], vec![0.5, 0.5], vec![8., -8.]]);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9876_u64);
        let centers = generate_k(&points, points.len(), &mut rng).unwrap();
        let mut lloyd = Lloyd::new(&points, &centers);
        let first: Vec<usize> = lloyd.get_assignments().to_vec();
        lloyd.run(None).unwrap();
        // membership is stable from the first assignment, labels may need one update to settle
        assert!(lloyd.get_nb_iter() <= 2);
        let clustering = lloyd.into_clustering();
        assert_eq!(clustering.get_nb_cluster(), points.len());
        assert_eq!(clustering.cost(), Some(0.));
        let contingency = Contingency::new(&VecAffectation::new(&first), &clustering.get_affectation());
        assert!(contingency.is_relabeling());
    }

    #[test]
    fn nb_cluster_never_increases() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(234567_u64);
        let points = gaussian_blobs(5, 40, &mut rng);
        let unif = Uniform::<f64>::new(0., 1.).unwrap();
        for _ in 0..10 {
            let k = 2 + (unif.sample(&mut rng) * 20.) as usize;
            let centers = generate_k(&points, k, &mut rng).unwrap();
            let mut lloyd = Lloyd::new(&points, &centers);
            let mut nb_cluster = lloyd.get_nb_cluster();
            assert!(nb_cluster <= k);
            while lloyd.step() == LloydState::Running {
                let new_nb = lloyd.get_nb_cluster();
                assert!(new_nb <= nb_cluster);
                nb_cluster = new_nb;
            }
            assert!(lloyd.get_nb_cluster() <= nb_cluster);
            assert_eq!(lloyd.step(), LloydState::Converged);
        }
    }

    #[test]
    fn membership_stabilizes_before_labels() {
        // at convergence, the last two assignments are equal, hence also the same partition.
        // Whenever the raw labels differ between two steps while the partition is the same,
        // the following step must converge.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4664397_u64);
        let points = gaussian_blobs(4, 30, &mut rng);
        for _ in 0..20 {
            let centers = generate_k(&points, 6, &mut rng).unwrap();
            let mut lloyd = Lloyd::new(&points, &centers);
            loop {
                let before = lloyd.get_assignments().to_vec();
                let state = lloyd.step();
                let after = lloyd.get_assignments().to_vec();
                let same_partition =
                    Contingency::new(&VecAffectation::new(&before), &VecAffectation::new(&after))
                        .is_relabeling();
                if state == LloydState::Converged {
                    assert!(same_partition);
                    break;
                }
                if same_partition {
                    // centers are the same up to order, so the next assignment reproduces `after`
                    assert_eq!(lloyd.step(), LloydState::Converged);
                    break;
                }
            }
        }
    }

    #[test]
    fn recovers_blobs() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(17_u64);
        let nb_by_blob = 50;
        let points = gaussian_blobs(3, nb_by_blob, &mut rng);
        // one initial center in each blob
        let centers: Vec<Vec<f64>> = (0..3)
            .map(|b| points[b * nb_by_blob].get_position().to_vec())
            .collect();
        let mut lloyd = Lloyd::new(&points, &centers);
        lloyd.run(None).unwrap();
        let clustering = lloyd.into_clustering();
        let reference: Vec<usize> = (0..points.len()).map(|i| i / nb_by_blob).collect();
        let contingency = Contingency::new(&VecAffectation::new(&reference), &clustering.get_affectation());
        assert!(contingency.is_relabeling());
        assert_eq!(clustering.get_affectation().get_nb_cluster(), 3);
        // cost is about 2 * nb points for unit gaussian noise in dim 2
        let cost = clustering.cost().unwrap();
        assert!(cost > 0. && cost < 4. * points.len() as f64);
    }

    #[test]
    fn invalid_inputs() {
        let points = line_points();
        assert!(k_means(&points, &KmeansParams::new(5)).is_err());
        assert!(k_means(&points, &KmeansParams::new(0)).is_err());
        let empty: Vec<Point<f64>> = Vec::new();
        assert!(k_means(&empty, &KmeansParams::new(1)).is_err());
        let bad = points_from_vecs(vec![vec![0., 0.], vec![1.]]);
        assert!(k_means(&bad, &KmeansParams::new(1)).is_err());
    }

    #[test]
    fn max_iter_reached() {
        let points = line_points();
        // initial centers in the same final cluster need at least one update
        let centers = vec![vec![9., 0.], vec![10., 0.]];
        let mut lloyd = Lloyd::new(&points, &centers);
        assert!(lloyd.run(Some(0)).is_err());
        assert!(lloyd.run(Some(100)).is_ok());
        assert_eq!(lloyd.get_state(), LloydState::Converged);
    }
} // end of mod tests
