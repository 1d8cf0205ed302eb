//! parameters of a k-means run

/// Parameters driving [k_means](super::lloyd::k_means).
///
/// - nb_cluster : number of initial centers, must be in 1..=nb points
/// - seed : if set, the initial centers are drawn with a Xoshiro256PlusPlus seeded with it. Otherwise the generator is seeded from os entropy
/// - max_iter : if set, the run fails if assignments have not stabilized after max_iter updates. By default iterations go on until convergence
#[derive(Debug, Copy, Clone)]
pub struct KmeansParams {
    nb_cluster: usize,
    seed: Option<u64>,
    max_iter: Option<usize>,
}

impl KmeansParams {
    pub fn new(nb_cluster: usize) -> Self {
        KmeansParams {
            nb_cluster,
            seed: None,
            max_iter: None,
        }
    }

    /// fix the seed of initial centers draw
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// bound the number of center updates
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    pub fn get_nb_cluster(&self) -> usize {
        self.nb_cluster
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_max_iter(&self) -> Option<usize> {
        self.max_iter
    }
} // end of impl KmeansParams
