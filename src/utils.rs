use crate::vector::Vector;
use rand::Rng;

/// Vector of dimension `dim` with components drawn uniformly from `[-1, 1)`.
pub fn random_vector<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Vector {
    (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num).map(|_| random_vector(dim, &mut rng)).collect()
}
