use ndarray::{Array, Ix1};

use crate::error::Result;

pub mod legendre_points;

/// Gauss-Legendre rule on the reference interval [-1, 1].
#[derive(Clone, Debug)]
pub struct GaussPoints1d {
    pub points: Array<f64, Ix1>,
    pub weights: Array<f64, Ix1>,
}
impl GaussPoints1d {
    pub fn new(points_num: usize) -> Result<Self> {
        let (points, weights) = legendre_points::get_legendre_points_interval(points_num)?;
        Ok(Self { points, weights })
    }
    /// Maps the reference points onto the physical interval [a, b].
    pub fn physical_points(&self, a: f64, b: f64) -> Array<f64, Ix1> {
        self.points.mapv(|xi| 0.5 * (b - a) * xi + 0.5 * (b + a))
    }
}
