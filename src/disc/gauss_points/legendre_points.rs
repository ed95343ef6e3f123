use ndarray::{Array, Array1, Array2, Ix1};
use ndarray_linalg::{Eigh, UPLO};
use statrs::function::gamma::gamma;

use crate::error::{DgError, Result};

pub fn get_legendre_points_interval(
    points_num: usize,
) -> Result<(Array<f64, Ix1>, Array<f64, Ix1>)> {
    jacobi_gauss_quadrature(0.0, 0.0, points_num)
}

/// Golub-Welsch: the nodes of the `points_num`-point Gauss-Jacobi rule are
/// the eigenvalues of the symmetric tridiagonal Jacobi matrix, the weights
/// follow from the first component of each normalised eigenvector.
pub fn jacobi_gauss_quadrature(
    alpha: f64,
    beta: f64,
    points_num: usize,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if points_num == 0 {
        return Err(DgError::invalid_parameter(
            "quadrature needs at least one point",
        ));
    }
    let dim = points_num;
    let mut j = Array2::<f64>::zeros((dim, dim));
    let h1 = Array1::from_iter((0..dim).map(|k| 2.0 * k as f64 + alpha + beta));
    for k in 0..dim {
        j[[k, k]] = if k == 0 {
            (beta - alpha) / (alpha + beta + 2.0)
        } else {
            (beta * beta - alpha * alpha) / (h1[k] * (h1[k] + 2.0))
        };
    }
    // off-diagonal
    for k in 0..(dim - 1) {
        let l = k as f64 + 1.0;
        let numerator = l * (l + alpha + beta) * (l + alpha) * (l + beta);
        let denominator = (h1[k] + 1.0) * (h1[k] + 3.0);
        let off_diag_val = (2.0 / (h1[k] + 2.0)) * (numerator / denominator).sqrt();
        j[[k, k + 1]] = off_diag_val;
        j[[k + 1, k]] = off_diag_val;
    }
    let (eigenvalues, eigenvectors) = j.eigh(UPLO::Lower)?;
    let mu_0_factor = 2.0_f64.powf(alpha + beta + 1.0) * gamma(alpha + 1.0) * gamma(beta + 1.0)
        / gamma(alpha + beta + 2.0);
    let weights = eigenvectors
        .row(0)
        .mapv(|v_comp| v_comp.powi(2) * mu_0_factor);
    Ok((eigenvalues, weights))
}
