use ndarray::{Array2, ArrayView1, ArrayView2};
use ndarray_linalg::Inverse;

use crate::error::Result;

/// M[i][j] = 0.5 * L * sum_q w_q phi_i(x_q) phi_j(x_q), the quadrature of
/// the integral of phi_i * phi_j over one element of length L.
pub fn compute_m_mat(
    elem_length: f64,
    weights: ArrayView1<f64>,
    phis_cell_gps: ArrayView2<f64>, // (nbasis, ngp)
) -> Array2<f64> {
    let (nbasis, ngp) = phis_cell_gps.dim();
    let mut m_mat = Array2::zeros((nbasis, nbasis));
    for i in 0..nbasis {
        for j in 0..nbasis {
            let mut sum = 0.0;
            for igp in 0..ngp {
                sum += weights[igp] * phis_cell_gps[(i, igp)] * phis_cell_gps[(j, igp)];
            }
            m_mat[[i, j]] = 0.5 * elem_length * sum;
        }
    }
    m_mat
}

pub fn compute_im_mat(m_mat: ArrayView2<f64>) -> Result<Array2<f64>> {
    Ok(m_mat.inv()?)
}

/// S[i][j] = 0.5 * L * sum_q w_q dphi_i/dx(x_q) phi_j(x_q).
pub fn compute_kx_mat(
    elem_length: f64,
    weights: ArrayView1<f64>,
    phis_cell_gps: ArrayView2<f64>,  // (nbasis, ngp)
    dphis_cell_gps: ArrayView2<f64>, // (nbasis, ngp)
) -> Array2<f64> {
    let (nbasis, ngp) = phis_cell_gps.dim();
    let mut kx_mat = Array2::zeros((nbasis, nbasis));
    for i in 0..nbasis {
        for j in 0..nbasis {
            let mut sum = 0.0;
            for igp in 0..ngp {
                sum += weights[igp] * dphis_cell_gps[(i, igp)] * phis_cell_gps[(j, igp)];
            }
            kx_mat[[i, j]] = 0.5 * elem_length * sum;
        }
    }
    kx_mat
}
