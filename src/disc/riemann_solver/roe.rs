//! Roe flux for the 1D shallow-water system, linearised at the arithmetic
//! average of the two interface states.
//!
//! The flux Jacobian at (h, u) is `[[0, 1], [g h - u^2, 2 u]]` with
//! eigenvalues `u -/+ c`, `c = sqrt(g h)`, and right eigenvectors
//! `(1, u -/+ c)`. `|A| = R |Lambda| R^-1` is assembled in closed form.

use crate::disc::flux::{conserved1d, flux1d};

/// `|A|` at the average state, or `None` when the eigenvector matrix is
/// singular or complex (average height not strictly positive).
pub fn abs_jacobian(h_avg: f64, u_avg: f64, g: f64) -> Option<[[f64; 2]; 2]> {
    if !(h_avg > 0.0) || !u_avg.is_finite() || !h_avg.is_finite() {
        return None;
    }
    let c = (g * h_avg).sqrt();
    let lambda1 = u_avg - c;
    let lambda2 = u_avg + c;
    let abs1 = lambda1.abs();
    let abs2 = lambda2.abs();
    // det R = lambda2 - lambda1 = 2c
    let inv_det = 1.0 / (2.0 * c);
    Some([
        [
            (abs1 * lambda2 - abs2 * lambda1) * inv_det,
            (abs2 - abs1) * inv_det,
        ],
        [
            lambda1 * lambda2 * (abs1 - abs2) * inv_det,
            (lambda2 * abs2 - lambda1 * abs1) * inv_det,
        ],
    ])
}

/// Roe flux between the left state (hl, ul) and the right state (hr, ur):
/// `0.5 (F_l + F_r) - 0.5 |A| (U_r - U_l)`.
pub fn roe(hl: f64, ul: f64, hr: f64, ur: f64, g: f64) -> Option<[f64; 2]> {
    let h_avg = 0.5 * (hl + hr);
    let u_avg = 0.5 * (ul + ur);
    let abs_a = abs_jacobian(h_avg, u_avg, g)?;
    let fl = flux1d(hl, ul, g);
    let fr = flux1d(hr, ur, g);
    let ql = conserved1d(hl, ul);
    let qr = conserved1d(hr, ur);
    let dq = [qr[0] - ql[0], qr[1] - ql[1]];
    let mut flux = [0.0; 2];
    for k in 0..2 {
        flux[k] = 0.5 * (fl[k] + fr[k]) - 0.5 * (abs_a[k][0] * dq[0] + abs_a[k][1] * dq[1]);
    }
    Some(flux)
}
