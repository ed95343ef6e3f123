use crate::disc::swe1d::{ShallowWaterState, TimeDerivatives};

/// Explicit Euler update of the primitive variables. Returns the new state
/// and leaves the old one untouched.
pub fn explicit_euler(
    state: &ShallowWaterState,
    derivs: &TimeDerivatives,
    dt: f64,
) -> ShallowWaterState {
    let mut h = state.h.clone();
    let mut u = state.u.clone();
    h.scaled_add(dt, &derivs.dh_dt);
    u.scaled_add(dt, &derivs.du_dt);
    ShallowWaterState { h, u }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_explicit_euler_update() {
        let state = ShallowWaterState {
            h: array![[1.0, 2.0]],
            u: array![[0.0, -1.0]],
        };
        let derivs = TimeDerivatives {
            dh_dt: array![[0.5, -1.0]],
            du_dt: array![[2.0, 4.0]],
        };
        let next = explicit_euler(&state, &derivs, 0.1);
        assert_relative_eq!(next.h[(0, 0)], 1.05, epsilon = 1e-12);
        assert_relative_eq!(next.h[(0, 1)], 1.9, epsilon = 1e-12);
        assert_relative_eq!(next.u[(0, 0)], 0.2, epsilon = 1e-12);
        assert_relative_eq!(next.u[(0, 1)], -0.6, epsilon = 1e-12);
        // input is not modified
        assert_eq!(state.h, array![[1.0, 2.0]]);
    }
}
