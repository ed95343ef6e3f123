/// Physical shallow-water flux (h u, h u^2 + g h^2 / 2) of the primitive state (h, u).
pub fn flux1d(h: f64, u: f64, g: f64) -> [f64; 2] {
    [h * u, h * u * u + 0.5 * g * h * h]
}

/// Conserved variables (h, h u) of the primitive state.
pub fn conserved1d(h: f64, u: f64) -> [f64; 2] {
    [h, h * u]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_still_water_flux_is_hydrostatic() {
        let f = flux1d(2.0, 0.0, 9.8);
        assert_relative_eq!(f[0], 0.0);
        assert_relative_eq!(f[1], 19.6);
    }

    #[test]
    fn test_moving_water_flux() {
        let f = flux1d(1.5, 2.0, 9.8);
        assert_relative_eq!(f[0], 3.0);
        assert_relative_eq!(f[1], 1.5 * 4.0 + 0.5 * 9.8 * 2.25);
        assert_eq!(conserved1d(1.5, 2.0), [1.5, 3.0]);
    }
}
