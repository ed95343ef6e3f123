use ndarray::{Array, Array1, ArrayView1, Ix2};

use crate::disc::gauss_points::GaussPoints1d;
use crate::error::{DgError, Result};

/// Value of the Lagrange polynomial that is one at `nodes[i]` and zero at
/// every other node, evaluated at `x`. Nodes must be distinct.
pub fn lagrange_basis(nodes: ArrayView1<f64>, i: usize, x: f64) -> f64 {
    let x_i = nodes[i];
    let mut product = 1.0;
    for (j, &x_j) in nodes.iter().enumerate() {
        if j != i {
            product *= (x - x_j) / (x_i - x_j);
        }
    }
    product
}

/// Exact derivative of [`lagrange_basis`] at `x`.
pub fn lagrange_basis_derivative(nodes: ArrayView1<f64>, i: usize, x: f64) -> f64 {
    let n = nodes.len();
    let mut derivative = 0.0;
    for j in 0..n {
        if j != i {
            let mut product = 1.0;
            for k in 0..n {
                // skip the node whose factor was differentiated
                if k != i && k != j {
                    product *= (x - nodes[k]) / (nodes[i] - nodes[k]);
                }
            }
            derivative += product / (nodes[i] - nodes[j]);
        }
    }
    derivative
}

/// Fails on the first pair of coincident nodes.
pub fn check_distinct_nodes(nodes: ArrayView1<f64>, ielem: usize) -> Result<()> {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i] == nodes[j] {
                return Err(DgError::DuplicateNodes {
                    ielem,
                    inode: i,
                    jnode: j,
                });
            }
        }
    }
    Ok(())
}

/// Lagrange basis of one element tabulated at the Gauss points mapped onto
/// that element. The tables only depend on the node layout relative to the
/// element, so one instance serves every element with the same node offsets.
pub struct LagrangeBasis1D {
    pub nodes: Array1<f64>,
    pub gauss_points: GaussPoints1d,
    pub phis_cell_gps: Array<f64, Ix2>,  // (nbasis, ngp)
    pub dphis_cell_gps: Array<f64, Ix2>, // (nbasis, ngp)
}

impl LagrangeBasis1D {
    pub fn new(nodes: ArrayView1<f64>, gauss_points: GaussPoints1d) -> Result<LagrangeBasis1D> {
        if nodes.len() < 2 {
            return Err(DgError::invalid_parameter(
                "an element needs at least two nodes",
            ));
        }
        check_distinct_nodes(nodes, 0)?;
        let (phis_cell_gps, dphis_cell_gps) = generate_reference_space(nodes, &gauss_points);
        Ok(LagrangeBasis1D {
            nodes: nodes.to_owned(),
            gauss_points,
            phis_cell_gps,
            dphis_cell_gps,
        })
    }
    pub fn nbasis(&self) -> usize {
        self.nodes.len()
    }
}

/// Maps the reference Gauss points onto [nodes[0], nodes[N-1]] and returns
/// the basis values and x-derivatives there, both shaped (nbasis, ngp).
pub fn generate_reference_space(
    nodes: ArrayView1<f64>,
    gauss_points: &GaussPoints1d,
) -> (Array<f64, Ix2>, Array<f64, Ix2>) {
    let nbasis = nodes.len();
    let a = nodes[0];
    let b = nodes[nbasis - 1];
    let phys_points = gauss_points.physical_points(a, b);
    let ngp = phys_points.len();
    let phis = Array::from_shape_fn((nbasis, ngp), |(i, q)| {
        lagrange_basis(nodes, i, phys_points[q])
    });
    let dphis = Array::from_shape_fn((nbasis, ngp), |(i, q)| {
        lagrange_basis_derivative(nodes, i, phys_points[q])
    });
    (phis, dphis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;
    use proptest::prelude::*;

    fn equispaced(a: f64, b: f64, n: usize) -> Array1<f64> {
        Array1::linspace(a, b, n)
    }

    #[test]
    fn test_kronecker_delta() {
        for n in 2..=6 {
            let nodes = equispaced(0.0, 10.0 / 6.0, n);
            for i in 0..n {
                for j in 0..n {
                    let phi = lagrange_basis(nodes.view(), i, nodes[j]);
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(phi, expected, epsilon = 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_linear_basis() {
        let nodes = array![1.0, 3.0];
        assert_relative_eq!(lagrange_basis(nodes.view(), 0, 2.0), 0.5);
        assert_relative_eq!(lagrange_basis(nodes.view(), 1, 2.5), 0.75);
        assert_relative_eq!(lagrange_basis_derivative(nodes.view(), 0, 2.0), -0.5);
        assert_relative_eq!(lagrange_basis_derivative(nodes.view(), 1, 0.0), 0.5);
    }

    #[test]
    fn test_derivative_matches_central_difference() {
        let nodes = array![0.0, 0.4, 1.1, 1.5];
        let eps = 1e-5;
        for i in 0..nodes.len() {
            for &x in &[-0.3, 0.2, 0.77, 1.3, 1.9] {
                let fd = (lagrange_basis(nodes.view(), i, x + eps)
                    - lagrange_basis(nodes.view(), i, x - eps))
                    / (2.0 * eps);
                let exact = lagrange_basis_derivative(nodes.view(), i, x);
                assert_abs_diff_eq!(exact, fd, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_derivatives_sum_to_zero() {
        let nodes = equispaced(-1.0, 1.0, 5);
        for &x in &[-0.9, -0.1, 0.35, 0.8] {
            let sum: f64 = (0..5)
                .map(|i| lagrange_basis_derivative(nodes.view(), i, x))
                .sum();
            assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reference_space_shape_and_mapping() {
        let nodes = equispaced(10.0 / 6.0, 20.0 / 6.0, 4);
        let gp = GaussPoints1d::new(6).unwrap();
        let (phis, dphis) = generate_reference_space(nodes.view(), &gp);
        assert_eq!(phis.dim(), (4, 6));
        assert_eq!(dphis.dim(), (4, 6));
        let x = gp.physical_points(nodes[0], nodes[3]);
        for q in 0..6 {
            assert_relative_eq!(phis[(2, q)], lagrange_basis(nodes.view(), 2, x[q]));
            assert_abs_diff_eq!(phis.column(q).sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reference_space_is_translation_invariant() {
        let gp = GaussPoints1d::new(8).unwrap();
        let left = equispaced(0.0, 2.0, 3);
        let right = equispaced(6.0, 8.0, 3);
        let (phis_l, dphis_l) = generate_reference_space(left.view(), &gp);
        let (phis_r, dphis_r) = generate_reference_space(right.view(), &gp);
        for (a, b) in phis_l.iter().zip(phis_r.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
        }
        for (a, b) in dphis_l.iter().zip(dphis_r.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_duplicate_nodes_rejected() {
        let nodes = array![0.0, 0.5, 0.5, 1.0];
        let gp = GaussPoints1d::new(4).unwrap();
        let err = LagrangeBasis1D::new(nodes.view(), gp).err();
        assert!(matches!(
            err,
            Some(DgError::DuplicateNodes {
                inode: 1,
                jnode: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_basis_tables_through_struct() {
        let nodes = array![0.0, 0.3, 1.0];
        let gp = GaussPoints1d::new(4).unwrap();
        let basis = LagrangeBasis1D::new(nodes.view(), gp.clone()).unwrap();
        assert_eq!(basis.nbasis(), 3);
        assert_eq!(basis.phis_cell_gps.dim(), (3, 4));
        let x = gp.physical_points(0.0, 1.0);
        for q in 0..4 {
            // phi_1 on nodes (0, 0.3, 1) is x (1 - x) / 0.21
            assert_relative_eq!(
                basis.phis_cell_gps[(1, q)],
                x[q] * (1.0 - x[q]) / 0.21,
                epsilon = 1e-12
            );
            assert_relative_eq!(
                basis.dphis_cell_gps[(1, q)],
                (1.0 - 2.0 * x[q]) / 0.21,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_single_node_rejected() {
        let nodes = array![0.0];
        let gp = GaussPoints1d::new(2).unwrap();
        assert!(LagrangeBasis1D::new(nodes.view(), gp).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64, .. ProptestConfig::default()
        })]

        #[test]
        fn partition_of_unity(
            a in -5.0f64..5.0,
            len in 0.1f64..3.0,
            n in 2usize..7,
            t in -0.5f64..1.5,
        ) {
            let nodes = Array1::linspace(a, a + len, n);
            let x = a + t * len;
            let sum: f64 = (0..n).map(|i| lagrange_basis(nodes.view(), i, x)).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        }

        #[test]
        fn kronecker_delta_random_nodes(
            mut gaps in proptest::collection::vec(0.05f64..1.0, 1..6),
            a in -3.0f64..3.0,
        ) {
            gaps.insert(0, 0.0);
            let mut x = a;
            let nodes = Array1::from_iter(gaps.iter().map(|g| { x += g; x }));
            let n = nodes.len();
            for i in 0..n {
                for j in 0..n {
                    let phi = lagrange_basis(nodes.view(), i, nodes[j]);
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!((phi - expected).abs() < 1e-10);
                }
            }
        }
    }
}
