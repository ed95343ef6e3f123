//! Nodal DG discretisation of the 1D shallow-water equations.
//!
//! Per element `M dU/dt = S F(U) - (F* phi)|_a^b`, where the nodal basis
//! puts the interface fluxes on the first and last node of each element.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};

use super::{
    basis::lagrange1d::LagrangeBasis1D,
    boundary::{BoundaryPosition, OpenBoundary},
    gauss_points::GaussPoints1d,
    mesh::mesh1d::Mesh1d,
    precompute_matrix::{compute_im_mat, compute_kx_mat, compute_m_mat},
    riemann_solver::roe::roe,
};
use crate::error::{DgError, Result};
use crate::solver::FlowParameters;

/// Height and velocity at every node, shaped (elem_num, node_num).
#[derive(Clone, Debug, PartialEq)]
pub struct ShallowWaterState {
    pub h: Array2<f64>,
    pub u: Array2<f64>,
}

#[derive(Clone, Debug)]
pub struct TimeDerivatives {
    pub dh_dt: Array2<f64>,
    pub du_dt: Array2<f64>,
}

/// Basis tables and element matrices of one node layout.
pub struct ElementOperators {
    pub basis: LagrangeBasis1D,
    pub m_mat: Array2<f64>,  // mass matrix
    pub im_mat: Array2<f64>, // inverse mass matrix
    pub kx_mat: Array2<f64>, // stiffness matrix, integral of dphi_i/dx phi_j
}
impl ElementOperators {
    pub fn new(nodes: ArrayView1<f64>, gauss_points: GaussPoints1d) -> Result<Self> {
        let basis = LagrangeBasis1D::new(nodes, gauss_points)?;
        let elem_length = nodes[nodes.len() - 1] - nodes[0];
        let weights = basis.gauss_points.weights.view();
        let m_mat = compute_m_mat(elem_length, weights, basis.phis_cell_gps.view());
        let im_mat = compute_im_mat(m_mat.view())?;
        let kx_mat = compute_kx_mat(
            elem_length,
            weights,
            basis.phis_cell_gps.view(),
            basis.dphis_cell_gps.view(),
        );
        Ok(ElementOperators {
            basis,
            m_mat,
            im_mat,
            kx_mat,
        })
    }
}

pub struct Disc1dShallowWater<'a> {
    mesh: &'a Mesh1d,
    flow_param: &'a FlowParameters,
    operators: Vec<ElementOperators>, // one per distinct node layout
    elem_operator: Vec<usize>,        // operator index of every element
    left_bnd: OpenBoundary,
    right_bnd: OpenBoundary,
}
impl<'a> Disc1dShallowWater<'a> {
    /// Precomputes the basis tables and element matrices once per distinct
    /// node layout of the mesh. A uniform mesh needs a single set.
    pub fn new(
        mesh: &'a Mesh1d,
        flow_param: &'a FlowParameters,
        quadrature_point_num: usize,
    ) -> Result<Disc1dShallowWater<'a>> {
        let gauss_points = GaussPoints1d::new(quadrature_point_num)?;
        let (representatives, elem_operator) = mesh.layout_groups();
        let operators = representatives
            .iter()
            .map(|&ielem| {
                ElementOperators::new(mesh.elements[ielem].nodes.view(), gauss_points.clone())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Disc1dShallowWater {
            mesh,
            flow_param,
            operators,
            elem_operator,
            left_bnd: OpenBoundary::new(BoundaryPosition::Left),
            right_bnd: OpenBoundary::new(BoundaryPosition::Right),
        })
    }
    /// Operators used for element `ielem`.
    pub fn operators(&self, ielem: usize) -> &ElementOperators {
        &self.operators[self.elem_operator[ielem]]
    }
    pub fn operator_set_num(&self) -> usize {
        self.operators.len()
    }
    fn check_state(&self, state: &ShallowWaterState) -> Result<()> {
        let expected = (self.mesh.elem_num, self.mesh.node_num);
        if state.h.dim() != expected || state.u.dim() != expected {
            return Err(DgError::invalid_parameter(format!(
                "state shapes {:?}/{:?} do not match mesh {:?}",
                state.h.dim(),
                state.u.dim(),
                expected
            )));
        }
        Ok(())
    }
    /// Numerical flux at every element interface, shaped (elem_num + 1, 2).
    /// Row `n` is the flux at the left end of element `n`; the first and
    /// last rows are the open-boundary fluxes.
    pub fn compute_interface_fluxes(
        &self,
        h: ArrayView2<f64>,
        u: ArrayView2<f64>,
    ) -> Result<Array2<f64>> {
        let g = self.flow_param.gravity;
        let (nelem, nnode) = h.dim();
        let mut fluxes = Array2::zeros((nelem + 1, 2));
        let left = self.left_bnd.flux(h, u, g);
        let right = self.right_bnd.flux(h, u, g);
        fluxes[(0, 0)] = left[0];
        fluxes[(0, 1)] = left[1];
        fluxes[(nelem, 0)] = right[0];
        fluxes[(nelem, 1)] = right[1];
        for iface in 1..nelem {
            let ilelem = iface - 1;
            let irelem = iface;
            let (hl, ul) = (h[(ilelem, nnode - 1)], u[(ilelem, nnode - 1)]);
            let (hr, ur) = (h[(irelem, 0)], u[(irelem, 0)]);
            let num_flux = roe(hl, ul, hr, ur, g).ok_or(DgError::NonPhysicalState {
                interface: iface,
                h_avg: 0.5 * (hl + hr),
            })?;
            fluxes[(iface, 0)] = num_flux[0];
            fluxes[(iface, 1)] = num_flux[1];
        }
        Ok(fluxes)
    }
    /// Boundary terms `phi_i(b) F*(b) - phi_i(a) F*(a)` of every element, one
    /// array per conserved variable. Only the end nodes receive a value.
    pub fn compute_flux_jumps(
        &self,
        h: ArrayView2<f64>,
        u: ArrayView2<f64>,
    ) -> Result<(Array2<f64>, Array2<f64>)> {
        let (nelem, nnode) = h.dim();
        let fluxes = self.compute_interface_fluxes(h, u)?;
        let mut jumps1 = Array2::zeros((nelem, nnode));
        let mut jumps2 = Array2::zeros((nelem, nnode));
        for ielem in 0..nelem {
            jumps1[(ielem, nnode - 1)] += fluxes[(ielem + 1, 0)];
            jumps2[(ielem, nnode - 1)] += fluxes[(ielem + 1, 1)];
            jumps1[(ielem, 0)] -= fluxes[(ielem, 0)];
            jumps2[(ielem, 0)] -= fluxes[(ielem, 1)];
        }
        Ok((jumps1, jumps2))
    }
    /// `S (h u)` and `S (h u^2 + g h^2 / 2)` per element.
    pub fn compute_stiffness_vectors(
        &self,
        h: ArrayView2<f64>,
        u: ArrayView2<f64>,
    ) -> (Array2<f64>, Array2<f64>) {
        let g = self.flow_param.gravity;
        let f1 = &h * &u;
        let f2 = &f1 * &u + 0.5 * g * &h * &h;
        let nelem = h.nrows();
        let mut stiff1 = Array2::zeros(h.raw_dim());
        let mut stiff2 = Array2::zeros(h.raw_dim());
        for ielem in 0..nelem {
            let kx_mat = &self.operators(ielem).kx_mat;
            stiff1
                .slice_mut(s![ielem, ..])
                .assign(&kx_mat.dot(&f1.slice(s![ielem, ..])));
            stiff2
                .slice_mut(s![ielem, ..])
                .assign(&kx_mat.dot(&f2.slice(s![ielem, ..])));
        }
        (stiff1, stiff2)
    }
    pub fn compute_residuals(&self, state: &ShallowWaterState) -> Result<(Array2<f64>, Array2<f64>)> {
        self.check_state(state)?;
        let (h, u) = (state.h.view(), state.u.view());
        let (stiff1, stiff2) = self.compute_stiffness_vectors(h, u);
        let (jumps1, jumps2) = self.compute_flux_jumps(h, u)?;
        Ok((stiff1 - jumps1, stiff2 - jumps2))
    }
    /// Time derivatives of the conserved variables, `M^-1` times the residuals.
    pub fn compute_conserved_derivatives(
        &self,
        state: &ShallowWaterState,
    ) -> Result<(Array2<f64>, Array2<f64>)> {
        let (mut res1, mut res2) = self.compute_residuals(state)?;
        for ielem in 0..self.mesh.elem_num {
            let im_mat = &self.operators(ielem).im_mat;
            let d1 = im_mat.dot(&res1.slice(s![ielem, ..]));
            let d2 = im_mat.dot(&res2.slice(s![ielem, ..]));
            res1.slice_mut(s![ielem, ..]).assign(&d1);
            res2.slice_mut(s![ielem, ..]).assign(&d2);
        }
        Ok((res1, res2))
    }
    pub fn compute_time_derivatives(&self, state: &ShallowWaterState) -> Result<TimeDerivatives> {
        let (du1_dt, du2_dt) = self.compute_conserved_derivatives(state)?;
        let (dh_dt, du_dt) =
            primitive_time_derivatives(state.h.view(), state.u.view(), du1_dt, du2_dt.view());
        Ok(TimeDerivatives { dh_dt, du_dt })
    }
    /// Discrete integral of h over the domain, `sum_e 1^T M h_e`.
    pub fn total_mass(&self, state: &ShallowWaterState) -> f64 {
        let weights: Vec<Array1<f64>> = self
            .operators
            .iter()
            .map(|op| op.m_mat.dot(&Array1::<f64>::ones(op.basis.nbasis())))
            .collect();
        state
            .h
            .outer_iter()
            .zip(self.elem_operator.iter())
            .map(|(h_elem, &iop)| h_elem.dot(&weights[iop]))
            .sum()
    }
    /// Mass flux leaving through the right end minus the one entering at the
    /// left end. The interior fluxes cancel, so `d(total_mass)/dt` equals the
    /// negative of this value.
    pub fn boundary_mass_flux(&self, state: &ShallowWaterState) -> f64 {
        let g = self.flow_param.gravity;
        let (h, u) = (state.h.view(), state.u.view());
        self.right_bnd.flux(h, u, g)[0] - self.left_bnd.flux(h, u, g)[0]
    }
}

/// `dh/dt = dU1/dt`, `du/dt = (dU2/dt - u dh/dt) / h`, with `du/dt = 0`
/// wherever `h == 0`.
pub fn primitive_time_derivatives(
    h: ArrayView2<f64>,
    u: ArrayView2<f64>,
    du1_dt: Array2<f64>,
    du2_dt: ArrayView2<f64>,
) -> (Array2<f64>, Array2<f64>) {
    let dh_dt = du1_dt;
    let mut du_dt = Array2::zeros(h.raw_dim());
    ndarray::Zip::from(&mut du_dt)
        .and(&h)
        .and(&u)
        .and(&dh_dt)
        .and(&du2_dt)
        .for_each(|du, &h, &u, &dh, &du2| {
            *du = if h == 0.0 { 0.0 } else { (du2 - u * dh) / h };
        });
    (dh_dt, du_dt)
}
