use ndarray::ArrayView2;

use crate::disc::flux::flux1d;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPosition {
    Left,
    Right,
}

/// Open domain end. The missing neighbour flux is replaced by the physical
/// flux of the boundary element's own boundary node.
#[derive(Clone, Debug)]
pub struct OpenBoundary {
    pub position: BoundaryPosition,
}
impl OpenBoundary {
    pub fn new(position: BoundaryPosition) -> Self {
        Self { position }
    }
    /// (element, node) index of the boundary node.
    pub fn boundary_node(&self, elem_num: usize, node_num: usize) -> (usize, usize) {
        match self.position {
            BoundaryPosition::Left => (0, 0),
            BoundaryPosition::Right => (elem_num - 1, node_num - 1),
        }
    }
    /// h and u are shaped (elem_num, node_num).
    pub fn flux(&self, h: ArrayView2<f64>, u: ArrayView2<f64>, g: f64) -> [f64; 2] {
        let (elem_num, node_num) = h.dim();
        let idx = self.boundary_node(elem_num, node_num);
        flux1d(h[idx], u[idx], g)
    }
}
