use ndarray::{Array1, Array2, ArrayView1};

use crate::disc::basis::lagrange1d::check_distinct_nodes;
use crate::error::{DgError, Result};

/// Tolerance on node offsets, relative to the largest coordinate magnitude of
/// the domain. Rounding in the coordinates scales with that magnitude.
const LAYOUT_RTOL: f64 = 1e-12;

#[derive(Clone, Debug)]
pub struct Element1d {
    pub nodes: Array1<f64>, // physical node coordinates, strictly increasing
}
impl Element1d {
    pub fn left(&self) -> f64 {
        self.nodes[0]
    }
    pub fn right(&self) -> f64 {
        self.nodes[self.nodes.len() - 1]
    }
    pub fn length(&self) -> f64 {
        self.right() - self.left()
    }
    /// Node positions measured from the left end of the element.
    pub fn offsets(&self) -> Array1<f64> {
        self.nodes.mapv(|x| x - self.left())
    }
}

/// Static 1D mesh: contiguous, non-overlapping elements that all carry the
/// same number of nodes, the first and last of which sit on the element ends.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub elem_num: usize,
    pub node_num: usize, // nodes per element
    pub elements: Vec<Element1d>,
}
impl Mesh1d {
    /// Uniform mesh of `elem_num` elements with `node_num` equispaced nodes each.
    pub fn new(elem_num: usize, node_num: usize, left_coord: f64, right_coord: f64) -> Result<Self> {
        if elem_num == 0 {
            return Err(DgError::invalid_parameter("mesh needs at least one element"));
        }
        if node_num < 2 {
            return Err(DgError::invalid_parameter(
                "an element needs at least two nodes",
            ));
        }
        if !(right_coord > left_coord) {
            return Err(DgError::invalid_parameter(format!(
                "domain [{left_coord}, {right_coord}] is empty"
            )));
        }
        let dx = (right_coord - left_coord) / elem_num as f64;
        let elements = (0..elem_num)
            .map(|ielem| {
                let x0 = left_coord + ielem as f64 * dx;
                let x1 = left_coord + (ielem + 1) as f64 * dx;
                Element1d {
                    nodes: Array1::linspace(x0, x1, node_num),
                }
            })
            .collect();
        Ok(Mesh1d {
            elem_num,
            node_num,
            elements,
        })
    }
    /// Builds a mesh from explicit node coordinates, one row per element.
    pub fn from_nodes(coords: &Array2<f64>) -> Result<Self> {
        let (elem_num, node_num) = coords.dim();
        if elem_num == 0 || node_num < 2 {
            return Err(DgError::invalid_parameter(format!(
                "node table of shape ({elem_num}, {node_num}) is too small"
            )));
        }
        let mut elements: Vec<Element1d> = Vec::with_capacity(elem_num);
        for (ielem, row) in coords.outer_iter().enumerate() {
            Self::check_element(row, ielem)?;
            if let Some(prev) = elements.last() {
                if prev.right() != row[0] {
                    return Err(DgError::invalid_parameter(format!(
                        "element {ielem} does not start where element {} ends",
                        ielem - 1
                    )));
                }
            }
            elements.push(Element1d {
                nodes: row.to_owned(),
            });
        }
        Ok(Mesh1d {
            elem_num,
            node_num,
            elements,
        })
    }
    fn check_element(nodes: ArrayView1<f64>, ielem: usize) -> Result<()> {
        let n = nodes.len();
        if nodes[n - 1] == nodes[0] {
            return Err(DgError::ZeroLengthElement { ielem });
        }
        check_distinct_nodes(nodes, ielem)?;
        if nodes.windows(2).into_iter().any(|w| w[1] <= w[0]) {
            return Err(DgError::NonIncreasingNodes { ielem });
        }
        Ok(())
    }
    pub fn elem_length(&self, ielem: usize) -> f64 {
        self.elements[ielem].length()
    }
    pub fn left_coord(&self) -> f64 {
        self.elements[0].left()
    }
    pub fn right_coord(&self) -> f64 {
        self.elements[self.elem_num - 1].right()
    }
    /// Groups elements whose node offsets agree. Returns the first element of
    /// every group and the group index of each element. Elements of one group
    /// share their basis tables and element matrices.
    pub fn layout_groups(&self) -> (Vec<usize>, Vec<usize>) {
        let tol = LAYOUT_RTOL * self.left_coord().abs().max(self.right_coord().abs());
        let mut representatives: Vec<usize> = Vec::new();
        let mut rep_offsets: Vec<Array1<f64>> = Vec::new();
        let mut group_of = Vec::with_capacity(self.elem_num);
        for (ielem, elem) in self.elements.iter().enumerate() {
            let offsets = elem.offsets();
            let found = rep_offsets.iter().position(|rep| {
                rep.iter()
                    .zip(offsets.iter())
                    .all(|(a, b)| (a - b).abs() <= tol)
            });
            let igroup = match found {
                Some(igroup) => igroup,
                None => {
                    representatives.push(ielem);
                    rep_offsets.push(offsets);
                    representatives.len() - 1
                }
            };
            group_of.push(igroup);
        }
        (representatives, group_of)
    }
    /// Node coordinates shaped (elem_num, node_num).
    pub fn coords(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.elem_num, self.node_num), |(ielem, inode)| {
            self.elements[ielem].nodes[inode]
        })
    }
}
