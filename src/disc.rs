pub mod basis;
pub mod boundary;
pub mod flux;
pub mod gauss_points;
pub mod mesh;
pub mod precompute_matrix;
pub mod riemann_solver;
pub mod swe1d;
