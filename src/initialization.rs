use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::{
    disc::{mesh::mesh1d::Mesh1d, swe1d::ShallowWaterState},
    error::{DgError, Result},
    io::param_parser::SolverParamParser,
    solver::{FlowParameters, MeshParameters, SolverParameters},
};

pub fn initialize_params_by_file(
    file_path: impl AsRef<Path>,
) -> Result<(MeshParameters, FlowParameters, SolverParameters)> {
    let parser = SolverParamParser::parse(file_path)?;
    initialize_params(parser)
}

/// Validates the raw parameters and splits them by concern.
pub fn initialize_params(
    parser: SolverParamParser,
) -> Result<(MeshParameters, FlowParameters, SolverParameters)> {
    if !(parser.gravity > 0.0) {
        return Err(DgError::invalid_parameter("gravity must be positive"));
    }
    let mesh_params = MeshParameters {
        x_left: parser.x_left,
        x_right: parser.x_right,
        elem_num: parser.elem_num,
        node_num: parser.node_num,
    };
    let flow_params = FlowParameters {
        gravity: parser.gravity,
    };
    let solver_params = SolverParameters {
        final_time: parser.final_time,
        step_num: parser.step_num,
        quadrature_point_num: parser.quadrature_point_num,
        write_interval: parser.write_interval,
        output_dir: PathBuf::from(parser.output_dir),
    };
    solver_params.validate()?;
    Ok((mesh_params, flow_params, solver_params))
}

pub fn initialize_mesh1d(mesh_params: &MeshParameters) -> Result<Mesh1d> {
    Mesh1d::new(
        mesh_params.elem_num,
        mesh_params.node_num,
        mesh_params.x_left,
        mesh_params.x_right,
    )
}

/// Gaussian bump `1 + 0.1 exp(-(x - x_mid)^2)` at rest.
pub fn initialize_state(mesh: &Mesh1d) -> ShallowWaterState {
    let x_mid = 0.5 * (mesh.left_coord() + mesh.right_coord());
    initialize_state_with(
        mesh,
        |x| 1.0 + 0.1 * (-(x - x_mid) * (x - x_mid)).exp(),
        |_| 0.0,
    )
}

pub fn initialize_state_with(
    mesh: &Mesh1d,
    h_init: impl Fn(f64) -> f64,
    u_init: impl Fn(f64) -> f64,
) -> ShallowWaterState {
    let coords: Array2<f64> = mesh.coords();
    ShallowWaterState {
        h: coords.mapv(&h_init),
        u: coords.mapv(&u_init),
    }
}
