use std::process::ExitCode;

use log::{error, info};

use dg_shallow_water::error::Result;
use dg_shallow_water::initialization::{
    initialize_mesh1d, initialize_params_by_file, initialize_state,
};
use dg_shallow_water::solver::Solver;

const DEFAULT_PARAM_FILE: &str = "inputs/solverparam.json";

fn run() -> Result<()> {
    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PARAM_FILE.to_string());
    let (mesh_params, flow_params, solver_params) = initialize_params_by_file(&param_file)?;
    info!(
        "domain: [{}, {}], elements: {}, nodes per element: {}",
        mesh_params.x_left, mesh_params.x_right, mesh_params.elem_num, mesh_params.node_num
    );
    info!(
        "steps: {}, final time: {}, quadrature points: {}",
        solver_params.step_num, solver_params.final_time, solver_params.quadrature_point_num
    );
    let mesh = initialize_mesh1d(&mesh_params)?;
    let state = initialize_state(&mesh);
    let mut solver = Solver::new(&mesh, &flow_params, &solver_params, state)?;
    solver.solve()?;
    info!(
        "done: {} steps, frames in {}",
        solver.current_step,
        solver_params.output_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
