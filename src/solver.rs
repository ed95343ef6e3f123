use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::{
    disc::{
        mesh::mesh1d::Mesh1d,
        swe1d::{Disc1dShallowWater, ShallowWaterState},
    },
    error::{DgError, Result},
    io::write_to_csv::write_to_csv,
    temporal_disc::explicit_euler,
};

#[derive(Clone, Debug)]
pub struct MeshParameters {
    pub x_left: f64,
    pub x_right: f64,
    pub elem_num: usize,
    pub node_num: usize,
}
#[derive(Clone, Debug)]
pub struct FlowParameters {
    pub gravity: f64,
}
#[derive(Clone, Debug)]
pub struct SolverParameters {
    pub final_time: f64,
    pub step_num: usize,
    pub quadrature_point_num: usize,
    pub write_interval: usize,
    pub output_dir: PathBuf,
}
impl SolverParameters {
    pub fn time_step(&self) -> f64 {
        self.final_time / self.step_num as f64
    }
    pub fn validate(&self) -> Result<()> {
        if self.step_num == 0 {
            return Err(DgError::invalid_parameter("step_num must be positive"));
        }
        if !(self.final_time > 0.0) {
            return Err(DgError::invalid_parameter("final_time must be positive"));
        }
        if self.quadrature_point_num == 0 {
            return Err(DgError::invalid_parameter(
                "quadrature_point_num must be positive",
            ));
        }
        if self.write_interval == 0 {
            return Err(DgError::invalid_parameter("write_interval must be positive"));
        }
        Ok(())
    }
}

pub struct Solver<'a> {
    pub state: ShallowWaterState,
    pub disc: Disc1dShallowWater<'a>,
    pub current_time: f64,
    pub current_step: usize,
    mesh: &'a Mesh1d,
    solver_params: &'a SolverParameters,
}
impl<'a> Solver<'a> {
    pub fn new(
        mesh: &'a Mesh1d,
        flow_params: &'a FlowParameters,
        solver_params: &'a SolverParameters,
        state: ShallowWaterState,
    ) -> Result<Self> {
        solver_params.validate()?;
        let disc = Disc1dShallowWater::new(mesh, flow_params, solver_params.quadrature_point_num)?;
        Ok(Self {
            state,
            disc,
            current_time: 0.0,
            current_step: 0,
            mesh,
            solver_params,
        })
    }
    /// Advances one explicit Euler step. The state is only replaced once the
    /// whole step has succeeded.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        let derivs = self.disc.compute_time_derivatives(&self.state)?;
        self.state = explicit_euler(&self.state, &derivs, dt);
        self.current_time += dt;
        self.current_step += 1;
        Ok(())
    }
    pub fn solve(&mut self) -> Result<()> {
        let dt = self.solver_params.time_step();
        fs::create_dir_all(&self.solver_params.output_dir)?;
        self.write_frame()?;
        let initial_mass = self.disc.total_mass(&self.state);
        while self.current_step < self.solver_params.step_num {
            self.step(dt)?;
            let mass = self.disc.total_mass(&self.state);
            info!("step: {}, time: {:.4}", self.current_step, self.current_time);
            debug!(
                "total mass: {:.12e}, change: {:.4e}",
                mass,
                mass - initial_mass
            );
            if self.current_step % self.solver_params.write_interval == 0
                || self.current_step == self.solver_params.step_num
            {
                self.write_frame()?;
            }
        }
        Ok(())
    }
    fn write_frame(&self) -> Result<()> {
        let filename = self
            .solver_params
            .output_dir
            .join(format!("solution_{}.csv", self.current_step));
        debug!("writing {}", filename.display());
        write_to_csv(&self.state, self.mesh, filename)
    }
}
