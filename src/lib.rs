//! Nodal discontinuous Galerkin solver for the 1D shallow-water equations
//! with a Roe interface flux and explicit Euler time stepping.
pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;
pub mod solver;
pub mod temporal_disc;
