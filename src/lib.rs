//! Folio - portfolio presenter
//!
//! Configuration and the window, simulation and render systems behind the
//! `folio` binary.

pub mod config;
pub mod input;
pub mod systems;
