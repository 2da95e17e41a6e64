pub mod config;
pub mod constants;
pub mod fuels;
pub mod functions;
pub mod models;
