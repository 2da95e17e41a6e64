pub mod fbp;
pub mod functions;
pub mod fwi;
