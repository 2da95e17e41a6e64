/// Missing-data marker for gridded inputs and outputs
pub const NODATAVAL: f64 = -9999.0;

/// Sentinel BUI value that disables the buildup effect
pub const NO_BUI: f64 = -1.0;
