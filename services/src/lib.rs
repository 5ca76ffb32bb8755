pub mod auto_scaling;
pub mod errors;
pub mod load_balancing;
