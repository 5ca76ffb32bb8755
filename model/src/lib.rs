pub mod lifecycle;
pub mod scaling_group;
