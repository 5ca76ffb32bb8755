//! Drains an instance that an auto scaling group is terminating from the
//! classic load balancers and target groups attached to the group, then lets
//! the termination continue by completing the lifecycle action.
//!
//! The same [`drain::drain_instance`] flow backs both entry points: the Lambda
//! handler fed by lifecycle hook events and the command line.

pub mod cli;
pub mod config;
pub mod drain;
pub mod dtos;
pub mod invocation_mode;
pub mod lambda_structure;
pub mod logging;
pub mod result;
