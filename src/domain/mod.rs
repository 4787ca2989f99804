// Domain layer: layout/command models and the process-runner port.

pub mod model;
pub mod ports;
