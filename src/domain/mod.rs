// Domain layer: wire models and ports (interfaces) for the scheduling console.

pub mod model;
pub mod ports;
