// Domain layer: simulation models and ports (interfaces). No dependencies on
// the adapters or config layers.

pub mod model;
pub mod ports;
