// Domain layer: gene set models and the ports the engine talks to.

pub mod model;
pub mod ports;
