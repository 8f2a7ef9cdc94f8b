// Domain layer: shell state and the ports it talks through. No host-specific code here.

pub mod model;
pub mod ports;
