// Domain layer: output model and the config port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
