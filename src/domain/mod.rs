// Domain layer: core models, ports (interfaces) and pure services.
// No I/O happens here; adapters hand in validated values.

pub mod model;
pub mod ports;
pub mod services;
