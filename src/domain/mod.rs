// Domain layer: ports (interfaces) to external systems.

pub mod ports;
