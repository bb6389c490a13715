// Domain layer: value types and ports. Concrete console I/O lives in adapters.

pub mod model;
pub mod ports;
