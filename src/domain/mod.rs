// Domain layer: wire models and ports. No vendor specifics beyond the shapes
// the envelope promises.

pub mod model;
pub mod ports;
