// Domain layer: contact form models, errors and ports. No I/O here.

pub mod error;
pub mod model;
pub mod ports;
