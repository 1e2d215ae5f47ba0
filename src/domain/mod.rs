// Domain layer: records and ports. No logic beyond variant accessors.

pub mod model;
pub mod ports;
