// Domain layer: catalog, selection and pricing value types plus the ports the
// engine and front-ends meet at.

pub mod catalog;
pub mod model;
pub mod ports;
pub mod selection;
