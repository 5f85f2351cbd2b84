// Front-ends that drive a PricingEngine and draw its state.

#[cfg(feature = "cli")]
pub mod cli;
pub mod renderers;
pub mod session;
