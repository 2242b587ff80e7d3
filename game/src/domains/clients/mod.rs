mod domain;
mod queue;
mod update;

pub use domain::*;
