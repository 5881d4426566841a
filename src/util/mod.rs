//! Utility modules

pub mod rng;
