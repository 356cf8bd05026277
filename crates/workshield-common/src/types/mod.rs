//! Core data types for the Workshield engine

pub mod claim;
pub mod fund;
pub mod identity;
pub mod policy;
