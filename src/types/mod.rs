//! Shared data types

pub mod assistant;
