//! Software architecture subjects.

pub mod audit;
pub mod microservices;
