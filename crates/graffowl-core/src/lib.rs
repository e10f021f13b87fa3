//! Graffowl Core Types
//!
//! This crate provides the foundation the Graffowl compiler builds on:
//!
//! - **Container**: Diagram file decoding and typed record views ([`container`] module)
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Model**: The page arena of graphics with resolved references ([`model`] module)
//! - **Visitor**: Depth-first traversal of the model ([`visitor`] module)
//! - **Ontology**: The logical model the compiler emits ([`ontology`] module)

pub mod container;
pub mod geometry;
pub mod model;
pub mod ontology;
pub mod visitor;
