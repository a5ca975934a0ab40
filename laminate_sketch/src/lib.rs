//! Converts a flat 2D drawing (an unordered set of polylines describing a
//! laminate cross-section) into a stacked layer/ply/node structure with
//! explicit vertical adjacency links, then rescales and compresses it.

#[macro_use]
mod macros;
pub mod core;
pub mod laminate;
pub mod polyline;
pub mod sketch;
