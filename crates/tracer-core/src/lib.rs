//! **tracer-core** — core types for the circuit trace router.
//!
//! This crate provides the foundational types used across the *tracer*
//! workspace: geometry primitives, the cell classification, and the
//! strictly-validated [`Board`] loader.

pub mod board;
pub mod cell;
pub mod geom;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use geom::{Point, Range};
