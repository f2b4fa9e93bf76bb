//! # tasklet-core
//!
//! Core types, ID generation, and error types for Tasklet.
//!
//! This crate provides the foundational types shared across all Tasklet crates:
//! - The `Task` entity and its persisted record shape
//! - View selectors (`Filter`) and the persisted `Theme` preference
//! - Monotonic task ID generation
//! - Cross-cutting error types
//! - Snapshot and count types read by the rendering layer

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
