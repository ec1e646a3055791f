//! Domain model for the shapes album
//!
//! This module provides the entities that scripts manipulate:
//! - [`color`]: RGB color with channel validation
//! - [`shape`]: Named rectangles and ovals ([`shape::Shape`])
//! - [`scene`]: The live scene store with unique names and insertion order
//! - [`album`]: Scene plus snapshot archive, and a lock-guarded shared handle
//! - [`errors`]: The [`errors::AlbumError`] taxonomy
//!
//! # Validation
//!
//! Every mutating operation validates its input before writing anything, so
//! an `Err` always means the target is exactly as it was before the call.

pub mod album;
pub mod color;
pub mod errors;
pub mod scene;
pub mod shape;
