//! Shared schema types for scene bundle exports.
//!
//! # Design constraints
//! - These shapes are owned by the host application, not by scenefix; the host
//!   may add fields at any time.
//! - Be tolerant: unknown fields are carried through, optional fields may be
//!   absent, and nothing here assumes a bundle validates.

pub mod bundle;
pub mod transform;
