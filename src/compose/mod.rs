//! Tileset composition
//!
//! This module contains the image-side functionality:
//! - Layout loading and shape validation
//! - Template strip validation and quadrant addressing
//! - Band-wise composition of the output canvas

/// Canvas composition from layout and template
pub mod compositor;
/// Adjacency code grids loaded from JSON
pub mod layout;
/// Five-pattern template strips
pub mod template;

pub use compositor::{Compositor, Strategy, compose};
pub use layout::Layout;
pub use template::Template;
