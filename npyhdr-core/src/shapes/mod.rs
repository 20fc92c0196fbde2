//! Array shapes: ordered dimension extents, element counts, row-major
//! indexing, and size-preserving reshapes.
//!
//! A [Shape] with no dimensions is a scalar and holds 1 element.
//!
//! ```rust
//! # use npyhdr_core::shapes::Shape;
//! let s = Shape::from([10, 4]);
//! assert_eq!(s.size(), 40);
//! assert_eq!(s.item_size(), 4);
//! assert_eq!(s.change(&[-1, 5]).unwrap(), Shape::from([8, 5]));
//! assert_eq!(s.to_tuple_text(false), "(10, 4)");
//! ```

mod reshape;
mod shape;

pub use shape::Shape;

/// Marks an extent or coordinate that is not given.
pub const UNSPECIFIED: isize = -1;

/// Number of coordinates accepted by [Shape::flat_index] and [Shape::item_size_at].
pub const MAX_DIMS: usize = 6;
