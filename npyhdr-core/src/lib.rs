//! # npyhdr-core
//!
//! Byte-exact encoding and parsing of the header that starts every NumPy
//! [.npy](https://numpy.org/devdocs/reference/generated/numpy.lib.format.html)
//! file, plus the small pieces of metadata handling that go with it.
//!
//! # Headers
//!
//! *See [header] for more information.*
//!
//! A [header::Header] is a dtype ([dtypes]) and a shape ([shapes]):
//!
//! ```rust
//! # use npyhdr_core::prelude::*;
//! let header = Header::new("<f8".parse().unwrap(), [10, 4]);
//! let bytes = header.encode().unwrap();
//! assert_eq!(bytes.len(), 128);
//! assert_eq!(bytes[8], 0x76);
//!
//! let decoded = Header::decode(&bytes).unwrap();
//! assert_eq!(decoded.shape.dims(), &[10, 4]);
//! assert_eq!(decoded.kind(), ElementKind::Float);
//! ```
//!
//! The dtype can also come from a rust type via [dtypes::NumpyDtype]:
//!
//! ```rust
//! # use npyhdr_core::prelude::*;
//! let header = Header::for_type::<u16>([3]);
//! assert_eq!(header.byte_width(), 2);
//! assert_eq!(header.payload_len(), 6);
//! ```
//!
//! # Shapes
//!
//! *See [shapes] for more information.*
//!
//! | operation | npyhdr | numpy |
//! | --- | --- | --- |
//! | element count | [`Shape::size`](shapes::Shape::size) | `a.size` |
//! | row size | [`Shape::item_size`](shapes::Shape::item_size) | `a[0].size` |
//! | reshape | [`Shape::change`](shapes::Shape::change) | `a.reshape(shape)` |
//! | strides | [`Shape::strides`](shapes::Shape::strides) | `a.strides` / itemsize |
//!
//! # Errors
//!
//! Everything fallible returns [error::HeaderError]. Malformed input never panics.
//!
//! # Logging
//!
//! Encoding and decoding emit [tracing] events at `debug` level, and a
//! printable dump of each decoded header at `trace` level. No subscriber is
//! installed by this crate.

pub mod bits;
pub mod dtypes;
pub mod endian;
pub mod error;
pub mod header;
pub mod shapes;

pub use error::HeaderError;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::bits::BitView;
    pub use crate::dtypes::{DtypeDescriptor, ElementKind, NumpyDtype};
    pub use crate::endian::Endian;
    pub use crate::error::HeaderError;
    pub use crate::header::{Header, HeaderOptions, Padding};
    pub use crate::shapes::{Shape, UNSPECIFIED};
}
