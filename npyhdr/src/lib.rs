//! # npyhdr
//!
//! Reading and writing NumPy [.npy](https://numpy.org/devdocs/reference/generated/numpy.lib.format.html)
//! headers. The codec itself lives in [npyhdr_core] and is re-exported here;
//! this crate adds the file boundary in [numpy].
//!
//! See [feature_flags] for details on feature flags.
//!
//! ```no_run
//! use npyhdr::prelude::*;
//!
//! let header = Header::for_type::<f32>([2, 3]);
//! let payload: Vec<u8> = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]
//!     .iter()
//!     .flat_map(|v| v.to_le_bytes())
//!     .collect();
//! numpy::save("weights.npy", &header, &payload).unwrap();
//!
//! let loaded = numpy::load_header("weights.npy").unwrap();
//! assert_eq!(loaded, header);
//! ```

pub mod feature_flags;
pub mod numpy;

pub use npyhdr_core::{bits, dtypes, endian, error, header, shapes, HeaderError};

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::numpy::{self, NpyError};
    #[cfg(feature = "mmap")]
    pub use crate::numpy::NpyFile;
    pub use npyhdr_core::prelude::*;
}
