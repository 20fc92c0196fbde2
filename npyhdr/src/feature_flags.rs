//! Information about the available feature flags
//!
//! # "mmap"
//!
//! **Enabled by default**
//!
//! Enables [NpyFile](crate::numpy::NpyFile), which memory-maps a `.npy` file
//! with `memmap2` and hands out its payload as a byte slice without copying.
//!
//! Disable it if you only need the header codec and the reader/writer functions:
//! ```toml
//! npyhdr = { version = "...", default-features = false }
//! ```
