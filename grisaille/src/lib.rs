//! Grisaille - Grayscale image processing in Rust
//!
//! A small collection of classic image-processing building blocks
//! centered on the Nagao-Matsuyama edge-preserving smoothing filter.
//!
//! # Overview
//!
//! - Grayscale and RGB containers with clipped arithmetic, histograms,
//!   bit-depth reduction, binarization, and mirrored border padding
//! - ASCII PNM (P1/P2/P3) read/write, PNG and JPEG decode, PNG encode
//! - The Nagao-Matsuyama filter: per-pixel selection of the flattest of
//!   nine candidate neighborhoods, evaluated in parallel over rows
//!
//! # Example
//!
//! ```
//! use grisaille::GrayImage;
//! use grisaille::filter::nagao;
//!
//! // A flat field is a fixed point of the smoothing filter.
//! let img = GrayImage::from_vec(8, 8, 255, vec![42; 64]).unwrap();
//! let smoothed = nagao(&img).unwrap();
//! assert_eq!(smoothed.data(), img.data());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use grisaille_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use grisaille_filter as filter;
pub use grisaille_io as io;
