//! Grisaille Core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the Grisaille image-processing exercises:
//!
//! - [`GrayImage`] - Dense 8-bit grayscale grid with an explicit
//!   intensity range, plus the operations the exercises build on:
//!   mirrored border padding, clipped arithmetic, histograms, bit-depth
//!   reduction, and binarization
//! - [`RgbImage`] - Interleaved 8-bit color grid with grayscale
//!   conversion and per-channel histograms
//! - [`Error`] / [`Result`] - The shared error type

pub mod error;
pub mod gray;
pub mod rgb;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use rgb::{ColorHistogram, RgbImage};
