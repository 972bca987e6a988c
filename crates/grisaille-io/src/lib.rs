//! grisaille-io - Image decode and encode
//!
//! This crate is the file boundary of the workspace: it turns image
//! files into [`grisaille_core::GrayImage`] / [`grisaille_core::RgbImage`]
//! values and back.
//!
//! - ASCII PNM (`P1`/`P2`/`P3`) read and write ([`pnm`])
//! - PNG decode and grayscale encode ([`png`])
//! - JPEG decode ([`jpeg`])
//! - Magic-number format detection and path-level dispatch ([`format`])

mod error;
pub mod format;
pub mod jpeg;
pub mod png;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{
    DecodedImage, ImageFormat, detect_format, detect_format_from_bytes, read_image,
    write_gray_image,
};
pub use pnm::{read_pnm, write_pbm, write_pgm, write_ppm};
