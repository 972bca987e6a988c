//! grisaille-filter - Edge-preserving smoothing
//!
//! This crate provides the Nagao-Matsuyama filter: noise reduction that
//! adapts the averaging neighborhood to local image structure instead of
//! blurring across intensity edges.
//!
//! - [`nagao`] / [`nagao_with_progress`] - the filter itself
//! - [`template`] - the fixed candidate-region geometry it evaluates
//!
//! The filter is a pure function over [`grisaille_core::GrayImage`]
//! values; decoding and encoding live in grisaille-io.

mod error;
pub mod nagao;
pub mod template;

pub use error::{FilterError, FilterResult};
pub use nagao::{nagao, nagao_with_progress};
pub use template::{NAGAO_TEMPLATES, PAD_RADIUS, RegionTemplate};
