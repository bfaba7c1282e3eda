//! Bounds-safe pixel access and quad geometry for chessboard square
//! detection.
//!
//! This crate is intentionally small. It owns the two numerically sensitive
//! seams of the detection pipeline: pixel access through a pluggable border
//! policy, so filtering and edge-sampling code never bounds-checks itself,
//! and the little quad geometry the polygon stages share. It does *not*
//! depend on any concrete shape detector or image I/O.

mod border;
mod error;
mod geom;
mod image;
mod logger;
mod sample;

pub use border::{BorderMode, BorderPolicy, ImageBorder};
pub use error::ImageError;
pub use geom::{quad_area, quad_centroid};
pub use image::{GrayImage, Image};
pub use sample::{sample_bilinear, sample_nearest};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
