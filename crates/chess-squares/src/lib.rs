//! Chessboard square candidate filtering and border-safe pixel access.
//!
//! This crate re-exports the pieces of the detection pipeline that sit
//! between contour tracing and sub-pixel corner optimization:
//!
//! 1. [`BorderTouchFilter`] admits or rejects a traced contour based on its
//!    corner count and how it meets the image border.
//! 2. [`PolygonPreRefiner`] expands the admitted quad outward from its
//!    centroid to undo erosion shrinkage and selects which refinement
//!    strategy ([`RefinerKind`]) should run next.
//! 3. [`ImageBorder`] then lets that strategy sample pixel values at
//!    fractional, possibly out-of-bounds locations without bounds-checking
//!    itself.
//!
//! ## Quickstart
//!
//! ```
//! use chess_squares::{
//!     sample_bilinear, BorderMode, BorderTouchFilter, Image, ImageBorder, PixelContour,
//!     PolygonPreRefiner, PreRefineParams, RefinerKind,
//! };
//! use nalgebra::Point2;
//!
//! // Admission: a contour with exactly 4 corner splits, away from the border.
//! let filter = BorderTouchFilter::new(640, 480);
//! let contour = PixelContour {
//!     points: vec![
//!         Point2::new(100, 100),
//!         Point2::new(140, 100),
//!         Point2::new(140, 140),
//!         Point2::new(100, 140),
//!     ],
//!     splits: vec![0, 1, 2, 3],
//! };
//! assert!(filter.accepts(&contour, false));
//!
//! // Pre-refinement: undo erosion shrinkage, pick a refiner.
//! let mut quad = [
//!     Point2::new(100.0, 100.0),
//!     Point2::new(140.0, 100.0),
//!     Point2::new(140.0, 140.0),
//!     Point2::new(100.0, 140.0),
//! ];
//! let prerefine = PolygonPreRefiner::new(PreRefineParams::default());
//! assert_eq!(prerefine.adjust(&mut quad, true), RefinerKind::CornerBased);
//!
//! // Sub-pixel sampling near the adjusted corners is border-safe.
//! let mut img = Image::new_fill(640, 480, 128.0f32);
//! let border = ImageBorder::new(&mut img, BorderMode::Clamp);
//! let v = sample_bilinear(&border, quad[0].x as f32, quad[0].y as f32);
//! assert!((v - 128.0).abs() < 1e-6);
//! ```

pub use chess_squares_core::{
    quad_area, quad_centroid, sample_bilinear, sample_nearest, BorderMode, BorderPolicy,
    GrayImage, Image, ImageBorder, ImageError,
};

#[cfg(feature = "tracing")]
pub use chess_squares_core::init_tracing;

pub use chess_squares_core::init_with_level;

pub use chess_squares_polygon::{
    BorderTouchFilter, PixelContour, PolygonPreRefiner, PreRefineParams, RefinerKind,
};
