//! Square-hypothesis admission and pre-refinement for chessboard detection.
//!
//! Sits between contour tracing and sub-pixel corner optimization:
//! [`BorderTouchFilter`] rejects contours whose corner count cannot belong
//! to a chessboard square, and [`PolygonPreRefiner`] undoes the
//! erosion-induced shrinkage of the surviving quads while choosing which
//! refinement strategy runs next.

mod border_filter;
mod params;
mod prerefine;

pub use border_filter::{BorderTouchFilter, PixelContour};
pub use params::PreRefineParams;
pub use prerefine::{PolygonPreRefiner, RefinerKind};
