//! Pre-optimization adjustment of square hypotheses.

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use chess_squares_core::{quad_area, quad_centroid};

use crate::params::PreRefineParams;

/// Which sub-pixel refinement strategy should run on a quad.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinerKind {
    /// Fit lines to edge pixels and intersect them.
    EdgeBased,
    /// Optimize the corner positions directly.
    CornerBased,
}

/// Expands square hypotheses before sub-pixel optimization and picks the
/// refinement strategy to run on them.
///
/// Erosion prior to contour tracing shrinks every detected square inward;
/// moving each vertex a fixed distance outward along its centroid ray
/// approximately undoes the bias, preventing systematic underestimation of
/// square size downstream.
#[derive(Clone, Debug, Default)]
pub struct PolygonPreRefiner {
    params: PreRefineParams,
}

impl PolygonPreRefiner {
    pub fn new(params: PreRefineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PreRefineParams {
        &self.params
    }

    /// Expand `quad` outward from its centroid and select a refiner.
    ///
    /// Every vertex at a non-zero distance from the centroid moves by
    /// `expand_px` along the centroid-to-vertex direction; a vertex exactly
    /// on the centroid stays where it is. The quad is mutated in place.
    ///
    /// Returns [`RefinerKind::CornerBased`] when a corner refiner is
    /// available (`has_corner_refiner`) and the expanded quad covers at
    /// least `corner_area_threshold` square pixels, otherwise
    /// [`RefinerKind::EdgeBased`].
    pub fn adjust(&self, quad: &mut [Point2<f64>; 4], has_corner_refiner: bool) -> RefinerKind {
        let center = quad_centroid(quad);

        for p in quad.iter_mut() {
            let d = *p - center;
            let r = d.norm();
            // The centroid can coincide exactly with a vertex on degenerate
            // contours; such a vertex stays put.
            if r > 0.0 {
                *p += d * (self.params.expand_px / r);
            }
        }

        let selected = if has_corner_refiner {
            let area = quad_area(quad);
            if area >= self.params.corner_area_threshold {
                RefinerKind::CornerBased
            } else {
                RefinerKind::EdgeBased
            }
        } else {
            RefinerKind::EdgeBased
        };

        debug!("pre-refine selected {selected:?}");
        selected
    }
}
