use serde::{Deserialize, Serialize};

/// Parameters for pre-optimization polygon adjustment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PreRefineParams {
    /// Outward shift applied to every vertex along its centroid ray, in
    /// pixels.
    ///
    /// The erosion step upstream shrinks detected squares inward by roughly
    /// a constant amount; this undoes that bias before sub-pixel
    /// refinement. Empirical value, tuned on eroded contours.
    pub expand_px: f64,

    /// Minimal expanded-quad area, in square pixels, for corner-based
    /// refinement.
    ///
    /// Small squares offer too few reliable edge pixels per corner, so
    /// below this area the edge-based refiner is selected instead.
    pub corner_area_threshold: f64,
}

impl Default for PreRefineParams {
    fn default() -> Self {
        Self {
            expand_px: 1.4,
            corner_area_threshold: 400.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PreRefineParams;

    #[test]
    fn serde_round_trip_keeps_defaults() {
        let params = PreRefineParams::default();
        let json = serde_json::to_string(&params).expect("serialize");
        let back: PreRefineParams = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.expand_px, 1.4);
        assert_eq!(back.corner_area_threshold, 400.0);
    }
}
