//! Admission filtering of traced contours against the image border.

use nalgebra::Point2;

/// Traced boundary of a square candidate.
///
/// `splits` holds indices into `points` marking the detected polygon
/// corners. The contour is produced by an external tracer and is read-only
/// here; well-formedness of the split indices is the producer's job.
#[derive(Clone, Debug, Default)]
pub struct PixelContour {
    pub points: Vec<Point2<i32>>,
    pub splits: Vec<usize>,
}

/// Decides whether a contour's corner count is consistent with a chessboard
/// square, given whether the contour touches the image border.
#[derive(Clone, Copy, Debug)]
pub struct BorderTouchFilter {
    width: usize,
    height: usize,
}

impl BorderTouchFilter {
    /// Filter for an image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Update the image size when the detector is reused across
    /// resolutions.
    pub fn set_image_shape(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Whether the contour can be a valid square.
    ///
    /// A square fully inside the image must present exactly 4 corners. A
    /// square cut by the border may present up to 7 corners (8 would mean
    /// every side lies on the border) and at most 3 corners strictly inside
    /// the image, the most a partially visible square can have.
    pub fn accepts(&self, contour: &PixelContour, touches_border: bool) -> bool {
        if !touches_border {
            return contour.splits.len() == 4;
        }

        if contour.splits.len() > 7 {
            return false;
        }

        let interior = contour
            .splits
            .iter()
            .filter_map(|&idx| contour.points.get(idx))
            .filter(|&p| !self.on_border(p))
            .count();
        interior <= 3
    }

    fn on_border(&self, p: &Point2<i32>) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.width as i32 - 1 || p.y == self.height as i32 - 1
    }
}
