//! Quad geometry helpers shared by the polygon processing stages.

use nalgebra::Point2;

/// Arithmetic mean of the four vertices.
pub fn quad_centroid(quad: &[Point2<f64>; 4]) -> Point2<f64> {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in quad {
        cx += p.x;
        cy += p.y;
    }
    Point2::new(cx / 4.0, cy / 4.0)
}

/// Unsigned area of a simple (non-self-intersecting) quad, shoelace formula.
pub fn quad_area(quad: &[Point2<f64>; 4]) -> f64 {
    let mut twice = 0.0;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        twice += a.x * b.y - b.x * a.y;
    }
    0.5 * twice.abs()
}

#[cfg(test)]
mod tests {
    use super::{quad_area, quad_centroid};
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    #[test]
    fn centroid_and_area_of_axis_aligned_square() {
        let quad = [
            Point2::new(2.0, 3.0),
            Point2::new(6.0, 3.0),
            Point2::new(6.0, 7.0),
            Point2::new(2.0, 7.0),
        ];

        let c = quad_centroid(&quad);
        assert_relative_eq!(c.x, 4.0);
        assert_relative_eq!(c.y, 5.0);
        assert_relative_eq!(quad_area(&quad), 16.0);
    }

    #[test]
    fn area_is_orientation_independent() {
        // Same square, clockwise vertex order.
        let quad = [
            Point2::new(2.0, 7.0),
            Point2::new(6.0, 7.0),
            Point2::new(6.0, 3.0),
            Point2::new(2.0, 3.0),
        ];
        assert_relative_eq!(quad_area(&quad), 16.0);
    }

    #[test]
    fn degenerate_quad_has_zero_area() {
        let p = Point2::new(1.5, -2.0);
        assert_relative_eq!(quad_area(&[p, p, p, p]), 0.0);
    }
}
