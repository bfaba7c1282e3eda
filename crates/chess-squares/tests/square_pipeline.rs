use approx::assert_relative_eq;
use chess_squares::{
    sample_bilinear, BorderMode, BorderTouchFilter, Image, ImageBorder, PixelContour,
    PolygonPreRefiner, PreRefineParams, RefinerKind,
};
use nalgebra::Point2;

const BG: f32 = 10.0;
const FG: f32 = 200.0;

/// 64x64 background with a bright block covering (20, 20)..=(43, 43), the
/// kind of blob an eroded chessboard square leaves behind.
fn synthetic_square_image() -> Image<f32> {
    let mut img = Image::new_fill(64, 64, BG);
    for y in 20..=43 {
        for x in 20..=43 {
            img.set(x, y, FG);
        }
    }
    img
}

fn block_corners() -> [(i32, i32); 4] {
    [(20, 20), (43, 20), (43, 43), (20, 43)]
}

#[test]
fn interior_square_flows_through_the_pipeline() {
    let filter = BorderTouchFilter::new(64, 64);
    let corners = block_corners();

    let contour = PixelContour {
        points: corners.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        splits: vec![0, 1, 2, 3],
    };
    assert!(filter.accepts(&contour, false));

    let mut quad = corners.map(|(x, y)| Point2::new(f64::from(x), f64::from(y)));
    let prerefine = PolygonPreRefiner::new(PreRefineParams::default());
    assert_eq!(prerefine.adjust(&mut quad, true), RefinerKind::CornerBased);

    // Every vertex moved outward: the quad's bounding box grew.
    assert!(quad[0].x < 20.0 && quad[0].y < 20.0);
    assert!(quad[2].x > 43.0 && quad[2].y > 43.0);

    // The expanded corners sit just outside the eroded block, so sampling
    // there sees mostly background, while the block interior stays bright.
    let mut img = synthetic_square_image();
    let border = ImageBorder::new(&mut img, BorderMode::Constant(0.0));

    let corner = sample_bilinear(&border, quad[0].x as f32, quad[0].y as f32);
    assert!(corner > 0.0 && corner < FG);

    let center = sample_bilinear(&border, 31.5, 31.5);
    assert_relative_eq!(center, FG);

    // Taps fully outside the image resolve through the policy.
    assert_relative_eq!(sample_bilinear(&border, -20.0, -20.0), 0.0);
}

#[test]
fn clipped_square_is_admitted_and_edge_refined() {
    let filter = BorderTouchFilter::new(64, 64);

    // A square cut by the left edge: two interior corners, three on the
    // border.
    let contour = PixelContour {
        points: vec![
            Point2::new(0, 10),
            Point2::new(25, 12),
            Point2::new(27, 38),
            Point2::new(0, 40),
            Point2::new(0, 25),
        ],
        splits: vec![0, 1, 2, 3, 4],
    };
    assert!(filter.accepts(&contour, true));

    // No corner refiner configured for clipped candidates.
    let mut quad = [
        Point2::new(0.0, 10.0),
        Point2::new(25.0, 12.0),
        Point2::new(27.0, 38.0),
        Point2::new(0.0, 40.0),
    ];
    let prerefine = PolygonPreRefiner::new(PreRefineParams::default());
    assert_eq!(prerefine.adjust(&mut quad, false), RefinerKind::EdgeBased);
}

#[test]
fn resolution_change_rebinds_filter_shape() {
    let mut filter = BorderTouchFilter::new(64, 64);
    let contour = PixelContour {
        points: vec![
            Point2::new(63, 10),
            Point2::new(63, 30),
            Point2::new(40, 15),
            Point2::new(40, 25),
            Point2::new(50, 20),
        ],
        splits: vec![0, 1, 2, 3, 4],
    };

    // On a 64-wide image, two corners lie on x = 63 and three are interior.
    assert!(filter.accepts(&contour, true));

    // After switching to a larger frame the same corners are all interior.
    filter.set_image_shape(128, 128);
    assert!(!filter.accepts(&contour, true));
}
