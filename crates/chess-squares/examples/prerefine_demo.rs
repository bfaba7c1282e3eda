//! Runs the square-candidate pipeline on a synthetic eroded square and
//! prints what each stage decides.

use std::str::FromStr;

use log::{info, LevelFilter};
use nalgebra::Point2;

use chess_squares::{
    init_with_level, sample_bilinear, BorderMode, BorderTouchFilter, Image, ImageBorder,
    PixelContour, PolygonPreRefiner, PreRefineParams,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Debug);
    init_with_level(level)?;

    // Bright 24x24 block on a dark frame, as left behind by erosion.
    let mut img = Image::new_fill(64, 64, 10.0f32);
    for y in 20..=43 {
        for x in 20..=43 {
            img.set(x, y, 200.0);
        }
    }

    let corners = [(20, 20), (43, 20), (43, 43), (20, 43)];
    let contour = PixelContour {
        points: corners.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        splits: vec![0, 1, 2, 3],
    };

    let filter = BorderTouchFilter::new(img.width(), img.height());
    let admitted = filter.accepts(&contour, false);
    info!("border filter admitted candidate: {admitted}");

    let mut quad = corners.map(|(x, y)| Point2::new(f64::from(x), f64::from(y)));
    let prerefine = PolygonPreRefiner::new(PreRefineParams::default());
    let kind = prerefine.adjust(&mut quad, true);
    info!("selected refiner: {kind:?}");
    for (i, p) in quad.iter().enumerate() {
        info!("expanded corner {i}: ({:.2}, {:.2})", p.x, p.y);
    }

    let border = ImageBorder::new(&mut img, BorderMode::Clamp);
    for (i, p) in quad.iter().enumerate() {
        let v = sample_bilinear(&border, p.x as f32, p.y as f32);
        info!("intensity at expanded corner {i}: {v:.1}");
    }

    Ok(())
}
