//! Fractional-coordinate sampling through a bordered image.
//!
//! Sub-pixel refiners sample intensities along and slightly beyond polygon
//! edges; routing every tap through [`ImageBorder`] keeps them total near
//! the image boundary.

use crate::border::{BorderPolicy, ImageBorder};

/// Bilinear interpolation at `(x, y)`.
///
/// The four surrounding integer pixels are read through the accessor, so
/// taps near or beyond the image border resolve via its policy.
pub fn sample_bilinear<T, P>(img: &ImageBorder<'_, T, P>, x: f32, y: f32) -> f32
where
    T: Copy + Into<f32>,
    P: BorderPolicy<T>,
{
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00: f32 = img.get(x0, y0).into();
    let p10: f32 = img.get(x0 + 1, y0).into();
    let p01: f32 = img.get(x0, y0 + 1).into();
    let p11: f32 = img.get(x0 + 1, y0 + 1).into();

    let top = p00 + fx * (p10 - p00);
    let bottom = p01 + fx * (p11 - p01);
    top + fy * (bottom - top)
}

/// Nearest-neighbour sample at `(x, y)`.
pub fn sample_nearest<T, P>(img: &ImageBorder<'_, T, P>, x: f32, y: f32) -> T
where
    T: Copy,
    P: BorderPolicy<T>,
{
    img.get(x.round() as i32, y.round() as i32)
}
