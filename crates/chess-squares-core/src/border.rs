//! Out-of-bounds pixel handling.
//!
//! [`ImageBorder`] wraps an [`Image`] together with a [`BorderPolicy`] and
//! answers reads and writes for any integer coordinate. In-bounds access
//! goes straight to the image; everything else is delegated to the policy.

use crate::image::Image;

/// Pluggable strategy producing pixel values for out-of-bounds coordinates.
///
/// Implementations must return a defined value for every `i32` coordinate
/// pair. `set_outside` is invoked for *every* write through an
/// [`ImageBorder`], in-bounds or not, so a policy that caches extrapolated
/// samples observes the same sequence of writes as the image and stays
/// consistent with it. Stateless policies keep the default no-op.
pub trait BorderPolicy<T> {
    /// Extrapolated value for the out-of-bounds coordinate `(x, y)`.
    fn get_outside(&self, image: &Image<T>, x: i32, y: i32) -> T;

    /// Observe a write at `(x, y)`.
    fn set_outside(&mut self, x: i32, y: i32, value: T) {
        let _ = (x, y, value);
    }
}

/// Stock border policies.
///
/// `Clamp` and `Reflect101` read back into the image and therefore require a
/// non-empty one; extrapolating from an empty image panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode<T> {
    /// Every outside coordinate reads as the given value.
    Constant(T),
    /// The nearest edge pixel is replicated outward.
    Clamp,
    /// Reflection without repeating the edge pixel (OpenCV's
    /// `BORDER_REFLECT_101`).
    Reflect101,
}

impl<T: Copy> BorderPolicy<T> for BorderMode<T> {
    fn get_outside(&self, image: &Image<T>, x: i32, y: i32) -> T {
        match *self {
            BorderMode::Constant(v) => v,
            BorderMode::Clamp => {
                let xi = clamp_index(x, image.width());
                let yi = clamp_index(y, image.height());
                image.get(xi, yi)
            }
            BorderMode::Reflect101 => {
                let xi = reflect_index(x, image.width());
                let yi = reflect_index(y, image.height());
                image.get(xi, yi)
            }
        }
    }
}

fn clamp_index(i: i32, len: usize) -> usize {
    assert!(len > 0, "cannot extrapolate from an empty image");
    if i < 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

/// Reflect `i` into `[0, len)` without repeating the edge sample.
///
/// Periodic with period `2 * len - 2`, so arbitrarily large offsets stay
/// defined.
fn reflect_index(i: i32, len: usize) -> usize {
    assert!(len > 0, "cannot extrapolate from an empty image");
    if len == 1 {
        return 0;
    }
    let period = (2 * len - 2) as i64;
    let r = (i as i64).rem_euclid(period) as usize;
    if r < len {
        r
    } else {
        2 * len - 2 - r
    }
}

/// Bounds-safe pixel accessor over a borrowed image.
///
/// The accessor holds a mutable borrow of the image for its whole lifetime,
/// so the image cannot be resized or dropped while bound. It may also be
/// created [`unbound`](ImageBorder::unbound) and attached to an image later;
/// reading or writing through an unbound accessor is a caller bug and
/// panics.
#[derive(Debug)]
pub struct ImageBorder<'a, T, P = BorderMode<T>> {
    image: Option<&'a mut Image<T>>,
    policy: P,
}

impl<'a, T: Copy, P: BorderPolicy<T>> ImageBorder<'a, T, P> {
    /// Wrap `image` with the given border policy.
    pub fn new(image: &'a mut Image<T>, policy: P) -> Self {
        Self {
            image: Some(image),
            policy,
        }
    }

    /// Create an accessor with a policy but no image yet.
    pub fn unbound(policy: P) -> Self {
        Self {
            image: None,
            policy,
        }
    }

    /// Attach (or replace) the wrapped image.
    pub fn bind(&mut self, image: &'a mut Image<T>) {
        self.image = Some(image);
    }

    pub fn is_bound(&self) -> bool {
        self.image.is_some()
    }

    /// The wrapped image.
    ///
    /// # Panics
    /// Panics if the accessor is unbound.
    pub fn image(&self) -> &Image<T> {
        match self.image.as_deref() {
            Some(image) => image,
            None => panic!("pixel access through an unbound ImageBorder"),
        }
    }

    pub fn width(&self) -> usize {
        self.image().width()
    }

    pub fn height(&self) -> usize {
        self.image().height()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Sample `(x, y)`: the stored pixel when in bounds, otherwise the
    /// policy's extrapolation.
    ///
    /// # Panics
    /// Panics if the accessor is unbound.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        let image = self.image();
        if image.in_bounds(x, y) {
            image.get(x as usize, y as usize)
        } else {
            self.policy.get_outside(image, x, y)
        }
    }

    /// Write `value` at `(x, y)`.
    ///
    /// In-bounds coordinates write through to the image. The policy is
    /// notified of every write, including the in-bounds ones; an
    /// out-of-bounds write never reaches the image buffer, but a stateful
    /// policy may remember it.
    ///
    /// # Panics
    /// Panics if the accessor is unbound.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let image = match self.image.as_deref_mut() {
            Some(image) => image,
            None => panic!("pixel access through an unbound ImageBorder"),
        };
        if image.in_bounds(x, y) {
            image.set(x as usize, y as usize, value);
        }
        self.policy.set_outside(x, y, value);
    }
}
