//! Overlapping sliding-window tiling

use crate::io::configuration::{OUTPUT_HEIGHT, OUTPUT_WIDTH, SLIDING_STRIDE};
use crate::spatial::rect::Rect;
use crate::spatial::strategy::TilingStrategy;

/// Slides a fixed-size window across an image at a fixed stride
///
/// Window origins are `(x * stride, y * stride)` for
/// `x < floor((W - tw) / stride)` and `y < floor((H - th) / stride)`, visited
/// row-major with `x` innermost. The bound is exclusive, so the last window
/// position that would touch the right or bottom edge is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowTiler {
    window_width: u32,
    window_height: u32,
    stride: u32,
}

impl Default for SlidingWindowTiler {
    fn default() -> Self {
        Self::new(OUTPUT_WIDTH, OUTPUT_HEIGHT, SLIDING_STRIDE)
    }
}

impl SlidingWindowTiler {
    /// Create a tiler with the given window size and stride
    pub const fn new(window_width: u32, window_height: u32, stride: u32) -> Self {
        Self {
            window_width,
            window_height,
            stride,
        }
    }

    /// Pixel distance between neighbouring windows
    pub const fn stride(&self) -> u32 {
        self.stride
    }

    /// Window steps `(x_steps, y_steps)` for a `width` x `height` image
    ///
    /// An image narrower or shorter than the window has zero steps on that
    /// axis rather than a negative count.
    pub const fn steps(&self, width: u32, height: u32) -> (u32, u32) {
        if self.stride == 0 {
            return (0, 0);
        }
        let x_steps = match width.checked_sub(self.window_width) {
            Some(room) => room / self.stride,
            None => 0,
        };
        let y_steps = match height.checked_sub(self.window_height) {
            Some(room) => room / self.stride,
            None => 0,
        };
        (x_steps, y_steps)
    }
}

impl TilingStrategy for SlidingWindowTiler {
    fn tile_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    fn regions(&self, width: u32, height: u32) -> impl Iterator<Item = Rect> + '_ {
        let (x_steps, y_steps) = self.steps(width, height);
        let (tw, th, stride) = (self.window_width, self.window_height, self.stride);

        (0..y_steps).flat_map(move |y| {
            (0..x_steps).map(move |x| Rect::new(x * stride, y * stride, tw, th))
        })
    }
}
