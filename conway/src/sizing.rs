// sizing.rs - Grid size from viewport pixel dimensions

use crate::error::{GridError, Result};
use crate::grid::GridSize;

pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl GridSize {
    /// Reduces the viewport to its smallest grid with the same aspect ratio,
    /// e.g. 1920x1080 becomes 16x9.
    pub fn from_viewport(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroViewport { width, height });
        }
        let divisor = gcd(width, height);
        Self::new((width / divisor) as usize, (height / divisor) as usize)
    }
}
