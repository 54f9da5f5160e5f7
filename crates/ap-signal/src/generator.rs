//! Random signal placement.

use ap_core::{BoundingBox, GeoPoint, SimRng};

/// Scatters points uniformly over a fixed rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateGenerator {
    bounds: BoundingBox,
}

impl CoordinateGenerator {
    pub fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[inline]
    pub fn generate(&self, rng: &mut SimRng) -> GeoPoint {
        self.bounds.sample(rng)
    }
}

impl Default for CoordinateGenerator {
    fn default() -> Self {
        Self::new(BoundingBox::pune())
    }
}
