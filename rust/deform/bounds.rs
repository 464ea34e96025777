//! Axis-aligned bounds and patch-space normalization

/// Axis-aligned bounding box of a vertex set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    /// Bounds of `positions`, or None for an empty set.
    pub fn from_positions(positions: &[[f64; 3]]) -> Option<Self> {
        let (first, rest) = positions.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(p[axis]);
                bounds.max[axis] = bounds.max[axis].max(p[axis]);
            }
        }
        Some(bounds)
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Extent along X (width) and Z (depth).
    pub fn width_depth(&self) -> (f64, f64) {
        (self.max[0] - self.min[0], self.max[2] - self.min[2])
    }

    /// Map a world position to ocean patch coordinates.
    ///
    /// `((x - cx) / width) * patch_size`, same for z with depth. The box
    /// spans one patch, centered on the origin. A flat axis maps to 0.
    #[inline]
    pub fn patch_coords(&self, pos: [f64; 3], patch_size: f64) -> [f64; 2] {
        let center = self.center();
        let (width, depth) = self.width_depth();
        [
            normalize(pos[0], center[0], width) * patch_size,
            normalize(pos[2], center[2], depth) * patch_size,
        ]
    }
}

#[inline]
fn normalize(value: f64, center: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (value - center) / extent
    } else {
        0.0
    }
}
