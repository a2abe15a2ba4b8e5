use crate::errors::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a planar domain in polar stereographic meters.
///
/// Bounds may be reversed (`max < min`) to flip an axis, only a zero
/// extent is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Coordinate mapped to the lower end of the x axis
    pub x_min: f64,
    /// Coordinate mapped to the upper end of the x axis
    pub x_max: f64,
    /// Coordinate mapped to the lower end of the y axis
    pub y_min: f64,
    /// Coordinate mapped to the upper end of the y axis
    pub y_max: f64,
}

/// Bounds of the polar stereographic area normalized to the unit box
pub const PS_BOUNDS: BoundingBox = BoundingBox {
    x_min: 1_300_000.,
    x_max: 2_700_000.,
    y_min: -1_600_000.,
    y_max: -200_000.,
};

/// Bounds of the speed raster mapped to the grid box.
///
/// The y bounds are swapped as grid sampling expects `y = -1` to be the top row,
/// i.e. the northernmost (largest) y coordinate.
pub const SPEED_GRID_BOUNDS: BoundingBox = BoundingBox {
    x_min: 1_298_150.,
    x_max: 2_701_700.,
    y_min: -198_350.,
    y_max: -1_601_900.,
};

impl BoundingBox {
    /// Constructor
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        BoundingBox {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Signed extent along x
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Signed extent along y
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Checks bounds are finite with a non zero extent along both axes
    pub fn check(&self) -> Result<()> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(GeoError::InvalidBounds(format!(
                "bounds should be finite, got {self:?}"
            )));
        }
        if self.width() == 0. || self.height() == 0. {
            return Err(GeoError::InvalidBounds(format!(
                "bounds should have non zero width and height, got {self:?}"
            )));
        }
        Ok(())
    }
}
