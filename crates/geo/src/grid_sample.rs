//! Bilinear sampling of a raster at grid box coordinates.
//!
//! A point `(x, y)` of the grid box `[-1, 1]²` addresses the raster with `x` along
//! the columns and `y` along the rows, `(-1, -1)` being the top left corner.
use crate::bounds::BoundingBox;
use crate::errors::{GeoError, Result};
use crate::transforms::{check_coords, ps_to_speed};

use log::debug;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2, Zip};
use serde::{Deserialize, Serialize};

/// Value used for points falling outside the raster
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Padding {
    /// Pixels outside the raster are 0
    #[default]
    Zeros,
    /// Points outside the raster are clamped to its border
    Border,
}

/// Bilinear interpolation of a (rows, cols) raster
#[derive(Clone, Debug)]
pub struct GridSampler {
    grid: Array2<f64>,
    align_corners: bool,
    padding: Padding,
}

impl GridSampler {
    /// Constructor given the raster, by default `align_corners` is false
    /// and padding is [`Padding::Zeros`]
    pub fn new(grid: Array2<f64>) -> Result<Self> {
        if grid.is_empty() {
            return Err(GeoError::InvalidShape(format!(
                "raster should not be empty, got {:?}",
                grid.shape()
            )));
        }
        Ok(GridSampler {
            grid,
            align_corners: false,
            padding: Padding::default(),
        })
    }

    /// When true, -1 and 1 refer to the centers of the corner pixels,
    /// otherwise they refer to the outer edges of the corner pixels.
    pub fn align_corners(mut self, align_corners: bool) -> Self {
        self.align_corners = align_corners;
        self
    }

    /// Sets the padding mode
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Raster dimensions (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.grid.dim()
    }

    /// Samples the raster at n points given as a (n, 2) matrix of grid box coordinates.
    /// Points with non finite coordinates get NaN.
    pub fn sample(&self, points: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Result<Array1<f64>> {
        check_coords(points)?;
        Ok(Zip::from(points.rows()).par_map_collect(|p| self.interpolate(p[0], p[1])))
    }

    fn unnormalize(&self, coord: f64, size: usize) -> f64 {
        let size = size as f64;
        let pos = if self.align_corners {
            (coord + 1.) / 2. * (size - 1.)
        } else {
            ((coord + 1.) * size - 1.) / 2.
        };
        match self.padding {
            Padding::Zeros => pos,
            Padding::Border => pos.clamp(0., size - 1.),
        }
    }

    fn pixel(&self, row: i64, col: i64) -> f64 {
        let (rows, cols) = self.grid.dim();
        if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
            0.
        } else {
            self.grid[[row as usize, col as usize]]
        }
    }

    fn interpolate(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return f64::NAN;
        }
        let (rows, cols) = self.grid.dim();
        let ix = self.unnormalize(x, cols);
        let iy = self.unnormalize(y, rows);
        let (x0, y0) = (ix.floor(), iy.floor());
        let (wx, wy) = (ix - x0, iy - y0);
        let (c, r) = (x0 as i64, y0 as i64);

        let mut val = 0.;
        for (dr, dc, w) in [
            (0, 0, (1. - wy) * (1. - wx)),
            (0, 1, (1. - wy) * wx),
            (1, 0, wy * (1. - wx)),
            (1, 1, wy * wx),
        ] {
            if w > 0. {
                val += w * self.pixel(r + dr, c + dc);
            }
        }
        val
    }
}

/// A speed raster covering `bounds` sampled at polar stereographic points
#[derive(Clone, Debug)]
pub struct SpeedField {
    sampler: GridSampler,
    bounds: BoundingBox,
}

impl SpeedField {
    /// Constructor given the raster sampler and the polar stereographic bounds
    /// of the raster (see [`SPEED_GRID_BOUNDS`](crate::SPEED_GRID_BOUNDS))
    pub fn new(sampler: GridSampler, bounds: BoundingBox) -> Result<Self> {
        bounds.check()?;
        Ok(SpeedField { sampler, bounds })
    }

    /// Speed values at n polar stereographic points given as a (n, 2) matrix
    pub fn at(&self, points: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Result<Array1<f64>> {
        let xg = ps_to_speed(points, &self.bounds)?;
        let speed = self.sampler.sample(&xg)?;
        debug!("Sampled speed at {} points", speed.len());
        Ok(speed)
    }
}
