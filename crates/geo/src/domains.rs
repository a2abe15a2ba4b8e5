use crate::bounds::{BoundingBox, PS_BOUNDS, SPEED_GRID_BOUNDS};
use crate::errors::Result;
use crate::transforms::{check_coords, from_grid_box, from_unit_box, to_grid_box, to_unit_box};

use log::info;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Coordinate systems handled by [`Domains`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// Raw polar stereographic coordinates in meters
    PolarStereographic,
    /// Normalized `[0, 1]²` design space
    UnitBox,
    /// Symmetric `[-1, 1]²` grid sampling space
    GridBox,
}

/// Bounds defining the normalized coordinate systems
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domains {
    /// Polar stereographic bounds mapped to the unit box
    pub unit_bounds: BoundingBox,
    /// Polar stereographic bounds mapped to the grid box
    pub grid_bounds: BoundingBox,
}

impl Default for Domains {
    fn default() -> Self {
        Domains {
            unit_bounds: PS_BOUNDS,
            grid_bounds: SPEED_GRID_BOUNDS,
        }
    }
}

impl Domains {
    /// Converts coordinates given as a (n, 2) matrix from `from` system to `to` system.
    ///
    /// Unit box and grid box coordinates are related through
    /// polar stereographic coordinates.
    ///
    /// ```
    /// use icebo_geo::{Domain, Domains};
    /// use ndarray::array;
    ///
    /// let domains = Domains::default();
    /// let xg = domains
    ///     .convert(&array![[0.5, 0.5]], Domain::UnitBox, Domain::GridBox)
    ///     .unwrap();
    /// assert!(xg.iter().all(|v| v.abs() < 0.01));
    /// ```
    pub fn convert(
        &self,
        x: &ArrayBase<impl Data<Elem = f64>, Ix2>,
        from: Domain,
        to: Domain,
    ) -> Result<Array2<f64>> {
        check_coords(x)?;
        if from == to {
            return Ok(x.to_owned());
        }
        let ps = match from {
            Domain::PolarStereographic => x.to_owned(),
            Domain::UnitBox => from_unit_box(x, &self.unit_bounds)?,
            Domain::GridBox => from_grid_box(x, &self.grid_bounds)?,
        };
        match to {
            Domain::PolarStereographic => Ok(ps),
            Domain::UnitBox => to_unit_box(&ps, &self.unit_bounds),
            Domain::GridBox => to_grid_box(&ps, &self.grid_bounds),
        }
    }

    /// Checks all bounds are valid
    pub fn check(&self) -> Result<()> {
        self.unit_bounds.check()?;
        self.grid_bounds.check()
    }

    /// Loads domains from a json file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Domains> {
        let data = fs::read(path.as_ref())?;
        let domains: Domains = serde_json::from_slice(&data)?;
        domains.check()?;
        info!("Domains loaded from {:?}", path.as_ref());
        Ok(domains)
    }

    /// Saves domains in given json file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        info!("Domains saved in {:?}", path.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeoError;
    use crate::transforms::{ps_to_norm, ps_to_speed};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_convert_from_ps() {
        let domains = Domains::default();
        let x = array![[1_500_000., -700_000.], [2_600_000., -1_500_000.]];
        let xn = domains
            .convert(&x, Domain::PolarStereographic, Domain::UnitBox)
            .unwrap();
        assert_abs_diff_eq!(xn, ps_to_norm(&x, &PS_BOUNDS).unwrap(), epsilon = 1e-12);
        let xg = domains
            .convert(&x, Domain::PolarStereographic, Domain::GridBox)
            .unwrap();
        assert_abs_diff_eq!(
            xg,
            ps_to_speed(&x, &SPEED_GRID_BOUNDS).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_convert_unit_to_grid_and_back() {
        let domains = Domains::default();
        let xn = array![[0., 0.], [0.25, 0.75], [1., 1.]];
        let xg = domains.convert(&xn, Domain::UnitBox, Domain::GridBox).unwrap();
        // unit box y axis points north, grid box y axis points south
        assert!(xg[[0, 1]] > 0.9 && xg[[2, 1]] < -0.9);
        let back = domains.convert(&xg, Domain::GridBox, Domain::UnitBox).unwrap();
        assert_abs_diff_eq!(back, xn, epsilon = 1e-9);
    }

    #[test]
    fn test_convert_identity() {
        let domains = Domains::default();
        let x = array![[0.1, 0.2]];
        assert_eq!(
            domains.convert(&x, Domain::UnitBox, Domain::UnitBox).unwrap(),
            x
        );
        assert_eq!(
            domains.convert(&x, Domain::GridBox, Domain::GridBox).unwrap(),
            x
        );
    }

    #[test]
    fn test_convert_invalid_shape() {
        let domains = Domains::default();
        let x = array![[0.1], [0.2]];
        assert!(matches!(
            domains.convert(&x, Domain::UnitBox, Domain::UnitBox),
            Err(GeoError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_save_load() {
        let path = std::env::temp_dir().join("icebo_test_domains.json");
        let domains = Domains {
            unit_bounds: BoundingBox::new(0., 10., 0., 20.),
            grid_bounds: BoundingBox::new(-1., 11., 21., -1.),
        };
        domains.save(&path).expect("domains saved");
        let loaded = Domains::load(&path).expect("domains loaded");
        assert_eq!(loaded, domains);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_invalid_bounds() {
        let path = std::env::temp_dir().join("icebo_test_invalid_domains.json");
        let domains = Domains {
            unit_bounds: BoundingBox::new(0., 0., 0., 20.),
            grid_bounds: SPEED_GRID_BOUNDS,
        };
        domains.save(&path).expect("domains saved");
        assert!(matches!(
            Domains::load(&path),
            Err(GeoError::InvalidBounds(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
