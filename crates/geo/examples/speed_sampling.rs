use env_logger::{Builder, Env};
use icebo_geo::{
    norm_to_ps, Domain, Domains, GridSampler, Padding, SpeedField, PS_BOUNDS, SPEED_GRID_BOUNDS,
};
use ndarray::{array, Array2};

const ICEBO_LOG: &str = "ICEBO_LOG";

// Samples a synthetic speed raster at design points given in the unit box.
fn main() {
    let env = Env::new().filter_or(ICEBO_LOG, "info");
    Builder::from_env(env).init();

    // speed grows from the ice divide (west) to the outlet glaciers (east)
    let (rows, cols) = (140, 140);
    let raster = Array2::from_shape_fn((rows, cols), |(_, c)| 10. + 5. * c as f64);
    let sampler = GridSampler::new(raster)
        .expect("raster")
        .padding(Padding::Border);
    let field = SpeedField::new(sampler, SPEED_GRID_BOUNDS).expect("speed field");

    let design = array![[0.1, 0.5], [0.5, 0.5], [0.9, 0.5]];
    let ps = norm_to_ps(&design, &PS_BOUNDS).expect("polar stereographic points");
    let speed = field.at(&ps).expect("speed values");
    println!("ps points =\n{ps}\nspeed = {speed}");

    let domains = Domains::default();
    let xg = domains
        .convert(&design, Domain::UnitBox, Domain::GridBox)
        .expect("grid box points");
    println!("grid box points =\n{xg}");
}
