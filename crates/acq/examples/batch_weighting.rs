use env_logger::{Builder, Env};
use icebo_acq::{BatchCriterion, DistanceWeighted, FnSurrogate, MeanBatch, EI, ICEBO_LOG};
use ndarray::array;

// Compares the distance weighted EI against the plain batch mean of EI
// on a batch with two nearly coincident candidates.
fn main() {
    let env = Env::new().filter_or(ICEBO_LOG, "debug");
    Builder::from_env(env).init();

    // A 1D surrogate of xsinx on [0, 25] roughly around its minimum
    let model = FnSurrogate::new(
        |x: &[f64]| (x[0] - 3.5) * ((x[0] - 3.5) / std::f64::consts::PI).sin(),
        |x: &[f64]| 0.5 + 0.1 * (x[0] - 18.9).abs(),
    );
    let fmin = -14.;

    let weighted = DistanceWeighted::new(Box::new(EI)).with_lengthscale(1.0);
    let mean = MeanBatch::new(Box::new(EI));

    for batch in [
        array![[18.0], [18.1], [22.0]],
        array![[15.0], [18.5], [22.0]],
    ] {
        let w = weighted.weights(&batch).expect("weights");
        let dw = weighted
            .value(&batch.view(), &model, fmin)
            .expect("weighted value");
        let m = mean.value(&batch.view(), &model, fmin).expect("mean value");
        println!("batch = {batch}\nweights = {w}\nweighted EI = {dw:.6}, mean EI = {m:.6}\n");
    }
}
