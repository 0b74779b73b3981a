use anyhow::Result;
use rand::prelude::*;

use kbest_select::selector::KBestSelector;
use kbest_select::table::{FeatureTable, Target};

fn main() -> Result<()> {
    env_logger::init();

    // Synthetic dataset: 40 samples, 5 named features, 2 classes.
    // "signal" and "signal_scaled" track the class label, the rest are
    // noise or constant.
    let mut rng = StdRng::seed_from_u64(42);
    let n_samples = 40;

    let mut labels = Vec::with_capacity(n_samples);
    let mut noise_a = Vec::with_capacity(n_samples);
    let mut signal = Vec::with_capacity(n_samples);
    let mut constant = Vec::with_capacity(n_samples);
    let mut signal_scaled = Vec::with_capacity(n_samples);
    let mut noise_b = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let class = (i % 2) as f64;
        labels.push(class);
        noise_a.push(rng.gen_range(-1.0..1.0));
        signal.push(class * 3.0 + rng.gen_range(-0.2..0.2));
        constant.push(7.0);
        signal_scaled.push(class * -5.0 + rng.gen_range(-0.3..0.3));
        noise_b.push(rng.gen_range(0.0..2.0));
    }

    let x = FeatureTable::from_columns(vec![
        ("noise_a".to_string(), noise_a),
        ("signal".to_string(), signal),
        ("constant".to_string(), constant),
        ("signal_scaled".to_string(), signal_scaled),
        ("noise_b".to_string(), noise_b),
    ])?;
    let y = Target::from_vec(labels);

    println!("Input shape: {:?}", x.shape());

    // No score function configured: fit sees 2 distinct labels and picks
    // the classification F-test.
    let mut selector = KBestSelector::with_k(2);
    let reduced = selector.fit_transform(&x, &y)?;

    println!("Selected shape: {:?}", reduced.shape());
    println!("Selected features: {:?}", reduced.feature_names());
    if let Some(scores) = selector.scores() {
        println!("Scores: {:?}", scores);
    }

    Ok(())
}
