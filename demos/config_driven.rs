use anyhow::Result;

use kbest_select::config::{ScoreFuncKind, SelectorConfig};
use kbest_select::table::{FeatureTable, Target};

fn main() -> Result<()> {
    env_logger::init();

    // Word-count style features: non-negative, so chi2 applies.
    let x = FeatureTable::from_rows(
        &[
            vec![3.0, 0.0, 1.0],
            vec![4.0, 0.0, 1.0],
            vec![2.0, 1.0, 1.0],
            vec![0.0, 5.0, 1.0],
            vec![1.0, 4.0, 1.0],
            vec![0.0, 6.0, 1.0],
        ],
        vec![
            "word_alpha".to_string(),
            "word_beta".to_string(),
            "word_stop".to_string(),
        ],
    )?;
    let y = Target::from_vec(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

    let kind: ScoreFuncKind = "chi2".parse().map_err(anyhow::Error::msg)?;
    let config = SelectorConfig::new(2, Some(kind));
    println!("Config: {:?}", config);

    let mut selector = config.build();
    let reduced = selector.fit_transform(&x, &y)?;

    println!("Kept columns: {:?}", reduced.feature_names());
    if let Some(pvalues) = selector.pvalues() {
        println!("P-values: {:?}", pvalues);
    }

    Ok(())
}
