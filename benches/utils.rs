#![allow(dead_code)]
use id3tree::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random categorical table whose target depends on the first two attributes,
/// `n_features` must be at least 2.
pub(crate) fn create_data(n_samples: usize, n_features: usize, n_levels: usize) -> (Table, Vec<String>) {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    let attributes: Vec<String> = (0..n_features).map(|j| format!("f{}", j)).collect();
    let mut columns = attributes.clone();
    columns.push("target".to_string());
    let mut table = Table::new(columns);

    for _ in 0..n_samples {
        let levels: Vec<usize> = (0..n_features).map(|_| rng.gen_range(0..n_levels)).collect();
        // label noise on one row in ten
        let signal = (levels[0] + levels[1]) % 2 == 0;
        let label = if rng.gen_bool(0.1) { !signal } else { signal };

        let mut values: Vec<String> = levels.iter().map(|l| format!("v{}", l)).collect();
        values.push(label.to_string());
        table.push(values).unwrap();
    }
    (table, attributes)
}
