//! Property-based tests for derived series.

use proptest::prelude::*;
use vqeviz_results::{Histogram, linspace, running_average};

fn energies() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, 0..200)
}

proptest! {
    #[test]
    fn running_average_is_prefix_mean(values in energies()) {
        let avg = running_average(&values);
        prop_assert_eq!(avg.len(), values.len());
        for (i, a) in avg.iter().enumerate() {
            let mean = values[..=i].iter().sum::<f64>() / (i + 1) as f64;
            prop_assert!((a - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn linspace_hits_both_endpoints(num in 2usize..500) {
        let v = linspace(0.6, -0.886786, num);
        prop_assert_eq!(v.len(), num);
        prop_assert_eq!(v[0], 0.6);
        prop_assert_eq!(v[num - 1], -0.886786);
        for pair in v.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn histogram_counts_every_sample(values in energies(), bins in 1usize..40) {
        let hist = Histogram::from_samples(&values, bins);
        prop_assert_eq!(hist.total(), values.len() as u64);
        if !values.is_empty() {
            prop_assert_eq!(hist.len(), bins);
        }
    }
}
