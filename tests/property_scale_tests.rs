use proptest::prelude::*;
use storm_days::core::AxisScale;

fn is_nice_step(step: f64) -> bool {
    let exponent = step.log10().floor();
    let mantissa = step / 10f64.powf(exponent);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|factor| (mantissa - factor).abs() <= 1e-9 * factor)
}

proptest! {
    #[test]
    fn scale_encloses_range_with_nice_step(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0
    ) {
        let max = min + span;
        let scale = AxisScale::for_range(min, max).expect("valid scale");

        prop_assert!(is_nice_step(scale.step()));
        prop_assert!(scale.min() <= min + 1e-9 * scale.step());
        prop_assert!(scale.max() >= max - 1e-9 * scale.step());
        prop_assert!(span / scale.step() <= 5.5 + 1e-9);
    }

    #[test]
    fn zero_based_axis_has_at_most_five_divisions(max in 0.001f64..1_000_000_000.0) {
        let scale = AxisScale::for_range(0.0, max).expect("valid scale");

        prop_assert!(scale.divs().len() <= 5);
        for pair in scale.divs().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &div in scale.divs() {
            prop_assert!(div > 0.0);
            prop_assert!(div < max);
        }
    }

    #[test]
    fn count_divisions_are_step_multiples(max in 1u32..100_000) {
        let scale = AxisScale::for_range(0.0, f64::from(max)).expect("valid scale");

        prop_assert!(scale.max() >= f64::from(max));
        for &div in scale.divs() {
            let ratio = div / scale.step();
            prop_assert!((ratio - ratio.round()).abs() <= 1e-9);
        }
    }
}
