use itemwage_core::WageModel;
use proptest::prelude::*;

// Constants small enough that the formula never saturates
fn arb_model() -> impl Strategy<Value = WageModel> {
    (0i64..1_000_000, 0i64..100_000).prop_map(|(base, inc)| WageModel::new(base, inc))
}

proptest! {
    /// Property: non-negative experience follows the linear formula
    #[test]
    fn prop_linear_for_non_negative(model in arb_model(), years in 0i64..1_000_000) {
        prop_assert_eq!(
            model.predict(years),
            model.base_salary() + years * model.increment()
        );
    }

    /// Property: negative experience yields the base salary
    #[test]
    fn prop_negative_is_base(model in arb_model(), years in i64::MIN..0) {
        prop_assert_eq!(model.predict(years), model.base_salary());
    }

    /// Property: prediction is monotonic in experience
    #[test]
    fn prop_monotonic(model in arb_model(), a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(model.predict(lo) <= model.predict(hi));
    }
}
