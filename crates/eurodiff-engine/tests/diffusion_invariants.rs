//! Properties that hold on every simulated day.

use eurodiff_core::{CountryDescriptor, INITIAL_COINS};
use eurodiff_engine::{CompletionRecord, Diffuser};
use eurodiff_test_utils::{seeded_and_linked, total_coins};
use proptest::prelude::*;

/// Side-by-side rectangles, all touching row 0, so the map is connected.
fn strips() -> impl Strategy<Value = Vec<CountryDescriptor>> {
    prop::collection::vec((1i32..=2, 1i32..=3), 1..=4).prop_map(|dims| {
        let mut x = 0;
        dims.into_iter()
            .enumerate()
            .map(|(i, (w, h))| {
                let d = CountryDescriptor::new(format!("C{i}"), x, 0, x + w - 1, h - 1);
                x += w;
                d
            })
            .collect()
    })
}

fn sorted(records: &[CompletionRecord]) -> bool {
    records
        .windows(2)
        .all(|w| (w[0].day, &w[0].name) <= (w[1].day, &w[1].name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn coins_are_conserved(descriptors in strips(), days in 1usize..40) {
        let countries = seeded_and_linked(&descriptors);
        let expected: Vec<i64> = countries
            .iter()
            .map(|c| INITIAL_COINS * c.city_count() as i64)
            .collect();
        let mut diffuser = Diffuser::new(countries);
        for _ in 0..days {
            diffuser.step().unwrap();
            for (motif, &total) in expected.iter().enumerate() {
                prop_assert_eq!(total_coins(diffuser.countries(), motif), total);
            }
        }
    }

    #[test]
    fn completion_is_permanent_and_sorted(descriptors in strips()) {
        let mut diffuser = Diffuser::new(seeded_and_linked(&descriptors));
        let mut seen: Vec<CompletionRecord> = diffuser.records();
        let mut guard = 0;
        while !diffuser.is_done() {
            diffuser.step().unwrap();
            let now = diffuser.records();
            prop_assert!(sorted(&now));
            for old in &seen {
                prop_assert!(now.contains(old));
            }
            for new in now.iter().filter(|r| !seen.contains(r)) {
                prop_assert_eq!(new.day, diffuser.day());
                prop_assert!(diffuser.countries()[new.country.index()].is_complete());
            }
            seen = now;
            guard += 1;
            prop_assert!(guard < 10_000);
        }
        prop_assert_eq!(seen.len(), descriptors.len());
    }
}
