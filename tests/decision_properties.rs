//! Property tests for boundary checks, scoring and the snapshot codec.

use proptest::prelude::*;
use serde_json::json;

use life_decision::domain::analysis::{
    check_limits, explain_failure, weighted_score, BoundaryCheck,
};
use life_decision::domain::criteria::{criteria_for, Category};
use life_decision::domain::decision::{
    CriteriaValues, Decision, DecisionOption, DecisionWorkspace, Limits, OptionSide,
};
use life_decision::domain::foundation::Risk;
use life_decision::domain::snapshot::apply_snapshot;

// =============================================================================
// Strategies
// =============================================================================

fn risk() -> impl Strategy<Value = Risk> {
    prop_oneof![Just(Risk::Low), Just(Risk::Medium), Just(Risk::High)]
}

fn category_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Career".to_string()),
        Just("Personal".to_string()),
        Just("Financial".to_string()),
        Just("Relationship".to_string()),
        Just("Health".to_string()),
        Just(String::new()),
        "[A-Za-z]{1,12}",
    ]
}

/// Text that survives the trim applied on restore.
fn trimmed_text() -> impl Strategy<Value = String> {
    "([A-Za-z0-9]([A-Za-z0-9 ]{0,12}[A-Za-z0-9])?)?"
}

fn option_name() -> impl Strategy<Value = String> {
    "[A-Za-z]([A-Za-z0-9 ]{0,12}[A-Za-z0-9])?"
}

fn limits() -> impl Strategy<Value = Limits> {
    (
        0u64..1_000_000,
        0u64..200,
        risk(),
        risk(),
        risk(),
        risk(),
        any::<bool>(),
    )
        .prop_map(
            |(money, time, stress, relationships, reversibility, dependency, confirmed)| Limits {
                money_max_usd: money,
                time_hours_per_week: time,
                stress,
                relationships,
                reversibility,
                dependency,
                confirmed,
            },
        )
}

fn ratings() -> impl Strategy<Value = CriteriaValues> {
    prop::collection::btree_map("[a-z_]{1,20}", any::<i64>(), 0..8)
}

fn option() -> impl Strategy<Value = DecisionOption> {
    (
        option_name(),
        0u64..1_000_000,
        0u64..200,
        (risk(), risk(), risk(), risk()),
        trimmed_text(),
        ratings(),
    )
        .prop_map(
            |(name, money, time, (stress, relationships, reversibility, dependency), summary, criteria)| {
                DecisionOption {
                    name,
                    money_at_risk_usd: money,
                    time_required_hours_per_week: time,
                    stress_fit: stress,
                    relationships_impact: relationships,
                    reversibility,
                    dependency,
                    summary,
                    criteria,
                }
            },
        )
}

fn decision() -> impl Strategy<Value = Decision> {
    (trimmed_text(), category_name(), limits()).prop_map(|(title, category, limits)| Decision {
        title,
        category,
        limits,
    })
}

// =============================================================================
// Boundary checks
// =============================================================================

proptest! {
    #[test]
    fn each_check_matches_its_comparison(limits in limits(), option in option()) {
        let checks = check_limits(&limits, &option);

        prop_assert_eq!(
            checks.get(BoundaryCheck::Financial),
            option.money_at_risk_usd <= limits.money_max_usd
        );
        prop_assert_eq!(
            checks.get(BoundaryCheck::Time),
            option.time_required_hours_per_week <= limits.time_hours_per_week
        );
        prop_assert_eq!(
            checks.get(BoundaryCheck::Stress),
            option.stress_fit.rank() <= limits.stress.rank()
        );
        prop_assert_eq!(
            checks.get(BoundaryCheck::Relationships),
            option.relationships_impact.rank() <= limits.relationships.rank()
        );
        prop_assert_eq!(checks.passed(), checks.iter().all(|(_, ok)| ok));
    }

    #[test]
    fn first_failure_is_earliest_in_order(limits in limits(), option in option()) {
        let checks = check_limits(&limits, &option);
        let expected = BoundaryCheck::ORDER.into_iter().find(|c| !checks.get(*c));
        prop_assert_eq!(checks.first_failure(), expected);
    }

    #[test]
    fn money_is_cited_before_time(limits in limits(), option in option()) {
        prop_assume!(limits.money_max_usd < u64::MAX && limits.time_hours_per_week < u64::MAX);
        let mut option = option;
        option.money_at_risk_usd = limits.money_max_usd + 1;
        option.time_required_hours_per_week = limits.time_hours_per_week + 1;

        let checks = check_limits(&limits, &option);
        prop_assert_eq!(checks.first_failure(), Some(BoundaryCheck::Financial));

        let explanation = explain_failure(checks.first_failure(), &limits, &option);
        prop_assert!(explanation.starts_with("This risks $"));
    }
}

// =============================================================================
// Scoring
// =============================================================================

proptest! {
    #[test]
    fn score_stays_within_bounds(category in category_name(), values in ratings()) {
        let score = weighted_score(&category, &values);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn score_uses_category_keys_within_bounds(
        category in category_name(),
        raw in prop::collection::vec(any::<i64>(), 6),
    ) {
        let values: CriteriaValues = criteria_for(&category)
            .iter()
            .zip(raw)
            .map(|(c, v)| (c.key.to_string(), v))
            .collect();
        let score = weighted_score(&category, &values);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn raising_one_rating_never_lowers_the_score(
        category in category_name(),
        index in 0usize..6,
        low in -5i64..15,
        bump in 0i64..10,
    ) {
        let criteria = criteria_for(&category);
        let key = criteria[index % criteria.len()].key.to_string();

        let mut before = CriteriaValues::new();
        before.insert(key.clone(), low);
        let mut after = CriteriaValues::new();
        after.insert(key, low + bump);

        prop_assert!(weighted_score(&category, &after) >= weighted_score(&category, &before));
    }

    #[test]
    fn default_baseline_is_deterministic(category in category_name()) {
        let empty = CriteriaValues::new();
        let first = weighted_score(&category, &empty);
        prop_assert_eq!(first, weighted_score(&category, &empty));

        let resolved = Category::resolve(&category);
        prop_assert_eq!(first, weighted_score(resolved.name(), &empty));
    }
}

#[test]
fn default_baseline_is_half_for_every_category() {
    for category in Category::ALL {
        let score = weighted_score(category.name(), &CriteriaValues::new());
        assert_eq!(score, 50.0, "{category}");
    }
}

// =============================================================================
// Snapshot codec
// =============================================================================

proptest! {
    #[test]
    fn snapshot_round_trip_restores_everything(
        decision in decision(),
        option_a in option(),
        option_b in option(),
    ) {
        let original = DecisionWorkspace { decision, option_a, option_b };
        let document = original.snapshot();

        let mut restored = DecisionWorkspace::new();
        restored.restore(&document).unwrap();

        prop_assert_eq!(restored, original);
    }

    #[test]
    fn missing_options_leave_defaults(decision in decision()) {
        let mut ws = DecisionWorkspace::new();
        ws.decision = decision;
        let mut document = ws.snapshot();
        document.as_object_mut().unwrap().remove("options");

        let mut target_decision = Decision::default();
        let mut a = DecisionOption::named("stale A").with_rating("upside", 9);
        let mut b = DecisionOption::named("stale B");
        apply_snapshot(&document, &mut target_decision, &mut a, &mut b).unwrap();

        prop_assert_eq!(a, DecisionOption::named(OptionSide::A.default_name()));
        prop_assert_eq!(b, DecisionOption::named(OptionSide::B.default_name()));
        prop_assert_eq!(target_decision, ws.decision);
    }

    #[test]
    fn non_object_roots_never_mutate(value in prop_oneof![
        Just(json!(null)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(|s| json!(s)),
        Just(json!([1, 2, 3])),
    ]) {
        let mut ws = DecisionWorkspace::new();
        ws.decision.title = "Keep me".to_string();
        let before = ws.clone();

        prop_assert!(ws.restore(&value).is_err());
        prop_assert_eq!(ws, before);
    }
}
