use calm_map_be::ratings::{
    DEFAULT_SCORE_THRESHOLD, Dimension, RatingAggregate, RatingError, RatingEvent,
    combine_average, resolve_dimensions, retain_above,
};

fn aggregate_with(values: &[(Dimension, i64)]) -> RatingAggregate {
    let mut agg = RatingAggregate::empty(1);
    let mut event = RatingEvent::new();
    for (dim, val) in values {
        event.rate(*dim, *val, None).expect("valid rating");
    }
    agg.apply(&event);
    agg
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolve_canonical_names() {
    let dims = resolve_dimensions(&names(&["appearance", "calmness"])).unwrap();
    assert_eq!(dims, vec![Dimension::Appearance, Dimension::Calmness]);
}

#[test]
fn test_resolve_accepts_aliases() {
    // Canonical and separator-free forms resolve identically
    let canonical =
        resolve_dimensions(&names(&["staff_attitude", "people_density", "self_service"])).unwrap();
    let aliased =
        resolve_dimensions(&names(&["staffattitude", "peopledensity", "selfservice"])).unwrap();
    assert_eq!(canonical, aliased);
}

#[test]
fn test_resolve_is_case_insensitive() {
    let dims = resolve_dimensions(&names(&["Appearance", "STAFF_ATTITUDE"])).unwrap();
    assert_eq!(dims, vec![Dimension::Appearance, Dimension::StaffAttitude]);
}

#[test]
fn test_resolve_rejects_unknown_name() {
    let err = resolve_dimensions(&names(&["appearance", "not_a_real_dimension"])).unwrap_err();
    assert_eq!(
        err,
        RatingError::UnknownDimension("not_a_real_dimension".into())
    );
}

#[test]
fn test_resolve_rejects_empty_set() {
    let err = resolve_dimensions(&[]).unwrap_err();
    assert_eq!(err, RatingError::EmptyDimensionSet);
}

#[test]
fn test_alias_and_canonical_give_same_score() {
    let agg = aggregate_with(&[(Dimension::StaffAttitude, 4)]);

    let canonical = resolve_dimensions(&names(&["staff_attitude"])).unwrap();
    let aliased = resolve_dimensions(&names(&["staffattitude"])).unwrap();

    assert_eq!(
        combine_average(&agg, &canonical),
        combine_average(&agg, &aliased)
    );
}

#[test]
fn test_combine_unconditional_mean() {
    // appearance avg 4, lighting never rated: the unrated dimension still
    // divides the sum
    let agg = aggregate_with(&[(Dimension::Appearance, 4)]);
    let dims = vec![Dimension::Appearance, Dimension::Lighting];

    assert_eq!(combine_average(&agg, &dims), 2.0);
}

#[test]
fn test_combine_scenario() {
    let mut agg = aggregate_with(&[(Dimension::Appearance, 5), (Dimension::Lighting, 3)]);
    let mut second = RatingEvent::new();
    second.rate(Dimension::Appearance, 3, None).unwrap();
    agg.apply(&second);

    let dims = resolve_dimensions(&names(&["appearance", "lighting"])).unwrap();
    assert_eq!(combine_average(&agg, &dims), 3.5);
}

#[test]
fn test_combine_empty_aggregate_is_zero() {
    let agg = RatingAggregate::empty(1);
    assert_eq!(combine_average(&agg, &Dimension::ALL), 0.0);
}

#[test]
fn test_threshold_is_strict() {
    let scored = vec![("at", 3.0), ("above", 3.01), ("below", 2.99)];
    let kept = retain_above(scored, DEFAULT_SCORE_THRESHOLD);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].0, "above");
}

#[test]
fn test_retain_above_preserves_input_order() {
    let scored = vec![("a", 4.0), ("b", 1.0), ("c", 5.0), ("d", 3.5)];
    let kept = retain_above(scored, 3.0);

    let names: Vec<&str> = kept.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["a", "c", "d"]);
}
