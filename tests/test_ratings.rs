use calm_map_be::ratings::{Dimension, RatingAggregate, RatingError, RatingEvent};

fn event(values: &[(Dimension, i64)]) -> RatingEvent {
    let mut e = RatingEvent::new();
    for (dim, val) in values {
        e.rate(*dim, *val, None).expect("valid rating");
    }
    e
}

#[test]
fn test_apply_updates_sum_count_avg() {
    let mut agg = RatingAggregate::empty(1);

    agg.apply(&event(&[(Dimension::Appearance, 5), (Dimension::Lighting, 3)]));

    let appearance = agg.dimension(Dimension::Appearance);
    assert_eq!(appearance.sum, 5);
    assert_eq!(appearance.count, 1);
    assert_eq!(appearance.avg, 5.0);

    let lighting = agg.dimension(Dimension::Lighting);
    assert_eq!(lighting.sum, 3);
    assert_eq!(lighting.count, 1);
    assert_eq!(lighting.avg, 3.0);

    // Untouched dimensions stay zero
    let smell = agg.dimension(Dimension::Smell);
    assert_eq!(smell.sum, 0);
    assert_eq!(smell.count, 0);
    assert_eq!(smell.avg, 0.0);
}

#[test]
fn test_counters_only_grow_and_match_contributions() {
    let mut agg = RatingAggregate::empty(1);

    let values = [5, 3, 0, 4, 1];
    for v in values {
        agg.apply(&event(&[(Dimension::Calmness, v)]));
    }

    // Zero-valued events don't count
    let calmness = agg.dimension(Dimension::Calmness);
    assert_eq!(calmness.count, 4);
    assert_eq!(calmness.sum, 13);
}

#[test]
fn test_average_consistency() {
    let mut agg = RatingAggregate::empty(1);

    for v in [2, 5, 3, 4, 4, 1] {
        agg.apply(&event(&[(Dimension::Smell, v)]));
    }

    let smell = agg.dimension(Dimension::Smell);
    assert!(smell.count > 0);
    assert!((smell.avg * smell.count as f64 - smell.sum as f64).abs() < 1e-9);
}

#[test]
fn test_zero_value_leaves_dimension_untouched() {
    let mut agg = RatingAggregate::empty(1);
    agg.apply(&event(&[(Dimension::Appearance, 4)]));

    let before = agg.dimension(Dimension::Appearance);
    agg.apply(&event(&[(Dimension::Appearance, 0)]));
    let after = agg.dimension(Dimension::Appearance);

    assert_eq!(before.sum, after.sum);
    assert_eq!(before.count, after.count);
    assert_eq!(before.avg, after.avg);
}

#[test]
fn test_zero_value_keeps_remark_on_event() {
    let mut e = RatingEvent::new();
    e.rate(Dimension::Lighting, 0, Some("too dim to judge".into()))
        .expect("valid rating");

    let rated = e.get(Dimension::Lighting).expect("entry stored");
    assert_eq!(rated.value, 0);
    assert_eq!(rated.remark.as_deref(), Some("too dim to judge"));
    assert_eq!(e.comment_avg(), None);
}

#[test]
fn test_comment_avg_excludes_zero_values() {
    let e = event(&[
        (Dimension::Lighting, 4),
        (Dimension::Smell, 2),
        (Dimension::Temperature, 0),
    ]);

    assert_eq!(e.comment_avg(), Some(3.0));
}

#[test]
fn test_comment_avg_none_when_nothing_scored() {
    assert_eq!(RatingEvent::new().comment_avg(), None);
    assert_eq!(event(&[(Dimension::Signage, 0)]).comment_avg(), None);
}

#[test]
fn test_negative_value_rejected() {
    let mut e = RatingEvent::new();
    let err = e.rate(Dimension::Tactility, -2, None).unwrap_err();

    assert_eq!(
        err,
        RatingError::InvalidRating {
            dimension: Dimension::Tactility,
            value: -2
        }
    );
    assert!(e.is_empty());
}

#[test]
fn test_value_above_u32_range_rejected() {
    let mut e = RatingEvent::new();

    let too_big = u32::MAX as i64 + 5;
    let err = e.rate(Dimension::Tactility, too_big, None).unwrap_err();
    assert_eq!(
        err,
        RatingError::InvalidRating {
            dimension: Dimension::Tactility,
            value: too_big
        }
    );
    assert!(e.is_empty());

    // An exact wrap to 0 must not turn a scored dimension into "not scored"
    let err = e.rate(Dimension::Smell, u32::MAX as i64 + 1, None).unwrap_err();
    assert!(matches!(err, RatingError::InvalidRating { .. }));
    assert!(e.is_empty());
}

#[test]
fn test_same_dimension_rated_twice_rejected() {
    let mut e = RatingEvent::new();
    e.rate(Dimension::StaffAttitude, 4, None).expect("valid rating");

    let err = e.rate(Dimension::StaffAttitude, 2, None).unwrap_err();
    assert_eq!(
        err,
        RatingError::DuplicateDimension(Dimension::StaffAttitude)
    );

    // First rating survives untouched
    let rated = e.get(Dimension::StaffAttitude).expect("entry stored");
    assert_eq!(rated.value, 4);
}

#[test]
fn test_two_comment_scenario() {
    let mut agg = RatingAggregate::empty(42);

    let avg1 = agg.apply(&event(&[
        (Dimension::Appearance, 5),
        (Dimension::Lighting, 3),
    ]));
    assert_eq!(avg1, Some(4.0));
    assert_eq!(agg.dimension(Dimension::Appearance).avg, 5.0);
    assert_eq!(agg.dimension(Dimension::Lighting).avg, 3.0);

    agg.apply(&event(&[(Dimension::Appearance, 3)]));
    let appearance = agg.dimension(Dimension::Appearance);
    assert_eq!(appearance.sum, 8);
    assert_eq!(appearance.count, 2);
    assert_eq!(appearance.avg, 4.0);

    // Lighting unchanged by the second comment
    let lighting = agg.dimension(Dimension::Lighting);
    assert_eq!(lighting.sum, 3);
    assert_eq!(lighting.count, 1);
}

#[test]
fn test_aggregate_round_trips_through_json() {
    let mut agg = RatingAggregate::empty(7);
    agg.apply(&event(&[(Dimension::StaffAttitude, 4)]));

    let json = serde_json::to_string(&agg).expect("serialize");
    let restored: RatingAggregate = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.organization_id, 7);
    assert_eq!(restored.dimension(Dimension::StaffAttitude).sum, 4);
    assert_eq!(restored.dimension(Dimension::StaffAttitude).count, 1);
}
