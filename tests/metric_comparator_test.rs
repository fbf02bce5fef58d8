use fitlog::models::{ImprovementDirection, ImprovementStatus, MetricSnapshot};
use fitlog::services::{parse_target, MetricComparator};
use pretty_assertions::assert_eq;

fn approx(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("value present");
    assert!(
        (actual - expected).abs() < 0.01,
        "expected ~{}, got {}",
        expected,
        actual
    );
}

fn weight(current: f64) -> MetricSnapshot {
    MetricSnapshot::new("Weight", ImprovementDirection::Decreasing)
        .with_values(Some(90.0), Some(current))
        .with_target(Some(80.0))
        .with_unit("kg")
}

#[test]
fn test_weight_loss_halfway() {
    let result = MetricComparator::new().compare(&weight(85.0), 7);

    assert_eq!(result.delta, Some(-5.0));
    approx(result.delta_percent, -5.56);
    assert_eq!(result.status, ImprovementStatus::Improved);
    assert!(result.is_improvement());
    approx(result.weekly_rate, -5.0);
    approx(result.monthly_rate, -21.43);
    assert_eq!(result.progress_percent, Some(50.0));
}

#[test]
fn test_no_change_is_neutral() {
    let result = MetricComparator::new().compare(&weight(90.0), 7);

    assert_eq!(result.delta, Some(0.0));
    assert_eq!(result.status, ImprovementStatus::Unchanged);
    assert_eq!(result.progress_percent, Some(0.0));
}

#[test]
fn test_target_passed() {
    let result = MetricComparator::new().compare(&weight(78.0), 30);
    assert_eq!(result.progress_percent, Some(100.0));
}

#[test]
fn test_missing_values_degrade() {
    let comparator = MetricComparator::new();

    for (baseline, current) in [(None, Some(85.0)), (Some(90.0), None), (None, None)] {
        let snapshot = MetricSnapshot::new("Weight", ImprovementDirection::Decreasing)
            .with_values(baseline, current)
            .with_target(Some(80.0));
        let result = comparator.compare(&snapshot, 7);

        assert_eq!(result.delta, None);
        assert_eq!(result.delta_percent, None);
        assert_eq!(result.weekly_rate, None);
        assert_eq!(result.monthly_rate, None);
        assert_eq!(result.progress_percent, None);
        assert_eq!(result.status, ImprovementStatus::Unchanged);
    }
}

#[test]
fn test_muscle_gain_toward_target() {
    let snapshot = MetricSnapshot::new("Lean Mass", ImprovementDirection::Increasing)
        .with_values(Some(60.0), Some(63.0))
        .with_target(Some(68.0));
    let result = MetricComparator::new().compare(&snapshot, 0);

    assert_eq!(result.status, ImprovementStatus::Improved);
    assert_eq!(result.progress_percent, Some(37.5));
    assert_eq!(result.weekly_rate, None);
}

#[test]
fn test_range_target_uses_upper_bound() {
    let target = parse_target("82-85 kg").expect("range target");
    let snapshot = MetricSnapshot::new("Weight", ImprovementDirection::Decreasing)
        .with_values(Some(95.0), Some(90.0))
        .with_target_spec(Some(&target));
    let result = MetricComparator::new().compare(&snapshot, 14);

    assert_eq!(result.target_value, Some(85.0));
    assert_eq!(result.progress_percent, Some(50.0));
    assert_eq!(target.display_value(), 83.5);
}
