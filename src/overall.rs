use crate::chart::{ChartKind, ChartPoint, ChartSeries, ColorCategory};
use crate::errors::{Field, ValidationError, ValidationKind};
use crate::formula::{format_percentage, is_eligible, lectures_to_eligibility, percentage};
use crate::models::OverallView;

/// Validates a total/attended pair and computes the overall result.
pub fn calculate_overall(total: i64, attended: i64) -> Result<OverallView, ValidationError> {
    if total <= 0 {
        return Err(ValidationError::new(Field::Total, ValidationKind::InvalidTotal));
    }
    if attended < 0 {
        return Err(ValidationError::new(
            Field::Attended,
            ValidationKind::NegativeAttended,
        ));
    }
    if attended > total {
        return Err(ValidationError::new(
            Field::Attended,
            ValidationKind::AttendedExceedsTotal,
        ));
    }

    let (total, attended) = (total as u64, attended as u64);
    let percentage = percentage(attended.into(), total.into());
    let eligible = is_eligible(attended.into(), total.into());

    Ok(OverallView {
        total,
        attended,
        missed: total - attended,
        percentage,
        percentage_label: format_percentage(percentage),
        eligible,
        message: eligible.then(|| motivational_message(percentage).to_string()),
        required: (!eligible).then(|| lectures_to_eligibility(total, attended)),
    })
}

/// Message shown under an eligible result.
pub fn motivational_message(percentage: f64) -> &'static str {
    if percentage >= 95.0 {
        "Outstanding! You're an attendance superstar!"
    } else if percentage >= 90.0 {
        "Excellent! Keep up the amazing work!"
    } else if percentage >= 85.0 {
        "Great job! Your consistency is impressive!"
    } else if percentage >= 80.0 {
        "Well done! You're doing fantastic!"
    } else {
        "Great job maintaining your attendance! Keep it up!"
    }
}

pub fn overall_chart(view: &OverallView) -> ChartSeries {
    ChartSeries {
        kind: ChartKind::Doughnut,
        title: "Attendance Overview".to_string(),
        points: vec![
            ChartPoint {
                label: "Attended".to_string(),
                value: view.attended as f64,
                category: ColorCategory::Positive,
                tooltip: None,
            },
            ChartPoint {
                label: "Missed".to_string(),
                value: view.missed as f64,
                category: ColorCategory::Negative,
                tooltip: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_reports_required_lectures() {
        let view = calculate_overall(40, 28).unwrap();
        assert_eq!(view.percentage, 70.0);
        assert_eq!(view.percentage_label, "70.0");
        assert_eq!(view.missed, 12);
        assert!(!view.eligible);
        assert_eq!(view.required, Some(8));
        assert!(view.message.is_none());
    }

    #[test]
    fn eligible_result_carries_tier_message() {
        let view = calculate_overall(100, 80).unwrap();
        assert_eq!(view.percentage, 80.0);
        assert!(view.eligible);
        assert_eq!(view.required, None);
        assert_eq!(
            view.message.as_deref(),
            Some("Well done! You're doing fantastic!")
        );
    }

    #[test]
    fn tiers_are_distinct() {
        let tiers = [96.0, 91.0, 86.0, 81.0, 76.0];
        let messages: Vec<_> = tiers.iter().map(|p| motivational_message(*p)).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(motivational_message(75.0), motivational_message(79.9));
        assert_eq!(motivational_message(95.0), motivational_message(100.0));
    }

    #[test]
    fn just_below_threshold_with_large_counts() {
        // 74.99999999999999...%, shown as 75.0 but still short
        let view = calculate_overall(123_456_789_012_345_679, 92_592_591_759_259_258).unwrap();
        assert_eq!(view.percentage_label, "75.0");
        assert!(!view.eligible);
        assert_eq!(view.required, Some(5));
        assert!(view.message.is_none());
    }

    #[test]
    fn validation_order() {
        let err = calculate_overall(0, -1).unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidTotal);
        assert_eq!(err.field, Field::Total);

        let err = calculate_overall(10, -1).unwrap_err();
        assert_eq!(err.kind, ValidationKind::NegativeAttended);
        assert_eq!(err.field, Field::Attended);

        let err = calculate_overall(10, 11).unwrap_err();
        assert_eq!(err.kind, ValidationKind::AttendedExceedsTotal);
        assert_eq!(
            err.to_string(),
            "Attended lectures cannot exceed total lectures"
        );
    }

    #[test]
    fn chart_has_attended_and_missed_slices() {
        let view = calculate_overall(40, 28).unwrap();
        let chart = overall_chart(&view);
        assert_eq!(chart.kind, ChartKind::Doughnut);
        let values: Vec<_> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![28.0, 12.0]);
        assert_eq!(chart.points[1].category, ColorCategory::Negative);
    }
}
