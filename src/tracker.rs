use crate::chart::{ChartKind, ChartPoint, ChartSeries, ColorCategory};
use crate::errors::{Field, ValidationError, ValidationKind};
use crate::formula::{
    format_percentage, is_eligible, lectures_to_eligibility, percentage, ELIGIBILITY_THRESHOLD,
};
use crate::models::{AggregateView, Subject, SubjectId, SubjectView};
use chrono::{DateTime, Utc};

/// The in-memory subject list. Every stored subject has `total > 0` and
/// `attended <= total`.
#[derive(Debug, Default)]
pub struct SubjectTracker {
    subjects: Vec<Subject>,
    last_id: u64,
}

impl SubjectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn add_subject(
        &mut self,
        name: &str,
        total: i64,
        attended: i64,
    ) -> Result<&Subject, ValidationError> {
        self.add_subject_at(name, total, attended, Utc::now())
    }

    pub fn add_subject_at(
        &mut self,
        name: &str,
        total: i64,
        attended: i64,
        now: DateTime<Utc>,
    ) -> Result<&Subject, ValidationError> {
        let name = name.trim();
        let reject = |kind| ValidationError::new(Field::Subject, kind);

        if name.is_empty() {
            return Err(reject(ValidationKind::EmptyName));
        }
        if total <= 0 {
            return Err(reject(ValidationKind::InvalidTotal));
        }
        if attended < 0 {
            return Err(reject(ValidationKind::NegativeAttended));
        }
        if attended > total {
            return Err(reject(ValidationKind::AttendedExceedsTotal));
        }
        let lowered = name.to_lowercase();
        if self.subjects.iter().any(|s| s.name.to_lowercase() == lowered) {
            return Err(reject(ValidationKind::DuplicateName));
        }

        let (total, attended) = (total as u64, attended as u64);
        let id = self.next_id(now);
        self.subjects.push(Subject {
            id,
            name: name.to_string(),
            total,
            attended,
            percentage: percentage(attended.into(), total.into()),
        });

        Ok(&self.subjects[self.subjects.len() - 1])
    }

    /// Removes the subject with `id`. Returns whether one was removed.
    pub fn delete_subject(&mut self, id: SubjectId) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        self.subjects.len() != before
    }

    pub fn reset(&mut self) {
        self.subjects.clear();
    }

    /// Totals across all subjects, or `None` when the list is empty.
    pub fn aggregate(&self) -> Option<AggregateView> {
        if self.subjects.is_empty() {
            return None;
        }

        // Each count fits in a u64, so u128 sums cannot overflow.
        let total_lectures: u128 = self.subjects.iter().map(|s| u128::from(s.total)).sum();
        let total_attended: u128 = self.subjects.iter().map(|s| u128::from(s.attended)).sum();
        let percentage = percentage(total_attended, total_lectures);
        let eligible_count = self
            .subjects
            .iter()
            .filter(|s| is_eligible(s.attended.into(), s.total.into()))
            .count();

        Some(AggregateView {
            subject_count: self.subjects.len(),
            total_lectures,
            total_attended,
            percentage,
            percentage_label: format_percentage(percentage),
            eligible: is_eligible(total_attended, total_lectures),
            eligible_count,
            not_eligible_count: self.subjects.len() - eligible_count,
        })
    }

    pub fn views(&self) -> Vec<SubjectView> {
        self.subjects.iter().map(subject_view).collect()
    }

    // Creation time in milliseconds, nudged forward so ids never repeat.
    fn next_id(&mut self, now: DateTime<Utc>) -> SubjectId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        self.last_id = millis.max(self.last_id + 1);
        SubjectId(self.last_id)
    }
}

pub fn subject_view(subject: &Subject) -> SubjectView {
    let eligible = is_eligible(subject.attended.into(), subject.total.into());
    SubjectView {
        id: subject.id,
        name: subject.name.clone(),
        total: subject.total,
        attended: subject.attended,
        missed: subject.total - subject.attended,
        percentage: subject.percentage,
        percentage_label: format_percentage(subject.percentage),
        eligible,
        required: (!eligible).then(|| lectures_to_eligibility(subject.total, subject.attended)),
    }
}

pub fn subject_chart(subjects: &[Subject]) -> ChartSeries {
    let points = subjects
        .iter()
        .map(|subject| {
            let view = subject_view(subject);
            let mut tooltip = format!("Attendance: {}%", view.percentage_label);
            if let Some(required) = view.required.filter(|n| *n > 0) {
                tooltip.push_str(&format!(
                    " (Need {required} more for {ELIGIBILITY_THRESHOLD}%)"
                ));
            }
            ChartPoint {
                label: view.name,
                value: view.percentage,
                category: ColorCategory::for_eligibility(view.eligible),
                tooltip: Some(tooltip),
            }
        })
        .collect();

    ChartSeries {
        kind: ChartKind::Bar,
        title: "Subject-wise Attendance".to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn add_trims_and_stores_percentage() {
        let mut tracker = SubjectTracker::new();
        let subject = tracker.add_subject_at("  Physics ", 40, 28, at(1_000)).unwrap();
        assert_eq!(subject.name, "Physics");
        assert_eq!(subject.percentage, 70.0);
        assert_eq!(subject.id, SubjectId(1_000));
    }

    #[test]
    fn duplicate_names_are_case_insensitive() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 10, 8, at(1)).unwrap();
        let err = tracker.add_subject_at("math", 10, 8, at(2)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::DuplicateName);
        assert_eq!(err.field, Field::Subject);
        assert_eq!(tracker.subjects().len(), 1);
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut tracker = SubjectTracker::new();
        let err = tracker.add_subject_at("   ", 0, -1, at(1)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::EmptyName);
        let err = tracker.add_subject_at("Art", 0, -1, at(1)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::InvalidTotal);
        let err = tracker.add_subject_at("Art", 5, -1, at(1)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::NegativeAttended);
        let err = tracker.add_subject_at("Art", 5, 6, at(1)).unwrap_err();
        assert_eq!(err.kind, ValidationKind::AttendedExceedsTotal);
        assert_eq!(err.to_string(), "Attended lectures cannot exceed total");
        assert!(tracker.is_empty());
    }

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        let mut tracker = SubjectTracker::new();
        let a = tracker.add_subject_at("A", 1, 1, at(500)).unwrap().id;
        let b = tracker.add_subject_at("B", 1, 1, at(500)).unwrap().id;
        let c = tracker.add_subject_at("C", 1, 1, at(400)).unwrap().id;
        assert_eq!(a, SubjectId(500));
        assert_eq!(b, SubjectId(501));
        assert_eq!(c, SubjectId(502));
    }

    #[test]
    fn deleting_unknown_id_changes_nothing() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 10, 8, at(10)).unwrap();
        let before = tracker.subjects().to_vec();
        assert!(!tracker.delete_subject(SubjectId(999)));
        assert_eq!(tracker.subjects(), before.as_slice());
        assert!(tracker.delete_subject(SubjectId(10)));
        assert!(tracker.is_empty());
    }

    #[test]
    fn aggregate_sums_lectures() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 10, 8, at(1)).unwrap();
        tracker.add_subject_at("History", 20, 10, at(2)).unwrap();

        let aggregate = tracker.aggregate().unwrap();
        assert_eq!(aggregate.total_lectures, 30);
        assert_eq!(aggregate.total_attended, 18);
        assert!((aggregate.percentage - 60.0).abs() < 1e-9);
        assert_eq!(aggregate.percentage_label, "60.0");
        assert!(!aggregate.eligible);
        assert_eq!(aggregate.subject_count, 2);
        assert_eq!(aggregate.eligible_count, 1);
        assert_eq!(aggregate.not_eligible_count, 1);
    }

    #[test]
    fn aggregate_of_largest_subjects_does_not_overflow() {
        let mut tracker = SubjectTracker::new();
        for (i, name) in ["A", "B", "C"].into_iter().enumerate() {
            tracker
                .add_subject_at(name, i64::MAX, i64::MAX, at(i as i64))
                .unwrap();
        }
        tracker.add_subject_at("D", i64::MAX, 0, at(10)).unwrap();

        let aggregate = tracker.aggregate().unwrap();
        let max = i64::MAX as u128;
        assert_eq!(aggregate.total_lectures, 4 * max);
        assert_eq!(aggregate.total_attended, 3 * max);
        assert_eq!(aggregate.percentage_label, "75.0");
        assert!(aggregate.eligible);
        assert_eq!(aggregate.eligible_count, 3);
        assert_eq!(aggregate.not_eligible_count, 1);
        assert_eq!(tracker.views()[3].required, Some(3 * max));
    }

    #[test]
    fn reset_leaves_no_aggregate() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 10, 8, at(1)).unwrap();
        tracker.reset();
        assert!(tracker.aggregate().is_none());
        assert!(tracker.views().is_empty());
    }

    #[test]
    fn views_carry_required_lectures_only_when_short() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 40, 28, at(1)).unwrap();
        tracker.add_subject_at("Art", 4, 3, at(2)).unwrap();

        let views = tracker.views();
        assert_eq!(views[0].missed, 12);
        assert_eq!(views[0].required, Some(8));
        assert!(!views[0].eligible);
        assert!(views[1].eligible);
        assert_eq!(views[1].required, None);
    }

    #[test]
    fn rounded_label_does_not_make_subject_eligible() {
        let mut tracker = SubjectTracker::new();
        // 2999 / 4001 is 74.956..., shown as 75.0
        tracker.add_subject_at("Edge", 4001, 2999, at(1)).unwrap();
        let view = &tracker.views()[0];
        assert_eq!(view.percentage_label, "75.0");
        assert!(!view.eligible);
        assert_eq!(tracker.aggregate().unwrap().eligible_count, 0);
    }

    #[test]
    fn chart_tooltips_mention_shortfall() {
        let mut tracker = SubjectTracker::new();
        tracker.add_subject_at("Math", 40, 28, at(1)).unwrap();
        tracker.add_subject_at("Art", 4, 4, at(2)).unwrap();

        let chart = subject_chart(tracker.subjects());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(
            chart.points[0].tooltip.as_deref(),
            Some("Attendance: 70.0% (Need 8 more for 75%)")
        );
        assert_eq!(chart.points[0].category, ColorCategory::Negative);
        assert_eq!(chart.points[1].tooltip.as_deref(), Some("Attendance: 100.0%"));
        assert_eq!(chart.points[1].category, ColorCategory::Positive);
    }
}
