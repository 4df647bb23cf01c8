//! Application state behind the page.
//!
//! A [`Dashboard`] owns the subject list, the last overall result, the
//! theme and both chart slots. Every operation runs to completion and
//! either changes state and charts together or, on invalid input, touches
//! nothing.

use crate::chart::{ChartRenderer, ChartSlot};
use crate::errors::ValidationError;
use crate::input::parse_count;
use crate::models::{ChartFrame, DashboardView, OverallView, SubjectId};
use crate::overall::{calculate_overall, overall_chart};
use crate::theme::Theme;
use crate::tracker::{subject_chart, SubjectTracker};
use tracing::{debug, info};

/// Gives the dashboard read access to live charts so they can be
/// published with each view.
pub trait ChartSource {
    fn frame(&self, slot: &ChartSlot) -> Option<ChartFrame>;
}

impl ChartSource for crate::chart::ChartBoard {
    fn frame(&self, slot: &ChartSlot) -> Option<ChartFrame> {
        let handle = slot.handle()?;
        self.get(handle).map(|chart| ChartFrame {
            handle,
            chart: chart.clone(),
        })
    }
}

#[derive(Debug)]
pub struct Dashboard<R> {
    renderer: R,
    theme: Theme,
    overall: Option<OverallView>,
    tracker: SubjectTracker,
    overall_slot: ChartSlot,
    subject_slot: ChartSlot,
}

impl<R: ChartRenderer> Dashboard<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_theme(renderer, Theme::default())
    }

    pub fn with_theme(renderer: R, theme: Theme) -> Self {
        Self {
            renderer,
            theme,
            overall: None,
            tracker: SubjectTracker::new(),
            overall_slot: ChartSlot::default(),
            subject_slot: ChartSlot::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn overall(&self) -> Option<&OverallView> {
        self.overall.as_ref()
    }

    pub fn tracker(&self) -> &SubjectTracker {
        &self.tracker
    }

    pub fn calculate_overall(&mut self, total: &str, attended: &str) -> Result<(), ValidationError> {
        let view = calculate_overall(parse_count(total), parse_count(attended)).inspect_err(
            |err| debug!(field = ?err.field, "overall input rejected: {err}"),
        )?;

        info!(
            total = view.total,
            attended = view.attended,
            eligible = view.eligible,
            "overall attendance {}%",
            view.percentage_label
        );
        self.overall = Some(view);
        self.redraw_overall();
        Ok(())
    }

    pub fn reset_overall(&mut self) {
        self.overall = None;
        self.overall_slot.clear(&mut self.renderer);
    }

    pub fn add_subject(
        &mut self,
        name: &str,
        total: &str,
        attended: &str,
    ) -> Result<SubjectId, ValidationError> {
        let subject = self
            .tracker
            .add_subject(name, parse_count(total), parse_count(attended))
            .inspect_err(|err| debug!(field = ?err.field, "subject input rejected: {err}"))?;
        let id = subject.id;

        info!(id = id.0, name = %subject.name, "subject added");
        self.redraw_subjects();
        Ok(id)
    }

    /// Unknown ids are ignored.
    pub fn delete_subject(&mut self, id: SubjectId) {
        if self.tracker.delete_subject(id) {
            info!(id = id.0, "subject deleted");
        } else {
            debug!(id = id.0, "no subject to delete");
        }
        self.redraw_subjects();
    }

    pub fn reset_subjects(&mut self) {
        self.tracker.reset();
        self.subject_slot.clear(&mut self.renderer);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        info!(theme = self.theme.as_str(), "theme toggled");
        self.redraw_overall();
        self.redraw_subjects();
        self.theme
    }

    fn redraw_overall(&mut self) {
        if let Some(view) = &self.overall {
            let chart = overall_chart(view).paint(self.theme);
            self.overall_slot.replace(&mut self.renderer, chart);
        }
    }

    fn redraw_subjects(&mut self) {
        if self.tracker.is_empty() {
            self.subject_slot.clear(&mut self.renderer);
            return;
        }
        let chart = subject_chart(self.tracker.subjects()).paint(self.theme);
        self.subject_slot.replace(&mut self.renderer, chart);
    }
}

impl<R: ChartRenderer + ChartSource> Dashboard<R> {
    pub fn view(&self) -> DashboardView {
        DashboardView {
            theme: self.theme,
            toggle_label: self.theme.toggle_label().to_string(),
            overall: self.overall.clone(),
            subjects: self.tracker.views(),
            aggregate: self.tracker.aggregate(),
            overall_chart: self.renderer.frame(&self.overall_slot),
            subject_chart: self.renderer.frame(&self.subject_slot),
        }
    }
}
