//! Chart data handed to the page, and the renderer seam.
//!
//! The core only produces [`ChartSeries`] values (label, value, color
//! category). Painting them for a [`Theme`] turns them into a
//! [`RenderedChart`], which a [`ChartRenderer`] takes ownership of and
//! answers with a handle. Charts are never patched in place: a
//! [`ChartSlot`] disposes the old handle before rendering a new one.

use crate::theme::Theme;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Positive,
    Negative,
}

impl ColorCategory {
    pub fn for_eligibility(eligible: bool) -> Self {
        if eligible {
            ColorCategory::Positive
        } else {
            ColorCategory::Negative
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            ColorCategory::Positive => "rgba(0, 184, 148, 0.8)",
            ColorCategory::Negative => "rgba(225, 112, 85, 0.8)",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            ColorCategory::Positive => "rgba(0, 184, 148, 1)",
            ColorCategory::Negative => "rgba(225, 112, 85, 1)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub category: ColorCategory,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn paint(&self, theme: Theme) -> RenderedChart {
        RenderedChart {
            kind: self.kind,
            title: self.title.clone(),
            labels: self.points.iter().map(|p| p.label.clone()).collect(),
            values: self.points.iter().map(|p| p.value).collect(),
            colors: self.points.iter().map(|p| p.category.fill().to_string()).collect(),
            border_colors: self
                .points
                .iter()
                .map(|p| p.category.border().to_string())
                .collect(),
            tooltips: self.points.iter().map(|p| p.tooltip.clone()).collect(),
            text_color: theme.text_color().to_string(),
            theme,
        }
    }
}

/// What the charting collaborator receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub border_colors: Vec<String>,
    pub tooltips: Vec<Option<String>>,
    pub text_color: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChartHandle(pub u64);

pub trait ChartRenderer {
    fn render(&mut self, chart: RenderedChart) -> ChartHandle;
    fn dispose(&mut self, handle: ChartHandle);
}

/// In-memory registry of live charts, published to the page over HTTP.
#[derive(Debug, Default)]
pub struct ChartBoard {
    next: u64,
    live: BTreeMap<ChartHandle, RenderedChart>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: ChartHandle) -> Option<&RenderedChart> {
        self.live.get(&handle)
    }

    pub fn live(&self) -> &BTreeMap<ChartHandle, RenderedChart> {
        &self.live
    }
}

impl ChartRenderer for ChartBoard {
    fn render(&mut self, chart: RenderedChart) -> ChartHandle {
        self.next += 1;
        let handle = ChartHandle(self.next);
        self.live.insert(handle, chart);
        handle
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.live.remove(&handle);
    }
}

/// At most one live chart.
#[derive(Debug, Default)]
pub struct ChartSlot {
    handle: Option<ChartHandle>,
}

impl ChartSlot {
    pub fn handle(&self) -> Option<ChartHandle> {
        self.handle
    }

    pub fn replace<R: ChartRenderer>(&mut self, renderer: &mut R, chart: RenderedChart) {
        self.clear(renderer);
        self.handle = Some(renderer.render(chart));
    }

    pub fn clear<R: ChartRenderer>(&mut self, renderer: &mut R) {
        if let Some(handle) = self.handle.take() {
            renderer.dispose(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries {
            kind: ChartKind::Doughnut,
            title: "Attendance Overview".to_string(),
            points: vec![
                ChartPoint {
                    label: "Attended".to_string(),
                    value: 28.0,
                    category: ColorCategory::Positive,
                    tooltip: None,
                },
                ChartPoint {
                    label: "Missed".to_string(),
                    value: 12.0,
                    category: ColorCategory::Negative,
                    tooltip: None,
                },
            ],
        }
    }

    #[test]
    fn paint_uses_theme_text_color() {
        let light = series().paint(Theme::Light);
        let dark = series().paint(Theme::Dark);
        assert_eq!(light.labels, vec!["Attended", "Missed"]);
        assert_eq!(light.values, vec![28.0, 12.0]);
        assert_eq!(light.colors, dark.colors);
        assert_eq!(light.text_color, "#2d3436");
        assert_eq!(dark.text_color, "#dfe6e9");
        assert_eq!(dark.theme, Theme::Dark);
    }

    #[test]
    fn slot_disposes_before_recreating() {
        let mut board = ChartBoard::new();
        let mut slot = ChartSlot::default();

        slot.replace(&mut board, series().paint(Theme::Light));
        let first = slot.handle().unwrap();
        slot.replace(&mut board, series().paint(Theme::Dark));
        let second = slot.handle().unwrap();

        assert_ne!(first, second);
        assert!(board.get(first).is_none());
        assert_eq!(board.get(second).unwrap().theme, Theme::Dark);
        assert_eq!(board.live().len(), 1);

        slot.clear(&mut board);
        assert!(slot.handle().is_none());
        assert!(board.live().is_empty());
    }
}
