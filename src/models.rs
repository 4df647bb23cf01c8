use crate::chart::{ChartHandle, RenderedChart};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub total: u64,
    pub attended: u64,
    pub percentage: f64,
}

/// Raw form values; numbers are parsed leniently on the server.
#[derive(Debug, Deserialize)]
pub struct OverallRequest {
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub attended: String,
}

#[derive(Debug, Deserialize)]
pub struct SubjectRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub attended: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallView {
    pub total: u64,
    pub attended: u64,
    pub missed: u64,
    pub percentage: f64,
    pub percentage_label: String,
    pub eligible: bool,
    pub message: Option<String>,
    pub required: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectView {
    pub id: SubjectId,
    pub name: String,
    pub total: u64,
    pub attended: u64,
    pub missed: u64,
    pub percentage: f64,
    pub percentage_label: String,
    pub eligible: bool,
    pub required: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateView {
    pub subject_count: usize,
    pub total_lectures: u128,
    pub total_attended: u128,
    pub percentage: f64,
    pub percentage_label: String,
    pub eligible: bool,
    pub eligible_count: usize,
    pub not_eligible_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub handle: ChartHandle,
    #[serde(flatten)]
    pub chart: RenderedChart,
}

/// Everything the page needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub theme: Theme,
    pub toggle_label: String,
    pub overall: Option<OverallView>,
    pub subjects: Vec<SubjectView>,
    pub aggregate: Option<AggregateView>,
    pub overall_chart: Option<ChartFrame>,
    pub subject_chart: Option<ChartFrame>,
}
