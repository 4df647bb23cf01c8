use crate::errors::AppError;
use crate::models::{ChartFrame, DashboardView, OverallRequest, SubjectId, SubjectRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(dashboard.theme()))
}

pub async fn get_state(State(state): State<AppState>) -> Json<DashboardView> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view())
}

pub async fn get_charts(State(state): State<AppState>) -> Json<Vec<ChartFrame>> {
    let dashboard = state.dashboard.lock().await;
    let frames = dashboard
        .renderer()
        .live()
        .iter()
        .map(|(handle, chart)| ChartFrame {
            handle: *handle,
            chart: chart.clone(),
        })
        .collect();
    Json(frames)
}

pub async fn calculate_overall(
    State(state): State<AppState>,
    Json(payload): Json<OverallRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.calculate_overall(&payload.total, &payload.attended)?;
    Ok(Json(dashboard.view()))
}

pub async fn reset_overall(State(state): State<AppState>) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.reset_overall();
    Json(dashboard.view())
}

pub async fn add_subject(
    State(state): State<AppState>,
    Json(payload): Json<SubjectRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.add_subject(&payload.name, &payload.total, &payload.attended)?;
    Ok(Json(dashboard.view()))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DashboardView>, AppError> {
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::bad_request("subject id must be a number"))?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.delete_subject(SubjectId(id));
    Ok(Json(dashboard.view()))
}

pub async fn reset_subjects(State(state): State<AppState>) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.reset_subjects();
    Json(dashboard.view())
}

pub async fn toggle_theme(State(state): State<AppState>) -> Json<DashboardView> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.toggle_theme();
    Json(dashboard.view())
}
