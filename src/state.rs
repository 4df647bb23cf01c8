use crate::chart::ChartBoard;
use crate::dashboard::Dashboard;
use crate::theme::Theme;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard<ChartBoard>>>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::with_theme(ChartBoard::new(), theme))),
        }
    }
}
