use serde::{Deserialize, Serialize};

/// Display mode of the page. Only chart colors depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Color for chart titles, legends and axis ticks.
    pub fn text_color(self) -> &'static str {
        match self {
            Theme::Light => "#2d3436",
            Theme::Dark => "#dfe6e9",
        }
    }

    /// Label of the toggle button, naming the mode it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}
