use crate::theme::Theme;
use std::{env, net::IpAddr, net::SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub theme: Theme,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            theme: Theme::Light,
        }
    }
}

impl ServerConfig {
    /// Reads `APP_HOST`, `PORT` and `APP_THEME`, falling back to the
    /// defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("APP_HOST")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            theme: match lookup("APP_THEME").as_deref() {
                Some("dark") => Theme::Dark,
                Some("light") => Theme::Light,
                _ => defaults.theme,
            },
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
