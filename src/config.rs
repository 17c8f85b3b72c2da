use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use nav_shell::components::HeaderChrome;
use nav_shell::ShellWindow;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "jays-frames";
const CONFIG_FILE: &str = "config.json";

/// Configuración de solo lectura cargada al arrancar. Nunca se escribe de
/// vuelta: el estado de navegación no sobrevive entre sesiones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub chrome: ChromeConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let window = ShellWindow::default();
        Self {
            width: window.width,
            height: window.height,
            maximized: window.maximized,
        }
    }
}

impl From<&WindowConfig> for ShellWindow {
    fn from(config: &WindowConfig) -> Self {
        ShellWindow {
            width: config.width,
            height: config.height,
            maximized: config.maximized,
        }
    }
}

/// Marca, identidad y contador de avisos del header.
///
/// `logo_acronym` es opcional y vale `None` por defecto: el header solo pinta
/// el recuadro del logo cuando la configuración define unas siglas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub logo_acronym: Option<String>,
    pub user_name: String,
    pub user_role: String,
    pub user_initials: String,
    pub notification_count: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        let chrome = HeaderChrome::default();
        Self {
            title: chrome.title,
            subtitle: chrome.subtitle,
            logo_acronym: chrome.logo_acronym,
            user_name: chrome.user_name,
            user_role: chrome.user_role,
            user_initials: chrome.user_initials,
            notification_count: chrome.notification_count,
        }
    }
}

impl From<&ChromeConfig> for HeaderChrome {
    fn from(config: &ChromeConfig) -> Self {
        HeaderChrome {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            logo_acronym: config.logo_acronym.clone(),
            user_name: config.user_name.clone(),
            user_role: config.user_role.clone(),
            user_initials: config.user_initials.clone(),
            notification_count: config.notification_count,
        }
    }
}

impl AppConfig {
    /// `<config_dir>/jays-frames/config.json`, o `None` si la plataforma no
    /// expone un directorio de configuración.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn try_load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("no se pudo leer {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("configuración inválida en {}", path.display()))?;
        Ok(config)
    }

    /// Carga la configuración y recurre a los valores por defecto si el
    /// archivo falta o no se puede interpretar.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(
                "sin archivo de configuración en {}, usando valores por defecto",
                path.display()
            );
            return Self::default();
        }

        match Self::try_load(path) {
            Ok(config) => {
                info!("configuración cargada desde {}", path.display());
                config
            }
            Err(err) => {
                warn!("{err:#}; usando valores por defecto");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.chrome.title, "Jay's Frames");
        assert_eq!(config.chrome.notification_count, 3);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "window": {{ "maximized": true }}, "chrome": {{ "user_name": "Sam Rivera", "notification_count": 7 }} }}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path());
        assert!(config.window.maximized);
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.chrome.user_name, "Sam Rivera");
        assert_eq!(config.chrome.notification_count, 7);
        assert_eq!(config.chrome.user_role, "Owner");
    }

    #[test]
    fn malformed_file_is_reported_by_try_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::try_load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("configuración inválida"));
        assert_eq!(AppConfig::load(file.path()), AppConfig::default());
    }

    #[test]
    fn chrome_config_maps_onto_header_chrome() {
        let config = ChromeConfig {
            logo_acronym: Some("JF".into()),
            ..ChromeConfig::default()
        };
        let chrome = HeaderChrome::from(&config);
        assert_eq!(chrome.logo_acronym.as_deref(), Some("JF"));
        assert_eq!(chrome.user_initials, "JJ");
    }

    #[test]
    fn logo_is_opt_in() {
        assert_eq!(ChromeConfig::default().logo_acronym, None);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "chrome": {{ "logo_acronym": "JF" }} }}"#).unwrap();
        let config = AppConfig::load(file.path());
        assert_eq!(config.chrome.logo_acronym.as_deref(), Some("JF"));
        assert_eq!(config.chrome.title, "Jay's Frames");
    }
}
