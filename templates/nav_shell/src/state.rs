use log::{debug, warn};

use crate::menu::{self, MenuEntry};

pub const DEFAULT_VIEW_ID: &str = "dashboard";

/// Peticiones de cambio que los componentes envían al dueño del estado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellMessage {
    ToggleTheme,
    ToggleSidebar,
    Select(String),
}

/// Estado de navegación de la shell: vista activa, panel lateral y tema.
///
/// Solo el componente raíz posee este registro. Header y Sidebar reciben una
/// proyección de lectura y devuelven [`ShellMessage`] a través de callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    active_view_id: String,
    sidebar_open: bool,
    dark_mode: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_view_id: DEFAULT_VIEW_ID.to_string(),
            sidebar_open: true,
            dark_mode: false,
        }
    }
}

impl ShellState {
    pub fn active_view_id(&self) -> &str {
        &self.active_view_id
    }

    pub fn active_entry(&self) -> Option<&'static MenuEntry> {
        menu::entry(&self.active_view_id)
    }

    /// Cambia la vista activa. Los ids que no existen en el menú se ignoran y
    /// devuelven `false`, de modo que la vista activa siempre apunta a una
    /// entrada conocida.
    pub fn set_active_view_id(&mut self, id: &str) -> bool {
        if !menu::is_known(id) {
            warn!("vista de navegación desconocida ignorada: {id:?}");
            return false;
        }
        if self.active_view_id != id {
            debug!("vista activa: {} -> {}", self.active_view_id, id);
            self.active_view_id = id.to_string();
        }
        true
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        debug!("panel lateral abierto: {}", self.sidebar_open);
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!("modo oscuro: {}", self.dark_mode);
    }

    /// Único punto de escritura para los mensajes de los componentes.
    /// Devuelve `true` si el estado cambió.
    pub fn apply(&mut self, message: ShellMessage) -> bool {
        match message {
            ShellMessage::ToggleTheme => {
                self.toggle_theme();
                true
            }
            ShellMessage::ToggleSidebar => {
                self.toggle_sidebar();
                true
            }
            ShellMessage::Select(id) => {
                let previous = self.active_view_id.clone();
                self.set_active_view_id(&id) && previous != self.active_view_id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MENU;

    #[test]
    fn defaults_match_initial_session() {
        let state = ShellState::default();
        assert_eq!(state.active_view_id(), "dashboard");
        assert!(state.is_sidebar_open());
        assert!(!state.is_dark_mode());
        assert_eq!(state.active_entry().map(|entry| entry.label), Some("Dashboard"));
    }

    #[test]
    fn toggles_are_involutions() {
        for start in [false, true] {
            let mut state = ShellState {
                sidebar_open: start,
                dark_mode: start,
                ..ShellState::default()
            };

            state.toggle_sidebar();
            state.toggle_theme();
            assert_eq!(state.is_sidebar_open(), !start);
            assert_eq!(state.is_dark_mode(), !start);

            state.toggle_sidebar();
            state.toggle_theme();
            assert_eq!(state.is_sidebar_open(), start);
            assert_eq!(state.is_dark_mode(), start);
        }
    }

    #[test]
    fn toggles_touch_only_their_flag() {
        let mut state = ShellState::default();
        state.toggle_sidebar();
        assert_eq!(state.active_view_id(), "dashboard");
        assert!(!state.is_dark_mode());

        state.toggle_theme();
        assert_eq!(state.active_view_id(), "dashboard");
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn every_menu_id_can_be_activated() {
        let mut state = ShellState::default();
        for entry in MENU.iter() {
            assert!(state.set_active_view_id(entry.id));
            assert_eq!(state.active_view_id(), entry.id);
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut state = ShellState::default();
        assert!(state.set_active_view_id("orders"));
        assert!(!state.set_active_view_id("reports"));
        assert!(!state.set_active_view_id(""));
        assert!(!state.set_active_view_id("Orders"));
        assert_eq!(state.active_view_id(), "orders");
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = ShellState::default();
        assert!(state.apply(ShellMessage::Select("orders".into())));
        assert!(!state.apply(ShellMessage::Select("orders".into())));
        assert!(!state.apply(ShellMessage::Select("nowhere".into())));
        assert!(state.apply(ShellMessage::ToggleSidebar));
        assert!(state.apply(ShellMessage::ToggleTheme));

        assert_eq!(state.active_view_id(), "orders");
        assert!(!state.is_sidebar_open());
        assert!(state.is_dark_mode());
    }
}
