use log::debug;
use nav_shell::components::{HeaderChrome, HeaderProps, SidebarProps};
use nav_shell::layout::{LayoutConfig, ShellTheme};
use nav_shell::{ShellMessage, ShellState};

use crate::config::AppConfig;

/// Estado raíz de la aplicación. Es el único escritor de [`ShellState`]: los
/// componentes encolan mensajes durante el frame y [`AppState::flush`] los
/// aplica al terminar.
#[derive(Debug, Default)]
pub struct AppState {
    pub shell: ShellState,
    pub layout: LayoutConfig,
    pub chrome: HeaderChrome,
    pending: Vec<ShellMessage>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            chrome: HeaderChrome::from(&config.chrome),
            ..Self::default()
        }
    }

    pub fn theme(&self) -> ShellTheme {
        ShellTheme::for_mode(self.shell.is_dark_mode())
    }

    pub fn header_props(&self) -> HeaderProps {
        HeaderProps::project(self.shell.is_dark_mode(), &self.chrome)
    }

    pub fn sidebar_props(&self) -> SidebarProps {
        SidebarProps::project(self.shell.active_view_id(), self.shell.is_sidebar_open())
    }

    pub fn queue(&mut self, message: ShellMessage) {
        self.pending.push(message);
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[ShellMessage] {
        &self.pending
    }

    /// Aplica los mensajes encolados en orden y devuelve cuántos cambiaron el
    /// estado.
    pub fn flush(&mut self) -> usize {
        let mut changed = 0;
        for message in std::mem::take(&mut self.pending) {
            debug!("aplicando {message:?}");
            if self.shell.apply(message) {
                changed += 1;
            }
        }
        changed
    }
}
