use eframe::egui::{self, Color32, Margin, Stroke};

/// Conjunto mínimo de tokens de estilo utilizados por los componentes del shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellTheme {
    pub root_background: Color32,
    pub surface_background: Color32,
    pub header_background: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub badge: Color32,
    pub status_ok: Color32,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ShellTheme {
    pub fn dark() -> Self {
        Self {
            root_background: Color32::from_rgb(24, 26, 30),
            surface_background: Color32::from_rgb(32, 34, 38),
            header_background: Color32::from_rgb(40, 42, 48),
            border: Color32::from_rgba_unmultiplied(70, 72, 78, 160),
            text_primary: Color32::from_rgb(232, 233, 239),
            text_muted: Color32::from_rgb(172, 176, 184),
            accent: Color32::from_rgb(0, 173, 181),
            accent_soft: Color32::from_rgb(30, 64, 70),
            badge: Color32::from_rgb(227, 30, 106),
            status_ok: Color32::from_rgb(33, 198, 133),
        }
    }

    pub fn light() -> Self {
        Self {
            root_background: Color32::from_rgb(242, 243, 245),
            surface_background: Color32::from_rgb(255, 255, 255),
            header_background: Color32::from_rgb(250, 250, 252),
            border: Color32::from_rgba_unmultiplied(200, 204, 212, 200),
            text_primary: Color32::from_rgb(28, 30, 36),
            text_muted: Color32::from_rgb(104, 110, 122),
            accent: Color32::from_rgb(0, 173, 181),
            accent_soft: Color32::from_rgb(214, 242, 243),
            badge: Color32::from_rgb(227, 30, 106),
            status_ok: Color32::from_rgb(33, 198, 133),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Controla la visibilidad y el ancho de los paneles principales del layout.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub show_header: bool,
    pub show_navigation: bool,
    pub header_height: f32,
    pub navigation_width: f32,
    pub collapsed_navigation_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            show_navigation: true,
            header_height: 64.0,
            navigation_width: 240.0,
            collapsed_navigation_width: 64.0,
        }
    }
}

impl LayoutConfig {
    /// Ancho del panel lateral: completo con etiquetas, o solo la columna de
    /// iconos cuando está plegado.
    pub fn navigation_panel_width(&self, open: bool) -> f32 {
        if open {
            self.navigation_width
        } else {
            self.collapsed_navigation_width
        }
    }
}

/// Envoltorio utilitario que pinta un panel principal centralizado.
pub fn main_surface_frame(theme: &ShellTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.root_background)
        .stroke(Stroke::new(1.0, theme.border))
        .inner_margin(Margin {
            left: 18.0,
            right: 18.0,
            top: 18.0,
            bottom: 14.0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_navigation_is_narrower() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.navigation_panel_width(true), 240.0);
        assert_eq!(layout.navigation_panel_width(false), 64.0);
    }

    #[test]
    fn theme_follows_mode_flag() {
        assert_eq!(ShellTheme::for_mode(true), ShellTheme::dark());
        assert_eq!(ShellTheme::for_mode(false), ShellTheme::light());
        assert_ne!(
            ShellTheme::dark().surface_background,
            ShellTheme::light().surface_background
        );
    }
}
