use eframe::egui::{self, Align, Align2, FontId, Layout, Margin, RichText, Rounding, Sense, Stroke};

use crate::layout::{LayoutConfig, ShellTheme};
use crate::state::ShellMessage;

pub const SIDEBAR_TOGGLE_GLYPH: &str = "☰";
pub const NOTIFICATION_GLYPH: &str = "🔔";
/// Se muestra en modo oscuro: invita a volver al tema claro.
pub const SUN_GLYPH: &str = "☀";
/// Se muestra en modo claro.
pub const MOON_GLYPH: &str = "🌙";
pub const THEME_TOGGLE_TOOLTIP: &str = "Toggle theme";

/// Acciones que el header solicita al dueño del estado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleSidebar,
    ToggleTheme,
}

impl From<HeaderAction> for ShellMessage {
    fn from(action: HeaderAction) -> Self {
        match action {
            HeaderAction::ToggleSidebar => ShellMessage::ToggleSidebar,
            HeaderAction::ToggleTheme => ShellMessage::ToggleTheme,
        }
    }
}

/// Contenido estático del header: marca, identidad y contador de avisos.
///
/// En una instalación real estos datos vienen de servicios externos; aquí se
/// tratan como constantes de configuración y nunca dependen del estado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderChrome {
    pub title: String,
    pub subtitle: Option<String>,
    /// Siglas del recuadro de logo; sin ellas no se pinta el logo.
    pub logo_acronym: Option<String>,
    pub user_name: String,
    pub user_role: String,
    pub user_initials: String,
    pub notification_count: u32,
}

impl Default for HeaderChrome {
    fn default() -> Self {
        Self {
            title: "Jay's Frames".to_string(),
            subtitle: Some("Production Analytics".to_string()),
            logo_acronym: None,
            user_name: "Jay Johnson".to_string(),
            user_role: "Owner".to_string(),
            user_initials: "JJ".to_string(),
            notification_count: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderProps {
    pub title: String,
    pub subtitle: Option<String>,
    pub logo_acronym: Option<String>,
    pub sidebar_toggle_glyph: &'static str,
    pub notification_glyph: &'static str,
    pub notification_badge: String,
    pub theme_glyph: &'static str,
    pub theme_tooltip: &'static str,
    pub user_initials: String,
    pub user_name: String,
    pub user_role: String,
}

impl HeaderProps {
    /// Proyección pura del header: mismo `dark_mode` y mismo `chrome` producen
    /// siempre las mismas props.
    pub fn project(dark_mode: bool, chrome: &HeaderChrome) -> Self {
        Self {
            title: chrome.title.clone(),
            subtitle: chrome.subtitle.clone(),
            logo_acronym: chrome.logo_acronym.clone(),
            sidebar_toggle_glyph: SIDEBAR_TOGGLE_GLYPH,
            notification_glyph: NOTIFICATION_GLYPH,
            notification_badge: chrome.notification_count.to_string(),
            theme_glyph: theme_glyph(dark_mode),
            theme_tooltip: THEME_TOGGLE_TOOLTIP,
            user_initials: chrome.user_initials.clone(),
            user_name: chrome.user_name.clone(),
            user_role: chrome.user_role.clone(),
        }
    }
}

pub fn theme_glyph(dark_mode: bool) -> &'static str {
    if dark_mode {
        SUN_GLYPH
    } else {
        MOON_GLYPH
    }
}

pub fn draw_header(
    ctx: &egui::Context,
    layout: &LayoutConfig,
    theme: &ShellTheme,
    props: &HeaderProps,
    on_action: &mut dyn FnMut(HeaderAction),
) {
    if !layout.show_header {
        return;
    }

    egui::TopBottomPanel::top("shell_header")
        .exact_height(layout.header_height)
        .frame(
            egui::Frame::none()
                .fill(theme.header_background)
                .stroke(Stroke::new(1.0, theme.border))
                .inner_margin(Margin {
                    left: 16.0,
                    right: 16.0,
                    top: 10.0,
                    bottom: 10.0,
                }),
        )
        .show(ctx, |ui| {
            ui.set_height(layout.header_height - 20.0);
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                let toggle = egui::Button::new(
                    RichText::new(props.sidebar_toggle_glyph)
                        .size(20.0)
                        .color(theme.text_primary),
                )
                .frame(false)
                .min_size(egui::vec2(32.0, 32.0));
                if ui.add(toggle).clicked() {
                    on_action(HeaderAction::ToggleSidebar);
                }

                if let Some(acronym) = props.logo_acronym.as_deref() {
                    draw_logo(ui, theme, acronym);
                }

                ui.vertical(|ui| {
                    ui.strong(
                        RichText::new(&props.title)
                            .color(theme.text_primary)
                            .size(18.0),
                    );
                    if let Some(subtitle) = props.subtitle.as_ref() {
                        ui.small(RichText::new(subtitle).color(theme.text_muted));
                    }
                });

                // De derecha a izquierda: identidad, tema, avisos.
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 12.0;
                    draw_user(ui, theme, props);

                    let theme_button = egui::Button::new(
                        RichText::new(props.theme_glyph)
                            .size(18.0)
                            .color(theme.text_primary),
                    )
                    .frame(false)
                    .min_size(egui::vec2(32.0, 32.0));
                    if ui
                        .add(theme_button)
                        .on_hover_text(props.theme_tooltip)
                        .clicked()
                    {
                        on_action(HeaderAction::ToggleTheme);
                    }

                    draw_notifications(ui, theme, props);
                });
            });
        });
}

fn draw_logo(ui: &mut egui::Ui, theme: &ShellTheme, acronym: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect(
        rect,
        Rounding::same(6.0),
        theme.accent_soft,
        Stroke::new(1.5, theme.accent),
    );

    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        acronym,
        FontId::proportional(14.0),
        theme.text_primary,
    );
}

// El botón de avisos no tiene acción propia: el contador es decorativo.
fn draw_notifications(ui: &mut egui::Ui, theme: &ShellTheme, props: &HeaderProps) {
    let bell = egui::Button::new(
        RichText::new(props.notification_glyph)
            .size(18.0)
            .color(theme.text_primary),
    )
    .frame(false)
    .min_size(egui::vec2(32.0, 32.0));
    let response = ui.add(bell);

    let center = response.rect.right_top() + egui::vec2(-6.0, 6.0);
    let painter = ui.painter();
    painter.circle_filled(center, 8.0, theme.badge);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        &props.notification_badge,
        FontId::proportional(10.0),
        egui::Color32::WHITE,
    );
}

fn draw_user(ui: &mut egui::Ui, theme: &ShellTheme, props: &HeaderProps) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(&props.user_name)
                .color(theme.text_primary)
                .strong(),
        );
        ui.small(RichText::new(&props.user_role).color(theme.text_muted));
    });

    let (rect, _) = ui.allocate_exact_size(egui::vec2(34.0, 34.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), 17.0, theme.accent);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &props.user_initials,
        FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}
