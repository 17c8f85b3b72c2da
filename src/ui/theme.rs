use eframe::egui::{self, FontFamily, FontId, Stroke, TextStyle, Visuals};
use log::debug;
use nav_shell::layout::ShellTheme;

/// Tipografía base; se instala una sola vez al crear la aplicación.
pub fn install_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

pub fn build_visuals(dark_mode: bool) -> Visuals {
    let tokens = ShellTheme::for_mode(dark_mode);
    let mut visuals = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.panel_fill = tokens.surface_background;
    visuals.window_fill = tokens.surface_background;
    visuals.extreme_bg_color = tokens.root_background;
    visuals.window_stroke = Stroke::new(1.0, tokens.border);
    visuals.selection.bg_fill = tokens.accent_soft;
    visuals.selection.stroke = Stroke::new(1.0, tokens.accent);
    visuals.hyperlink_color = tokens.accent;
    visuals
}

/// Sincroniza los visuals de egui con el flag de tema. Reescribe el estilo
/// siempre que difiera de la paleta de la shell, aunque el modo coincida.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = build_visuals(dark_mode);
    if ctx.style().visuals == visuals {
        return;
    }
    debug!("aplicando tema {}", if dark_mode { "oscuro" } else { "claro" });
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_flag() {
        assert!(build_visuals(true).dark_mode);
        assert!(!build_visuals(false).dark_mode);
        assert_eq!(
            build_visuals(false).panel_fill,
            ShellTheme::light().surface_background
        );
    }

    #[test]
    fn apply_switches_context_mode() {
        let ctx = egui::Context::default();
        apply(&ctx, false);
        assert!(!ctx.style().visuals.dark_mode);
        apply(&ctx, true);
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn stock_visuals_of_the_same_mode_are_replaced() {
        let ctx = egui::Context::default();
        ctx.set_visuals(Visuals::light());
        apply(&ctx, false);
        assert_eq!(
            ctx.style().visuals.panel_fill,
            ShellTheme::light().surface_background
        );
        assert_eq!(ctx.style().visuals.hyperlink_color, ShellTheme::light().accent);

        ctx.set_visuals(Visuals::dark());
        apply(&ctx, true);
        assert_eq!(
            ctx.style().visuals.panel_fill,
            ShellTheme::dark().surface_background
        );
    }

    #[test]
    fn system_theme_reset_is_undone_on_next_apply() {
        let ctx = egui::Context::default();
        apply(&ctx, false);
        // eframe reinstala los visuals de serie cuando cambia el tema del sistema.
        ctx.set_visuals(Visuals::light());
        apply(&ctx, false);
        assert_eq!(ctx.style().visuals, build_visuals(false));
    }
}
