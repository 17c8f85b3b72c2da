use eframe::egui::{self, RichText, Rounding};
use nav_shell::layout::{main_surface_frame, ShellTheme};
use nav_shell::MenuEntry;

/// Superficie central. Las vistas reales de cada entrada viven fuera de la
/// shell; aquí solo se identifica la vista activa.
pub fn draw_workspace(ctx: &egui::Context, theme: &ShellTheme, active: Option<&MenuEntry>) {
    egui::CentralPanel::default()
        .frame(main_surface_frame(theme))
        .show(ctx, |ui| {
            let Some(entry) = active else {
                ui.label(RichText::new("No view selected").color(theme.text_muted));
                return;
            };

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(4.0, 28.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, Rounding::same(2.0), entry.color);
                ui.heading(
                    RichText::new(format!("{} {}", entry.icon, entry.label))
                        .color(theme.text_primary),
                );
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} · {}", entry.section.title(), entry.id))
                    .color(theme.text_muted)
                    .small(),
            );
        });
}
