use eframe::egui;
use nav_shell::components::{draw_header, draw_sidebar};
use nav_shell::ShellMessage;

use crate::state::AppState;

pub mod theme;
pub mod workspace;

/// Pinta un frame completo y aplica, al final, los cambios pedidos por los
/// componentes.
pub fn draw_ui(ctx: &egui::Context, state: &mut AppState) {
    theme::apply(ctx, state.shell.is_dark_mode());

    let shell_theme = state.theme();
    let header = state.header_props();
    let sidebar = state.sidebar_props();
    let mut messages: Vec<ShellMessage> = Vec::new();

    draw_header(ctx, &state.layout, &shell_theme, &header, &mut |action| {
        messages.push(action.into())
    });
    draw_sidebar(ctx, &state.layout, &shell_theme, &sidebar, &mut |id| {
        messages.push(ShellMessage::Select(id.to_string()))
    });
    workspace::draw_workspace(ctx, &shell_theme, state.shell.active_entry());

    for message in messages {
        state.queue(message);
    }
    if state.flush() > 0 {
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frames_leave_state_untouched() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();
        let before = state.shell.clone();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| draw_ui(ctx, &mut state));
        }

        assert_eq!(state.shell, before);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn theme_change_reaches_the_context() {
        let ctx = egui::Context::default();
        let mut state = AppState::default();
        state.shell.toggle_theme();

        let _ = ctx.run(egui::RawInput::default(), |ctx| draw_ui(ctx, &mut state));
        assert!(ctx.style().visuals.dark_mode);
    }
}
