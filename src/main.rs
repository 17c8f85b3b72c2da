mod config;
mod state;
mod ui;

use anyhow::anyhow;
use config::AppConfig;
use eframe::egui;
use env_logger::Env;
use log::info;
use nav_shell::{AppShell, ShellWindow};
use state::AppState;

const APP_TITLE: &str = "Jay's Frames";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    info!("iniciando {APP_TITLE}");

    let config = match AppConfig::default_path() {
        Some(path) => AppConfig::load(&path),
        None => AppConfig::default(),
    };

    let window = ShellWindow::from(&config.window);
    nav_shell::run(APP_TITLE, window, move || {
        Box::new(FramesApp::new(&config)) as Box<dyn AppShell>
    })
    .map_err(|e| anyhow!("Eframe error: {}", e))?;

    Ok(())
}

struct FramesApp {
    state: AppState,
}

impl FramesApp {
    fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config),
        }
    }
}

impl AppShell for FramesApp {
    fn init(&mut self, cc: &eframe::CreationContext<'_>) {
        ui::theme::install_typography(&cc.egui_ctx);
        ui::theme::apply(&cc.egui_ctx, self.state.shell.is_dark_mode());
    }

    fn update(&mut self, ctx: &egui::Context) {
        ui::draw_ui(ctx, &mut self.state);
    }
}
