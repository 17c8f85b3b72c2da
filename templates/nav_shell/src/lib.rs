use eframe::egui;
use eframe::{App, CreationContext, Frame, NativeOptions};

pub mod components;
pub mod layout;
pub mod menu;
pub mod state;

pub use menu::{MenuEntry, NavSection, MENU};
pub use state::{ShellMessage, ShellState};

/// Trait que abstrae el estado y comportamiento de una shell basada en egui.
pub trait AppShell: 'static {
    /// Inicializa el estado con el contexto de creación de eframe.
    fn init(&mut self, cc: &CreationContext<'_>);

    /// Renderiza la shell en cada frame con acceso al contexto global de egui.
    fn update(&mut self, ctx: &egui::Context);
}

/// Geometría inicial de la ventana nativa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellWindow {
    pub width: f32,
    pub height: f32,
    pub maximized: bool,
}

impl Default for ShellWindow {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            maximized: false,
        }
    }
}

struct ShellApp {
    shell: Box<dyn AppShell>,
}

impl ShellApp {
    fn new(mut shell: Box<dyn AppShell>, cc: &CreationContext<'_>) -> Self {
        shell.init(cc);
        Self { shell }
    }
}

impl App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.shell.update(ctx);
    }
}

/// Ejecuta una aplicación shell basada en egui.
///
/// El `app_builder` se invoca una única vez para crear el estado concreto que
/// implementa [`AppShell`]. Este estado será inicializado con el
/// [`CreationContext`] y posteriormente recibirá llamadas a [`AppShell::update`]
/// en cada frame.
pub fn run(
    title: &str,
    window: ShellWindow,
    app_builder: impl FnOnce() -> Box<dyn AppShell> + 'static,
) -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(egui::vec2(window.width, window.height))
            .with_maximized(window.maximized),
        follow_system_theme: false,
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Box::new(ShellApp::new(app_builder(), cc))),
    )
}
