use eframe::egui::{self, Color32, Margin, RichText, Rounding, Sense, Stroke};

use crate::layout::{LayoutConfig, ShellTheme};
use crate::menu::{self, NavSection};

pub const SYSTEM_STATUS_LABEL: &str = "All Systems Active";

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    pub sections: Vec<SidebarSection>,
    pub footer: Option<SystemStatus>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarSection {
    pub section: NavSection,
    pub title: &'static str,
    pub items: Vec<SidebarItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub color: Color32,
    /// `None` con el panel plegado: solo se pinta el icono.
    pub label: Option<&'static str>,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemStatus {
    pub label: &'static str,
}

impl SidebarProps {
    /// Proyecta el menú fijo sobre el estado actual. Un `active_view_id` que no
    /// coincide con ninguna entrada deja todas las entradas sin marcar.
    pub fn project(active_view_id: &str, is_open: bool) -> Self {
        let sections = menu::sections()
            .iter()
            .map(|(section, entries)| SidebarSection {
                section: *section,
                title: section.title(),
                items: entries
                    .iter()
                    .map(|entry| SidebarItem {
                        id: entry.id,
                        icon: entry.icon,
                        color: entry.color,
                        label: is_open.then_some(entry.label),
                        selected: entry.id == active_view_id,
                    })
                    .collect(),
            })
            .collect();

        Self {
            is_open,
            sections,
            footer: is_open.then_some(SystemStatus {
                label: SYSTEM_STATUS_LABEL,
            }),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn selected_ids(&self) -> Vec<&'static str> {
        self.items()
            .filter(|item| item.selected)
            .map(|item| item.id)
            .collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.items().filter_map(|item| item.label).collect()
    }
}

pub fn draw_sidebar(
    ctx: &egui::Context,
    layout: &LayoutConfig,
    theme: &ShellTheme,
    props: &SidebarProps,
    on_select: &mut dyn FnMut(&str),
) {
    if !layout.show_navigation {
        return;
    }

    let panel_id = if props.is_open {
        "navigation_panel"
    } else {
        "navigation_panel_collapsed"
    };

    egui::SidePanel::left(panel_id)
        .resizable(false)
        .exact_width(layout.navigation_panel_width(props.is_open))
        .frame(
            egui::Frame::none()
                .fill(theme.surface_background)
                .stroke(Stroke::new(1.0, theme.border))
                .inner_margin(Margin {
                    left: 10.0,
                    right: 10.0,
                    top: 18.0,
                    bottom: 18.0,
                }),
        )
        .show(ctx, |ui| {
            ui.set_width(ui.available_width());

            egui::TopBottomPanel::bottom("shell_sidebar_footer")
                .show_separator_line(false)
                .frame(egui::Frame::none())
                .show_inside(ui, |ui| {
                    if let Some(status) = props.footer.as_ref() {
                        draw_status(ui, theme, status);
                    }
                });

            egui::ScrollArea::vertical()
                .id_source("shell_sidebar_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for section in &props.sections {
                        if props.is_open {
                            ui.label(
                                RichText::new(section.title)
                                    .color(theme.text_muted)
                                    .size(11.0),
                            );
                        } else {
                            ui.separator();
                        }
                        ui.add_space(6.0);
                        for item in &section.items {
                            let response = nav_entry(ui, theme, item);
                            if response.clicked() {
                                on_select(item.id);
                            }
                        }
                        ui.add_space(14.0);
                    }
                });
        });
}

fn nav_entry(ui: &mut egui::Ui, theme: &ShellTheme, item: &SidebarItem) -> egui::Response {
    let text = match item.label {
        Some(label) => format!("{}  {}", item.icon, label),
        None => item.icon.to_string(),
    };
    let mut text = RichText::new(text).size(14.0).color(if item.selected {
        item.color
    } else {
        theme.text_primary
    });
    if item.selected {
        text = text.strong();
    }

    let fill = if item.selected {
        item.color.linear_multiply(0.15)
    } else {
        Color32::TRANSPARENT
    };

    let button = egui::Button::new(text)
        .fill(fill)
        .stroke(Stroke::NONE)
        .rounding(Rounding::same(8.0))
        .min_size(egui::vec2(ui.available_width(), 34.0));

    let mut response = ui.add(button);
    if item.selected {
        let rect = response.rect;
        let bar = egui::Rect::from_min_max(
            rect.right_top() + egui::vec2(-3.0, 6.0),
            rect.right_bottom() + egui::vec2(0.0, -6.0),
        );
        ui.painter().rect_filled(bar, Rounding::same(1.5), item.color);
    }
    if item.label.is_none() {
        if let Some(entry) = menu::entry(item.id) {
            response = response.on_hover_text(entry.label);
        }
    }
    response
}

fn draw_status(ui: &mut egui::Ui, theme: &ShellTheme, status: &SystemStatus) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 4.0, theme.status_ok);
        ui.label(
            RichText::new(status.label)
                .color(theme.text_muted)
                .size(12.0),
        );
    });
}
