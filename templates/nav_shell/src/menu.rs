use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// Secciones fijas en las que se agrupa el menú lateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Main,
    BusinessIntelligence,
    System,
}

impl NavSection {
    /// Orden de presentación de las secciones.
    pub const ALL: [NavSection; 3] = [
        NavSection::Main,
        NavSection::BusinessIntelligence,
        NavSection::System,
    ];

    pub fn title(self) -> &'static str {
        match self {
            NavSection::Main => "Main",
            NavSection::BusinessIntelligence => "Business Intelligence",
            NavSection::System => "System",
        }
    }
}

/// Destino navegable del menú lateral. Las entradas son constantes de
/// compilación: el usuario nunca las modifica.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: Color32,
    pub section: NavSection,
}

impl MenuEntry {
    const fn new(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        color: Color32,
        section: NavSection,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            color,
            section,
        }
    }
}

pub static MENU: [MenuEntry; 10] = [
    MenuEntry::new(
        "dashboard",
        "Dashboard",
        "▦",
        Color32::from_rgb(0x00, 0xAD, 0xB5),
        NavSection::Main,
    ),
    MenuEntry::new(
        "orders",
        "Orders",
        "📦",
        Color32::from_rgb(0xE3, 0x1E, 0x6A),
        NavSection::Main,
    ),
    MenuEntry::new(
        "intake",
        "New Order",
        "📅",
        Color32::from_rgb(0x21, 0xC6, 0x85),
        NavSection::Main,
    ),
    MenuEntry::new(
        "production",
        "Production",
        "🏭",
        Color32::from_rgb(0xD4, 0xAF, 0x37),
        NavSection::Main,
    ),
    MenuEntry::new(
        "customers",
        "Customers",
        "👥",
        Color32::from_rgb(0x63, 0x66, 0xF1),
        NavSection::Main,
    ),
    MenuEntry::new(
        "goals",
        "Goals",
        "🎯",
        Color32::from_rgb(0xF5, 0x9E, 0x0B),
        NavSection::BusinessIntelligence,
    ),
    MenuEntry::new(
        "analytics",
        "Analytics",
        "📊",
        Color32::from_rgb(0x8B, 0x5C, 0xF6),
        NavSection::BusinessIntelligence,
    ),
    MenuEntry::new(
        "ai-coach",
        "AI Coach",
        "⚡",
        Color32::from_rgb(0xEC, 0x48, 0x99),
        NavSection::BusinessIntelligence,
    ),
    MenuEntry::new(
        "messages",
        "Messages",
        "💬",
        Color32::from_rgb(0x10, 0xB9, 0x81),
        NavSection::System,
    ),
    MenuEntry::new(
        "settings",
        "Settings",
        "⚙",
        Color32::from_rgb(0x6B, 0x72, 0x80),
        NavSection::System,
    ),
];

static SECTIONS: Lazy<Vec<(NavSection, Vec<&'static MenuEntry>)>> = Lazy::new(|| {
    NavSection::ALL
        .iter()
        .map(|section| {
            let entries: Vec<&'static MenuEntry> = MENU
                .iter()
                .filter(|entry| entry.section == *section)
                .collect();
            (*section, entries)
        })
        .collect()
});

pub fn entry(id: &str) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.id == id)
}

pub fn is_known(id: &str) -> bool {
    entry(id).is_some()
}

/// Agrupa el menú por la etiqueta `section` de cada entrada, respetando el
/// orden de [`NavSection::ALL`] y el orden del menú dentro de cada grupo.
pub fn sections() -> &'static [(NavSection, Vec<&'static MenuEntry>)] {
    SECTIONS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique() {
        let ids: HashSet<&str> = MENU.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), MENU.len());
    }

    #[test]
    fn sections_keep_fixed_sizes_and_order() {
        let layout: Vec<(&str, usize)> = sections()
            .iter()
            .map(|(section, entries)| (section.title(), entries.len()))
            .collect();
        assert_eq!(
            layout,
            vec![("Main", 5), ("Business Intelligence", 3), ("System", 2)]
        );
    }

    #[test]
    fn sections_preserve_menu_order() {
        let flattened: Vec<&str> = sections()
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|entry| entry.id))
            .collect();
        let menu: Vec<&str> = MENU.iter().map(|entry| entry.id).collect();
        assert_eq!(flattened, menu);
    }

    #[test]
    fn lookup_by_id() {
        let coach = entry("ai-coach").expect("ai-coach está en el menú");
        assert_eq!(coach.label, "AI Coach");
        assert_eq!(coach.section, NavSection::BusinessIntelligence);
        assert!(is_known("settings"));
        assert!(!is_known("reports"));
        assert!(!is_known(""));
    }
}
