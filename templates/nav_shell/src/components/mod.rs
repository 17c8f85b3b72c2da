pub mod header;
pub mod sidebar;

pub use header::{draw_header, HeaderAction, HeaderChrome, HeaderProps};
pub use sidebar::{draw_sidebar, SidebarItem, SidebarProps, SidebarSection, SystemStatus};
