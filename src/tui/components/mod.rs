// Components module - reusable UI building blocks
//
// Routed views:
// - Heroes: the hero list with its add field (`/heroes`)
// - Hero detail: the name editor (`/detail/:id`)
// - Hero: one row of the list
//
// Shell components are rendered around every view:
// - Title bar: App name, current url, in-flight spinner
// - Messages panel: Activity feed from the hero service
// - Logs panel: System log entries
// - Status bar: Key hints

pub mod formatters;
pub mod hero;
pub mod hero_detail;
pub mod heroes;
pub mod logs_panel;
pub mod messages_panel;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
