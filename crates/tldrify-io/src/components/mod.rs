//! Dioxus UI components for tldrify.
//!
//! Provides the summaries sidebar, the chat pane with its toolbar and
//! composer (text area, drop zone, attachment list), chat bubbles, the
//! settings panel with its slider control, and the not-found page.

mod chat;
mod chat_message;
mod composer;
mod file_icon;
mod file_list;
mod not_found;
mod settings_panel;
mod sidebar;
mod slider_control;
mod toolbar;

pub use chat::ChatPane;
pub use chat_message::ChatMessage;
pub use composer::{Composer, DROP_ZONE_ID, FILE_INPUT_ID};
pub use file_icon::FileIcon;
pub use file_list::FileList;
pub use not_found::NotFound;
pub use settings_panel::SettingsPanel;
pub use sidebar::Sidebar;
pub use slider_control::SliderControl;
pub use toolbar::Toolbar;
