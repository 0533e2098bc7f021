//! UI Components
//!
//! Reusable Leptos components.

mod add_action_modal;
mod categorized_items;
mod hierarchy_browser;
mod item_form;
mod media_card;
mod photo_capture;
mod toast_stack;
mod video_player;

pub use add_action_modal::AddActionModal;
pub use categorized_items::CategorizedItems;
pub use hierarchy_browser::HierarchyBrowser;
pub use item_form::ItemForm;
pub use media_card::MediaCard;
pub use photo_capture::PhotoCapture;
pub use toast_stack::ToastStack;
pub use video_player::VideoPlayer;
