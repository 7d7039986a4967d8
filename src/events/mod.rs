pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard_navigation;
pub use pointer::{wire_card_hover, wire_contact_items, wire_video_cards};
