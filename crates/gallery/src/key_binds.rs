use crate::message::Message;
use cosmic::iced::keyboard::{Key, Modifiers, key::Named};
use gallery_types::{GalleryEvent, KeyCode};

/// Translates a toolkit key into the gallery's key set
pub fn key_code(key: &Key) -> KeyCode {
    match key {
        Key::Named(Named::ArrowLeft) => KeyCode::ArrowLeft,
        Key::Named(Named::ArrowRight) => KeyCode::ArrowRight,
        Key::Named(Named::ArrowUp) => KeyCode::ArrowUp,
        Key::Named(Named::ArrowDown) => KeyCode::ArrowDown,
        Key::Named(Named::Home) => KeyCode::Home,
        Key::Named(Named::End) => KeyCode::End,
        Key::Named(Named::Enter) => KeyCode::Enter,
        Key::Named(Named::Escape) => KeyCode::Escape,
        Key::Named(Named::Space) => KeyCode::Space,
        Key::Character(c) => KeyCode::Character(c.to_string()),
        _ => KeyCode::Unidentified,
    }
}

/// Every key press goes to the gallery, which ignores keys it has no use for
pub fn key_press_handler(key: Key, _modifiers: Modifiers) -> Option<Message> {
    Some(Message::Gallery(GalleryEvent::KeyDown(key_code(&key))))
}
