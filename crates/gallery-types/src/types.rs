use crate::ThumbnailId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index reached from `current` in a list of `len` items, wrapping at both ends.
    /// `len` must be non-zero.
    pub fn step(self, current: usize, len: usize) -> usize {
        match self {
            Direction::Next => (current + 1) % len,
            Direction::Previous if current == 0 => len - 1,
            Direction::Previous => current - 1,
        }
    }
}

/// Keys as seen by the gallery, independent of the windowing toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Escape,
    Space,
    Character(String),
    Unidentified,
}

impl KeyCode {
    /// Navigation direction bound to this key, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            KeyCode::ArrowLeft => Some(Direction::Previous),
            KeyCode::ArrowRight => Some(Direction::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A thumbnail in the strip was clicked
    ThumbnailClicked(ThumbnailId),
    /// A key was pressed anywhere in the window
    KeyDown(KeyCode),
    /// The large viewer was clicked
    ViewerClicked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps_at_both_ends() {
        assert_eq!(Direction::Next.step(2, 3), 0);
        assert_eq!(Direction::Previous.step(0, 3), 2);
        assert_eq!(Direction::Next.step(0, 3), 1);
        assert_eq!(Direction::Previous.step(2, 3), 1);
    }

    #[test]
    fn test_step_single_item() {
        assert_eq!(Direction::Next.step(0, 1), 0);
        assert_eq!(Direction::Previous.step(0, 1), 0);
    }

    #[test]
    fn test_only_horizontal_arrows_navigate() {
        assert_eq!(KeyCode::ArrowLeft.direction(), Some(Direction::Previous));
        assert_eq!(KeyCode::ArrowRight.direction(), Some(Direction::Next));
        assert_eq!(KeyCode::ArrowUp.direction(), None);
        assert_eq!(KeyCode::Space.direction(), None);
        assert_eq!(KeyCode::Character("l".into()).direction(), None);
    }
}
