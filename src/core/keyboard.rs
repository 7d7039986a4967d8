#[inline]
pub fn starts_keyboard_navigation(key: &str) -> bool {
    key == "Tab"
}

/// Whether the page is currently being driven from the keyboard.
///
/// Set by Tab, cleared by any pointer press. Other keys leave it alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardNavigation {
    active: bool,
}

impl KeyboardNavigation {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true when the marker state changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if starts_keyboard_navigation(key) && !self.active {
            self.active = true;
            return true;
        }
        false
    }

    /// Returns true when the marker state changed.
    pub fn on_pointer_down(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
