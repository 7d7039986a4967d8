use super::constants::{DEFAULT_SECTION_ID, ICON_BARS_HTML, ICON_CLOSE_HTML};

/// Glyph shown on the mobile menu trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

impl MenuIcon {
    #[inline]
    pub fn markup(self) -> &'static str {
        match self {
            MenuIcon::Bars => ICON_BARS_HTML,
            MenuIcon::Close => ICON_CLOSE_HTML,
        }
    }
}

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[inline]
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    /// Flip the panel and return the glyph for the new state. The glyph is
    /// chosen from the state read before the flip.
    pub fn toggle(&mut self) -> MenuIcon {
        let was_open = self.open;
        self.open = !was_open;
        if was_open {
            MenuIcon::Bars
        } else {
            MenuIcon::Close
        }
    }

    pub fn close(&mut self) -> MenuIcon {
        self.open = false;
        MenuIcon::Bars
    }
}

/// Which content section is currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    current: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: DEFAULT_SECTION_ID.to_string(),
        }
    }
}

impl PageState {
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Record `section_id` as current. Returns the previous id.
    pub fn navigate(&mut self, section_id: &str) -> String {
        std::mem::replace(&mut self.current, section_id.to_string())
    }
}

/// Position of the first candidate whose identifier equals `target`.
///
/// Candidates without an identifier never match. At most one position is
/// returned, so at most one section or link ends up active.
pub fn first_match<'a, I>(candidates: I, target: &str) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .position(|id| id.is_some_and(|id| id == target))
}

/// Activation flags for every candidate: only the first match is set.
pub fn activation_mask<'a, I>(candidates: I, target: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let ids: Vec<Option<&str>> = candidates.into_iter().collect();
    let hit = first_match(ids.iter().copied(), target);
    (0..ids.len()).map(|i| Some(i) == hit).collect()
}
