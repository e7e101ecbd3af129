#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation menu.
///
/// While open the page body must not scroll behind the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a nav link always closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the body's `overflow` style.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
