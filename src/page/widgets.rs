//! Open/closed state for the mobile menu, the dashboard modal and the
//! chatbot widget.
//!
//! The browser binding keeps one of each and mirrors `is_open()` onto the
//! element's class list after every change.

/// Key that dismisses the modal and the chatbot.
pub const ESCAPE: &str = "Escape";

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Class on the menu button while open.
    pub const BUTTON_CLASS: &'static str = "active";
    /// Class on the link list while open.
    pub const LINKS_CLASS: &'static str = "mobile-open";

    /// Start from whatever the page markup says.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation link was followed.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}

/// Full-screen dashboard modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub const CLASS: &'static str = "active";

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Body `overflow` style: scrolling is locked while the modal is open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    /// Returns `true` if the key closed the modal.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == ESCAPE {
            self.close();
            true
        } else {
            false
        }
    }
}

/// Floating chatbot widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chatbot {
    open: bool,
}

impl Chatbot {
    pub const CLASS: &'static str = "open";

    /// Start from whatever the page markup says.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A click anywhere on the page; clicks outside the widget close it.
    pub fn clicked(&mut self, inside_widget: bool) {
        if self.open && !inside_widget {
            self.open = false;
        }
    }

    /// Returns `true` if the key closed the widget.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == ESCAPE {
            self.open = false;
            true
        } else {
            false
        }
    }
}
