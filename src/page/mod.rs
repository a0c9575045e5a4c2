//! Behavior of the rest of the portfolio page.
//!
//! Each piece here decides *what* should happen (which text to show, which
//! class to set, how far to move) without touching a DOM. The
//! `neurofield-web` crate applies the results to the real page.
//!
//! | Feature | Type / function |
//! |---------|-----------------|
//! | Headline typewriter | [`TypingCycler`] |
//! | Stats count-up | [`CounterAnimation`] |
//! | Cursor trail | [`CursorFollower`] |
//! | Magnetic buttons | [`magnetic_offset`] |
//! | Navbar and hero | [`navbar_scrolled`], [`HeroParallax`] |
//! | Project filter | [`filter_action`] |
//! | Menu, modal, chatbot | [`MobileMenu`], [`Modal`], [`Chatbot`] |
//! | Startup timing | [`needs_dom_ready`], [`is_loaded`] |

pub mod counter;
pub mod filter;
pub mod lifecycle;
pub mod pointer_fx;
pub mod scroll;
pub mod typing;
pub mod widgets;

pub use counter::{CounterAnimation, CounterFrame};
pub use filter::{filter_action, FilterAction};
pub use lifecycle::{is_loaded, needs_dom_ready};
pub use pointer_fx::{css_translate, cursor_trail_enabled, magnetic_offset, CursorFollower};
pub use scroll::{navbar_scrolled, HeroParallax, ObserverOptions};
pub use typing::{TypingCycler, TypingStep};
pub use widgets::{Chatbot, MobileMenu, Modal};
