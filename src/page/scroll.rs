//! Scroll-driven page state: navbar, hero parallax, and the
//! intersection-observer settings for reveal, skill bars and counters.

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTORS: &str = ".section-header, .about-content, .project-card, \
    .timeline-item, .skill-category, .publication-card, .chatbot-card, .contact-card, .social-btn";

/// Whether the navbar should carry its `scrolled` class.
pub fn navbar_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > NAVBAR_SCROLL_THRESHOLD
}

/// Transform applied to the hero content while it scrolls away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroParallax {
    /// Parallax for a scroll offset, or `None` once the hero is a full
    /// viewport out of view (the last applied style is left alone).
    pub fn at(scroll_offset: f64, viewport_height: f64) -> Option<Self> {
        if scroll_offset >= viewport_height {
            return None;
        }
        Some(Self {
            translate_y: scroll_offset * 0.3,
            opacity: 1.0 - (scroll_offset / viewport_height) * 0.5,
        })
    }

    pub fn css_transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Options for one intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin around the viewport, if any.
    pub root_margin: Option<&'static str>,
}

/// Section reveal: trigger slightly before the element is fully on screen.
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: Some("0px 0px -50px 0px"),
};

pub const SKILL_BAR_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: None,
};

pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: None,
};

/// Value for a skill bar's `--skill-width` custom property.
pub fn skill_width(raw: &str) -> String {
    format!("{}%", raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn test_parallax() {
        let top = HeroParallax::at(0.0, 800.0).unwrap();
        assert_eq!(top, HeroParallax { translate_y: 0.0, opacity: 1.0 });

        let half = HeroParallax::at(400.0, 800.0).unwrap();
        assert!((half.translate_y - 120.0).abs() < 1e-9);
        assert!((half.opacity - 0.75).abs() < 1e-9);
        assert_eq!(half.css_transform(), "translateY(120px)");

        assert!(HeroParallax::at(800.0, 800.0).is_none());
        assert!(HeroParallax::at(10.0, 0.0).is_none());
    }

    #[test]
    fn test_skill_width() {
        assert_eq!(skill_width("85"), "85%");
        assert_eq!(skill_width(" 70 "), "70%");
    }

    #[test]
    fn test_reveal_selectors_cover_sections() {
        assert_eq!(REVEAL_SELECTORS.split(", ").count(), 9);
        assert!(REVEAL_SELECTORS.contains(".project-card"));
    }
}
