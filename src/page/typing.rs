//! Typewriter headline that types a role, holds it, erases it, and moves on.

use std::time::Duration;

/// Delay before the first step.
pub const START_DELAY: Duration = Duration::from_millis(1000);
const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold time once a role is fully typed.
const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Pause after a role is fully erased.
const NEXT_ROLE_DELAY: Duration = Duration::from_millis(500);

/// Roles shown on the portfolio headline.
pub const DEFAULT_ROLES: &[&str] = &[
    "Machine Learning Engineer",
    "Data Scientist",
    "AI Researcher",
    "Business Intelligence Pro",
    "GenAI Developer",
];

/// Text to show after a step and how long to wait before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay: Duration,
}

/// Cycles through a list of roles one character at a time.
#[derive(Debug, Clone)]
pub struct TypingCycler {
    roles: Vec<String>,
    role_index: usize,
    /// Characters of the current role on screen.
    char_index: usize,
    deleting: bool,
}

impl TypingCycler {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            role_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Type or erase one character. `None` when there are no roles.
    pub fn step(&mut self) -> Option<TypingStep> {
        let role = self.roles.get(self.role_index)?;
        let len = role.chars().count();

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY
        };
        let text: String = role.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            delay = HOLD_DELAY;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            delay = NEXT_ROLE_DELAY;
        }

        Some(TypingStep { text, delay })
    }
}

impl Default for TypingCycler {
    fn default() -> Self {
        Self::new(DEFAULT_ROLES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_full_cycle() {
        let mut cycler = TypingCycler::new(["ab", "c"]);
        let steps: Vec<_> = std::iter::from_fn(|| cycler.step())
            .take(8)
            .map(|s| (s.text, s.delay))
            .collect();

        assert_eq!(
            steps,
            vec![
                ("a".to_string(), ms(100)),
                ("ab".to_string(), ms(2000)),
                ("a".to_string(), ms(50)),
                ("".to_string(), ms(500)),
                ("c".to_string(), ms(2000)),
                ("".to_string(), ms(500)),
                ("a".to_string(), ms(100)),
                ("ab".to_string(), ms(2000)),
            ]
        );
    }

    #[test]
    fn test_multibyte_roles() {
        let mut cycler = TypingCycler::new(["né"]);
        assert_eq!(cycler.step().unwrap().text, "n");
        assert_eq!(cycler.step().unwrap().text, "né");
        assert!(cycler.is_deleting());
    }

    #[test]
    fn test_empty_role_is_skipped() {
        let mut cycler = TypingCycler::new(["", "x"]);
        let hold = cycler.step().unwrap();
        assert_eq!(hold.text, "");
        let next = cycler.step().unwrap();
        assert_eq!(next.delay, ms(500));
        assert_eq!(cycler.role_index(), 1);
    }

    #[test]
    fn test_no_roles() {
        let mut cycler = TypingCycler::new(Vec::<String>::new());
        assert!(cycler.step().is_none());
    }

    #[test]
    fn test_default_roles() {
        let mut cycler = TypingCycler::default();
        assert_eq!(cycler.step().unwrap().text, "M");
    }
}
