//! Count-up animation for the stats section.

/// Total animation length in milliseconds.
pub const DURATION_MS: f64 = 2000.0;
/// Assumed frame length in milliseconds.
pub const FRAME_MS: f64 = 16.0;

/// What to display after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    /// The target has been reached; no more frames are needed.
    pub finished: bool,
}

/// Counts from zero to a target over roughly [`DURATION_MS`].
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / (DURATION_MS / FRAME_MS),
            current: 0.0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Advance one frame. Shows the floored running value until it reaches
    /// the target, then the exact target.
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame {
                value: self.current.floor() as i64,
                finished: false,
            }
        } else {
            CounterFrame {
                value: self.target,
                finished: true,
            }
        }
    }
}

/// Parse a `data-target` value the way browsers parse integers: leading
/// whitespace and an optional sign, then as many digits as there are.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
