//! Character-reveal state machine for the hero tagline.
//!
//! The FLTK timeouts that drive this are thin adapters: they forward ticks
//! as messages and re-arm only while [`Typewriter::is_running`] holds, so no
//! callback ever fires against a finished or cancelled machine.

/// Progressive reveal of a string, one `char` per tick. Reveal counts are
/// char counts, never byte offsets. A completed instance cannot be
/// restarted; build a fresh one to replay the effect.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    revealed: usize,
    started: bool,
    completed: bool,
    cancelled: bool,
    caret_visible: bool,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let completed = source.is_empty();
        Self {
            source,
            revealed: 0,
            started: false,
            completed,
            cancelled: false,
            caret_visible: true,
        }
    }

    /// Called once the start delay has elapsed.
    pub fn start(&mut self) {
        if !self.cancelled {
            self.started = true;
        }
    }

    /// Reveal the next character. Returns true while the effect should keep
    /// ticking; ticks before start, after completion, or after cancel are
    /// no-ops.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.revealed += 1;
        if self.revealed >= self.char_count() {
            self.revealed = self.char_count();
            self.completed = true;
        }
        !self.completed
    }

    /// Toggle the caret. Returns true while the blink timer should re-arm.
    pub fn blink(&mut self) -> bool {
        if !self.is_running() {
            self.caret_visible = false;
            return false;
        }
        self.caret_visible = !self.caret_visible;
        true
    }

    /// Teardown: all pending timer callbacks become no-ops from here on.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.caret_visible = false;
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.completed && !self.cancelled
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The revealed prefix of the source string.
    pub fn revealed_text(&self) -> &str {
        let end = self
            .source
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.source.len());
        &self.source[..end]
    }

    /// What the hero line shows: the prefix, plus the caret while revealing.
    pub fn display(&self) -> String {
        if self.is_running() && self.caret_visible {
            format!("{}|", self.revealed_text())
        } else {
            self.revealed_text().to_string()
        }
    }

    fn char_count(&self) -> usize {
        self.source.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("Hi");
        assert_eq!(tw.revealed_text(), "");

        tw.start();
        assert_eq!(tw.revealed_text(), "");

        assert!(tw.tick());
        assert_eq!(tw.revealed_text(), "H");

        assert!(!tw.tick());
        assert_eq!(tw.revealed_text(), "Hi");
        assert!(tw.is_completed());
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut tw = Typewriter::new("Hi");
        assert!(!tw.tick());
        assert_eq!(tw.revealed_text(), "");
    }

    #[test]
    fn test_tick_after_completion_is_noop() {
        let mut tw = Typewriter::new("a");
        tw.start();
        tw.tick();
        assert!(tw.is_completed());
        assert!(!tw.tick());
        assert_eq!(tw.revealed_text(), "a");
    }

    #[test]
    fn test_cancel_stops_everything() {
        let mut tw = Typewriter::new("hello");
        tw.start();
        tw.tick();
        tw.cancel();
        assert!(!tw.tick());
        assert!(!tw.blink());
        assert_eq!(tw.revealed_text(), "h");
        assert_eq!(tw.display(), "h");
    }

    #[test]
    fn test_cancelled_instance_cannot_start() {
        let mut tw = Typewriter::new("hello");
        tw.cancel();
        tw.start();
        assert!(!tw.is_running());
    }

    #[test]
    fn test_display_is_always_a_prefix() {
        let source = "Võ Tấn Dũng - Backend Developer";
        let mut tw = Typewriter::new(source);
        tw.start();
        let total = source.chars().count();
        for i in 1..=total {
            tw.tick();
            let revealed = tw.revealed_text();
            assert!(source.starts_with(revealed));
            assert_eq!(revealed.chars().count(), i);
        }
        assert_eq!(tw.revealed_text(), source);
    }

    #[test]
    fn test_caret_shown_only_while_revealing() {
        let mut tw = Typewriter::new("Hi");
        tw.start();
        assert_eq!(tw.display(), "|");

        tw.tick();
        assert_eq!(tw.display(), "H|");

        // Blink hides it, blink again shows it
        assert!(tw.blink());
        assert_eq!(tw.display(), "H");
        assert!(tw.blink());
        assert_eq!(tw.display(), "H|");

        tw.tick();
        assert_eq!(tw.display(), "Hi");
        assert!(!tw.blink());
        assert_eq!(tw.display(), "Hi");
    }

    #[test]
    fn test_empty_source_is_born_completed() {
        let mut tw = Typewriter::new("");
        tw.start();
        assert!(tw.is_completed());
        assert!(!tw.tick());
        assert_eq!(tw.display(), "");
    }
}
