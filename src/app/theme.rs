use super::settings::ThemeMode;

/// The two visual modes every themed widget branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Resolve a stored preference against the operating system probe.
pub fn resolve(mode: ThemeMode, system_dark: bool) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::SystemDefault => {
            if system_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Theme lifecycle. Until the stored preference has been resolved the state
/// is `Uninitialized`: the toggle affordance is inert and the UI paints with
/// the neutral placeholder palette, so there is never a flash of a wrongly
/// assumed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    Uninitialized,
    Ready(Theme),
}

impl ThemeState {
    pub fn new() -> Self {
        ThemeState::Uninitialized
    }

    /// Resolve the stored preference. Idempotent: re-initializing keeps the
    /// already resolved theme.
    pub fn initialize(&mut self, mode: ThemeMode, system_dark: bool) -> Theme {
        match *self {
            ThemeState::Ready(theme) => theme,
            ThemeState::Uninitialized => {
                let theme = resolve(mode, system_dark);
                *self = ThemeState::Ready(theme);
                theme
            }
        }
    }

    /// Flip light/dark. Toggles before initialization are ignored.
    pub fn toggle(&mut self) -> Option<Theme> {
        match *self {
            ThemeState::Uninitialized => None,
            ThemeState::Ready(theme) => {
                let next = theme.toggled();
                *self = ThemeState::Ready(next);
                Some(next)
            }
        }
    }

    pub fn theme(&self) -> Option<Theme> {
        match *self {
            ThemeState::Uninitialized => None,
            ThemeState::Ready(theme) => Some(theme),
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [Theme::Light, Theme::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_resolve_explicit_modes_ignore_system() {
        assert_eq!(resolve(ThemeMode::Light, true), Theme::Light);
        assert_eq!(resolve(ThemeMode::Dark, false), Theme::Dark);
    }

    #[test]
    fn test_resolve_system_default() {
        assert_eq!(resolve(ThemeMode::SystemDefault, true), Theme::Dark);
        assert_eq!(resolve(ThemeMode::SystemDefault, false), Theme::Light);
    }

    #[test]
    fn test_uninitialized_ignores_toggle() {
        let mut state = ThemeState::new();
        assert_eq!(state.toggle(), None);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_initialize_then_toggle() {
        let mut state = ThemeState::new();
        assert_eq!(state.initialize(ThemeMode::SystemDefault, true), Theme::Dark);
        assert_eq!(state.theme(), Some(Theme::Dark));
        assert_eq!(state.toggle(), Some(Theme::Light));
        assert_eq!(state.toggle(), Some(Theme::Dark));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut state = ThemeState::new();
        state.initialize(ThemeMode::Light, false);
        // A second init must not clobber the resolved theme
        assert_eq!(state.initialize(ThemeMode::Dark, true), Theme::Light);
    }
}
