//! Passphrase visibility state machine

/// Whether the entered phrase uses a passphrase extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassphraseState {
    /// The input widget has not reported yet
    #[default]
    Unreported,
    NoPassphrase,
    HasPassphrase,
}

/// Result of a widget report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphraseTransition {
    Unchanged,
    /// The passphrase field must be wiped
    EnteredNoPassphrase,
    EnteredHasPassphrase,
}

impl PassphraseState {
    /// Apply a report from the input widget
    pub fn report(&mut self, needs_passphrase: bool) -> PassphraseTransition {
        let next = if needs_passphrase {
            Self::HasPassphrase
        } else {
            Self::NoPassphrase
        };
        if *self == next {
            return PassphraseTransition::Unchanged;
        }
        *self = next;
        if needs_passphrase {
            PassphraseTransition::EnteredHasPassphrase
        } else {
            PassphraseTransition::EnteredNoPassphrase
        }
    }

    /// Whether the passphrase field is shown
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::HasPassphrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_report_is_a_transition() {
        let mut state = PassphraseState::default();
        assert_eq!(state.report(false), PassphraseTransition::EnteredNoPassphrase);
        assert_eq!(state, PassphraseState::NoPassphrase);
    }

    #[test]
    fn repeated_report_is_unchanged() {
        let mut state = PassphraseState::default();
        state.report(true);
        assert_eq!(state.report(true), PassphraseTransition::Unchanged);
        assert!(state.is_enabled());
    }

    #[test]
    fn turning_off_enters_no_passphrase() {
        let mut state = PassphraseState::HasPassphrase;
        assert_eq!(state.report(false), PassphraseTransition::EnteredNoPassphrase);
        assert!(!state.is_enabled());
    }
}
