//! Optimistic state for the per-project management switch.

#![deny(clippy::all, clippy::pedantic)]

/// Mirrors the admin page's "mappings enabled in projects" switch: the
/// checked state flips before the request goes out and must return to its
/// prior value when the request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingsToggle {
    checked: bool,
}

impl MappingsToggle {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    #[must_use]
    pub fn checked(self) -> bool {
        self.checked
    }

    /// Flip to the desired state, returning the prior one for rollback.
    pub fn set(&mut self, checked: bool) -> bool {
        std::mem::replace(&mut self.checked, checked)
    }

    pub fn revert(&mut self, prior: bool) {
        self.checked = prior;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_prior_state() {
        let mut toggle = MappingsToggle::new(false);
        let prior = toggle.set(true);
        assert!(!prior);
        assert!(toggle.checked());
    }

    #[test]
    fn revert_restores_prior_state() {
        let mut toggle = MappingsToggle::new(false);
        let prior = toggle.set(true);
        toggle.revert(prior);
        assert!(!toggle.checked());
    }
}
