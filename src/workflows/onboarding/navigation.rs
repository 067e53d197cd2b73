use serde::Serialize;

use super::domain::OnboardingScreen;

/// Forward-only state machine over the three onboarding screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCoordinator {
    current: OnboardingScreen,
    history: Vec<OnboardingScreen>,
}

/// Result of asking the coordinator to move to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Advanced {
        from: OnboardingScreen,
        to: OnboardingScreen,
    },
    /// The requested screen was already entered; nothing changes.
    AlreadyReached { current: OnboardingScreen },
    /// The requested screen would skip a step; nothing changes.
    OutOfOrder {
        current: OnboardingScreen,
        requested: OnboardingScreen,
    },
}

impl Transition {
    pub const fn advanced(&self) -> bool {
        matches!(self, Transition::Advanced { .. })
    }

    /// Screen the presentation layer should show after this transition.
    pub const fn screen(&self) -> OnboardingScreen {
        match self {
            Transition::Advanced { to, .. } => *to,
            Transition::AlreadyReached { current } | Transition::OutOfOrder { current, .. } => {
                *current
            }
        }
    }
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationCoordinator {
    pub fn new() -> Self {
        Self {
            current: OnboardingScreen::Registration,
            history: vec![OnboardingScreen::Registration],
        }
    }

    pub fn current(&self) -> OnboardingScreen {
        self.current
    }

    /// Screens entered so far, oldest first.
    pub fn history(&self) -> &[OnboardingScreen] {
        &self.history
    }

    pub fn has_reached(&self, screen: OnboardingScreen) -> bool {
        self.current >= screen
    }

    pub fn advance_to(&mut self, target: OnboardingScreen) -> Transition {
        if target <= self.current {
            return Transition::AlreadyReached {
                current: self.current,
            };
        }

        if self.current.next() != Some(target) {
            return Transition::OutOfOrder {
                current: self.current,
                requested: target,
            };
        }

        let from = self.current;
        self.current = target;
        self.history.push(target);
        Transition::Advanced { from, to: target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_registration() {
        let navigation = NavigationCoordinator::new();
        assert_eq!(navigation.current(), OnboardingScreen::Registration);
        assert_eq!(navigation.history(), &[OnboardingScreen::Registration]);
        assert!(!navigation.has_reached(OnboardingScreen::Academic));
    }

    #[test]
    fn advances_one_step_at_a_time() {
        let mut navigation = NavigationCoordinator::new();

        let first = navigation.advance_to(OnboardingScreen::Academic);
        assert_eq!(
            first,
            Transition::Advanced {
                from: OnboardingScreen::Registration,
                to: OnboardingScreen::Academic,
            }
        );

        let second = navigation.advance_to(OnboardingScreen::Roadmap);
        assert!(second.advanced());
        assert_eq!(second.screen(), OnboardingScreen::Roadmap);
        assert_eq!(navigation.history(), &OnboardingScreen::ordered());
    }

    #[test]
    fn revisiting_a_passed_screen_is_a_no_op() {
        let mut navigation = NavigationCoordinator::new();
        navigation.advance_to(OnboardingScreen::Academic);

        let repeat = navigation.advance_to(OnboardingScreen::Academic);
        assert_eq!(
            repeat,
            Transition::AlreadyReached {
                current: OnboardingScreen::Academic
            }
        );
        let back = navigation.advance_to(OnboardingScreen::Registration);
        assert!(!back.advanced());
        assert_eq!(navigation.current(), OnboardingScreen::Academic);
        assert_eq!(navigation.history().len(), 2);
    }

    #[test]
    fn skipping_a_screen_is_refused() {
        let mut navigation = NavigationCoordinator::new();
        let skipped = navigation.advance_to(OnboardingScreen::Roadmap);
        assert_eq!(
            skipped,
            Transition::OutOfOrder {
                current: OnboardingScreen::Registration,
                requested: OnboardingScreen::Roadmap,
            }
        );
        assert_eq!(skipped.screen(), OnboardingScreen::Registration);
        assert_eq!(navigation.current(), OnboardingScreen::Registration);
    }
}
