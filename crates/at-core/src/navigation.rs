//! Screen router.
//!
//! The client moves between a small, fixed set of screens. `Router::transition`
//! is a pure function over `(Screen, NavEvent)`; pairs it does not know keep the
//! current screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    SignIn,
    SignUp,
    ForgotPassword,
    /// Profile setup wizard (basic info then verification).
    ProfileSetup,
    /// Landing page for a fully set-up account.
    Home,
}

impl Screen {
    /// Screens reachable without a session.
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Screen::SignIn | Screen::SignUp | Screen::ForgotPassword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// A token became available (sign-in, sign-up or restored session).
    SessionStarted { setup_complete: bool },
    /// The token disappeared, wherever the sign-out happened.
    SessionEnded,
    GoToSignUp,
    GoToSignIn,
    GoToForgotPassword,
    /// The profile setup wizard finished.
    SetupCompleted,
}

pub struct Router;

impl Router {
    pub fn transition(screen: Screen, event: NavEvent) -> Screen {
        match (screen, event) {
            (current, NavEvent::SessionStarted { setup_complete }) if current.is_auth_screen() => {
                if setup_complete {
                    Screen::Home
                } else {
                    Screen::ProfileSetup
                }
            }
            (Screen::ProfileSetup, NavEvent::SessionStarted { setup_complete: true }) => {
                Screen::Home
            }
            (current, NavEvent::SessionEnded) if !current.is_auth_screen() => Screen::SignIn,
            (Screen::SignIn, NavEvent::GoToSignUp) => Screen::SignUp,
            (Screen::SignIn, NavEvent::GoToForgotPassword) => Screen::ForgotPassword,
            (Screen::SignUp | Screen::ForgotPassword, NavEvent::GoToSignIn) => Screen::SignIn,
            (Screen::ProfileSetup, NavEvent::SetupCompleted) => Screen::Home,
            (current, _) => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_start_routes_by_setup_flag() {
        assert_eq!(
            Router::transition(Screen::SignIn, NavEvent::SessionStarted { setup_complete: true }),
            Screen::Home
        );
        assert_eq!(
            Router::transition(Screen::SignUp, NavEvent::SessionStarted { setup_complete: false }),
            Screen::ProfileSetup
        );
    }

    #[test]
    fn session_end_returns_to_sign_in_from_any_authenticated_screen() {
        assert_eq!(Router::transition(Screen::Home, NavEvent::SessionEnded), Screen::SignIn);
        assert_eq!(
            Router::transition(Screen::ProfileSetup, NavEvent::SessionEnded),
            Screen::SignIn
        );
        assert_eq!(
            Router::transition(Screen::ForgotPassword, NavEvent::SessionEnded),
            Screen::ForgotPassword
        );
    }

    #[test]
    fn home_ignores_repeated_session_start() {
        assert_eq!(
            Router::transition(Screen::Home, NavEvent::SessionStarted { setup_complete: false }),
            Screen::Home
        );
    }

    #[test]
    fn auth_screen_links() {
        assert_eq!(Router::transition(Screen::SignIn, NavEvent::GoToSignUp), Screen::SignUp);
        assert_eq!(
            Router::transition(Screen::SignIn, NavEvent::GoToForgotPassword),
            Screen::ForgotPassword
        );
        assert_eq!(Router::transition(Screen::SignUp, NavEvent::GoToSignIn), Screen::SignIn);
        assert_eq!(Router::transition(Screen::Home, NavEvent::GoToSignUp), Screen::Home);
    }

    #[test]
    fn wizard_completion_lands_home() {
        assert_eq!(
            Router::transition(Screen::ProfileSetup, NavEvent::SetupCompleted),
            Screen::Home
        );
    }
}
