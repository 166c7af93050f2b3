//! Screen state machine: splash → login → client selection → main demo.

/// Name shown when the user logs in without typing an id.
pub const DEFAULT_USER_NAME: &str = "사용자";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    ClientSelection,
    Main,
}

/// Single-session UI state. There is no identity beyond the display string.
#[derive(Debug)]
pub struct Session {
    pub screen: Screen,
    pub user_name: String,
    pub selected_client: String,
    splash_secs: f64,
}

impl Session {
    pub fn new(splash_secs: f64) -> Self {
        Self {
            screen: Screen::Splash,
            user_name: String::new(),
            selected_client: String::new(),
            splash_secs,
        }
    }

    /// Advance off the splash once `now` (seconds since start) passes its duration.
    pub fn tick(&mut self, now: f64) {
        if self.screen == Screen::Splash && now >= self.splash_secs {
            self.screen = Screen::Login;
        }
    }

    /// Seconds left on the splash, if it is showing.
    pub fn splash_remaining(&self, now: f64) -> Option<f64> {
        (self.screen == Screen::Splash).then(|| (self.splash_secs - now).max(0.0))
    }

    /// Any id is accepted; the password is never checked.
    pub fn login(&mut self, id: &str) {
        let id = id.trim();
        self.user_name = if id.is_empty() {
            DEFAULT_USER_NAME.to_string()
        } else {
            id.to_string()
        };
        self.screen = Screen::ClientSelection;
        log::info!("logged in as {}", self.user_name);
    }

    /// Returns `false` and stays put when the trimmed name is empty.
    pub fn select_client(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.selected_client = name.to_string();
        self.screen = Screen::Main;
        log::info!("client selected: {}", self.selected_client);
        true
    }

    pub fn back_to_client_selection(&mut self) {
        self.selected_client.clear();
        self.screen = Screen::ClientSelection;
    }

    pub fn logout(&mut self) {
        log::info!("{} logged out", self.user_name);
        self.user_name.clear();
        self.selected_client.clear();
        self.screen = Screen::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_advances_after_duration() {
        let mut s = Session::new(2.5);
        s.tick(1.0);
        assert_eq!(s.screen, Screen::Splash);
        assert_eq!(s.splash_remaining(1.0), Some(1.5));
        s.tick(2.5);
        assert_eq!(s.screen, Screen::Login);
        assert_eq!(s.splash_remaining(3.0), None);
    }

    #[test]
    fn tick_does_not_leave_other_screens() {
        let mut s = Session::new(0.0);
        s.tick(0.0);
        s.login("kim");
        s.tick(100.0);
        assert_eq!(s.screen, Screen::ClientSelection);
    }

    #[test]
    fn blank_login_uses_default_name() {
        let mut s = Session::new(0.0);
        s.login("   ");
        assert_eq!(s.user_name, DEFAULT_USER_NAME);
        assert_eq!(s.screen, Screen::ClientSelection);
    }

    #[test]
    fn login_trims_id() {
        let mut s = Session::new(0.0);
        s.login("  lawyer01 ");
        assert_eq!(s.user_name, "lawyer01");
    }

    #[test]
    fn blank_client_is_ignored() {
        let mut s = Session::new(0.0);
        s.login("a");
        assert!(!s.select_client("  "));
        assert_eq!(s.screen, Screen::ClientSelection);
        assert!(s.select_client(" 박영진 "));
        assert_eq!(s.selected_client, "박영진");
        assert_eq!(s.screen, Screen::Main);
    }

    #[test]
    fn back_clears_client_but_keeps_user() {
        let mut s = Session::new(0.0);
        s.login("a");
        s.select_client("임지혁");
        s.back_to_client_selection();
        assert_eq!(s.screen, Screen::ClientSelection);
        assert!(s.selected_client.is_empty());
        assert_eq!(s.user_name, "a");
    }

    #[test]
    fn logout_clears_everything() {
        let mut s = Session::new(0.0);
        s.login("a");
        s.select_client("임지혁");
        s.logout();
        assert_eq!(s.screen, Screen::Login);
        assert!(s.user_name.is_empty());
        assert!(s.selected_client.is_empty());
    }
}
