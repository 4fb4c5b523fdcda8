use crate::models::User;

/// The mutually exclusive top-level screens shown once signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    Home,
    Map,
    Stats,
    Profile,
    Settings,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Map,
        ViewId::Stats,
        ViewId::Profile,
        ViewId::Settings,
    ];

    /// Maps a page id to a view. Anything outside the enumerated set
    /// falls back to the home view.
    pub fn parse(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "home" => ViewId::Home,
            "map" => ViewId::Map,
            "stats" => ViewId::Stats,
            "profile" => ViewId::Profile,
            "settings" => ViewId::Settings,
            _ => ViewId::Home,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Map => "map",
            ViewId::Stats => "stats",
            ViewId::Profile => "profile",
            ViewId::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewId::Home => "Dashboard",
            ViewId::Map => "Parking Map",
            ViewId::Stats => "Statistics",
            ViewId::Profile => "Profile",
            ViewId::Settings => "Settings",
        }
    }
}

/// Owns the in-memory session and decides which view is rendered.
///
/// The authenticated flag is derived from the presence of a user record, so
/// a user can never outlive its session and vice versa. Nothing is written
/// to durable storage; a fresh process always starts signed out.
#[derive(Debug, Default)]
pub struct SessionController {
    user: Option<User>,
    view: ViewId,
}

impl SessionController {
    pub fn new(initial_view: ViewId) -> Self {
        Self {
            user: None,
            view: initial_view,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Installs the user returned by the backend and lands on the dashboard.
    pub fn complete_login(&mut self, user: User) {
        tracing::info!(email = %user.email, "session opened");
        self.user = Some(user);
        self.view = ViewId::Home;
    }

    /// Clears the session and resets navigation. Returns the departing user
    /// so the caller can show a confirmation notice.
    pub fn logout(&mut self) -> Option<User> {
        self.view = ViewId::Home;
        let user = self.user.take();
        if let Some(user) = &user {
            tracing::info!(email = %user.email, "session closed");
        }
        user
    }

    /// Switches the active view. Refused while signed out, which keeps the
    /// auth screens the only reachable ones without a session.
    pub fn change_view(&mut self, view: ViewId) -> bool {
        if !self.is_authenticated() {
            tracing::debug!(view = view.id(), "navigation refused while signed out");
            return false;
        }
        self.view = view;
        true
    }
}
