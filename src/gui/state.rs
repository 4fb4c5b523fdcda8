use crate::auth::SimulatedBackend;
use crate::data;
use crate::models::ParkingZone;
use crate::session::{SessionController, ViewId};

/// Startup knobs collected by the CLI.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub initial_view: ViewId,
    pub backend: SimulatedBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// The toast replacement: a dismissible banner rendered above the active
/// screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Preferences {
    pub dark_theme: bool,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_theme: true,
            notifications: true,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub controller: SessionController,
    pub backend: SimulatedBackend,
    pub zones: Vec<ParkingZone>,
    pub notice: Option<Notice>,
    pub prefs: Preferences,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            controller: SessionController::new(config.initial_view),
            backend: config.backend,
            zones: data::zones(),
            notice: None,
            prefs: Preferences::default(),
        }
    }

    /// Posts a notice. Informational ones respect the notification
    /// preference; errors are always shown.
    pub fn notify(&mut self, notice: Notice) {
        if self.prefs.notifications || notice.kind == NoticeKind::Error {
            self.notice = Some(notice);
        }
    }
}
