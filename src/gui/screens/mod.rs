pub mod dashboard;
pub mod login;
pub mod map;
pub mod profile;
pub mod register;
pub mod settings;
pub mod stats;

use std::convert::Infallible;

use iced::{Element, Task};

use crate::gui::{
    Message,
    state::{AppState, Notice},
};
use crate::session::ViewId;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Login(login::LoginScreen),
    Register(register::RegisterScreen),
    Dashboard(dashboard::DashboardScreen),
    Map(map::MapScreen),
    Stats(stats::StatsScreen),
    Profile(profile::ProfileScreen),
    Settings(settings::SettingsScreen),
}

impl ScreenData {
    /// Builds the screen behind a view id, seeded from the shared state.
    pub fn for_view(view: ViewId, state: &AppState) -> Self {
        match view {
            ViewId::Home => ScreenData::Dashboard(dashboard::DashboardScreen::new(state)),
            ViewId::Map => ScreenData::Map(map::MapScreen::new(state)),
            ViewId::Stats => ScreenData::Stats(stats::StatsScreen::new()),
            ViewId::Profile => match state.controller.user() {
                Some(user) => ScreenData::Profile(profile::ProfileScreen::new(user.clone())),
                None => ScreenData::Dashboard(dashboard::DashboardScreen::new(state)),
            },
            ViewId::Settings => {
                ScreenData::Settings(settings::SettingsScreen::new(state.prefs, &state.backend))
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::Register(screen) => screen.view().map(Message::Register),
            ScreenData::Dashboard(screen) => screen.view().map(Message::Dashboard),
            ScreenData::Map(screen) => screen.view().map(Message::Map),
            ScreenData::Stats(screen) => screen.view().map(Message::Stats),
            ScreenData::Profile(screen) => screen.view().map(Message::Profile),
            ScreenData::Settings(screen) => screen.view().map(Message::Settings),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (this, Message::ChangeScreen(screen)) => {
                *this = screen;
                Task::none()
            }
            (this, Message::Navigate(view)) => {
                if state.controller.change_view(view) {
                    *this = ScreenData::for_view(view, state);
                }
                Task::none()
            }
            (this, Message::Logout) => {
                state.controller.logout();
                *this = ScreenData::Login(login::LoginScreen::default());
                state.notify(Notice::info("Signed out", "See you soon at Smart Park!"));
                Task::none()
            }
            (_, Message::DismissNotice) => {
                state.notice = None;
                Task::none()
            }
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    login::ParentMessage::Authenticated(user) => {
                        state.controller.complete_login(user);
                        state.notify(Notice::info("Signed in", "Welcome to Smart Park!"));
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(
                            ViewId::Home,
                        )))
                    }
                    login::ParentMessage::SwitchToRegister => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::Register(register::RegisterScreen::default()),
                        )))
                    }
                },
            },
            (ScreenData::Register(page), Message::Register(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Register)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    register::ParentMessage::Authenticated(user) => {
                        state.controller.complete_login(user);
                        state.notify(Notice::info(
                            "Account created",
                            "Welcome to Smart Park!",
                        ));
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(
                            ViewId::Home,
                        )))
                    }
                    register::ParentMessage::SwitchToLogin => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::Login(login::LoginScreen::default()),
                        )))
                    }
                },
            },
            (ScreenData::Map(page), Message::Map(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Map)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::Settings(page), Message::Settings(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Settings)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            _ => Task::none(),
        }
    }
}
