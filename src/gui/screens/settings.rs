use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{checkbox, column, container, text},
};
use iced_widget::container::bordered_box;

use crate::auth::SimulatedBackend;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::{AppState, Preferences};

#[derive(Debug, Clone)]
pub struct SettingsScreen {
    prefs: Preferences,
    backend_summary: String,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    DarkTheme(bool),
    Notifications(bool),
}

impl SettingsScreen {
    pub fn new(prefs: Preferences, backend: &SimulatedBackend) -> Self {
        Self {
            prefs,
            backend_summary: format!(
                "Simulated backend: {} ms sign-in, {} ms registration",
                backend.login_latency().as_millis(),
                backend.register_latency().as_millis(),
            ),
        }
    }
}

impl Screen for SettingsScreen {
    type Message = SettingsMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let toggles = column![
            checkbox("Dark theme", self.prefs.dark_theme)
                .on_toggle(|v| ScreenMessage::ScreenMessage(SettingsMessage::DarkTheme(v))),
            checkbox("Show notifications", self.prefs.notifications)
                .on_toggle(|v| ScreenMessage::ScreenMessage(SettingsMessage::Notifications(v))),
        ]
        .spacing(12);

        column![
            text("Settings").size(28),
            container(toggles)
                .style(bordered_box)
                .padding(20)
                .width(Length::Fill),
            text(&self.backend_summary).size(13),
        ]
        .spacing(18)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SettingsMessage::DarkTheme(enabled) => {
                self.prefs.dark_theme = enabled;
                state.prefs.dark_theme = enabled;
                Task::none()
            }
            SettingsMessage::Notifications(enabled) => {
                self.prefs.notifications = enabled;
                state.prefs.notifications = enabled;
                Task::none()
            }
        }
    }
}
