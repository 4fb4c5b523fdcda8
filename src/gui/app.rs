use iced::{Element, Task, Theme};

use crate::gui::screens::{Screen, ScreenData, ScreenMessage, login::LoginScreen};
use crate::gui::state::{AppState, Config};
use crate::gui::{Message, widgets};

pub struct SmartParkApp {
    state: AppState,
    screen: ScreenData,
}

impl SmartParkApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(config),
                screen: ScreenData::Login(LoginScreen::default()),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Smart Park - Campus Parking".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    fn view(&self) -> Element<'_, Message> {
        let content = self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        });

        if self.state.controller.is_authenticated() {
            widgets::shell(
                self.state.controller.view(),
                self.state.notice.as_ref(),
                content,
            )
        } else {
            widgets::bare(self.state.notice.as_ref(), content)
        }
    }

    fn theme(&self) -> Theme {
        if self.state.prefs.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub fn run(config: Config) -> iced::Result {
    iced::application(SmartParkApp::title, SmartParkApp::update, SmartParkApp::view)
        .theme(SmartParkApp::theme)
        .window_size(iced::Size::new(1100.0, 760.0))
        .run_with(move || SmartParkApp::new(config))
}
