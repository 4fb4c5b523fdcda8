use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, checkbox, column, container, text, text_input},
};

use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::{AppState, Notice};
use crate::models::User;

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    show_password: bool,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    ShowPassword(bool),
    Submit,
    Finished(Result<User, String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Authenticated(User),
    SwitchToRegister,
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let email = text_input("you@university.edu", &self.email)
            .on_input(|v| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(v)))
            .padding(10);
        let password = text_input("Password", &self.password)
            .secure(!self.show_password)
            .on_input(|v| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(v)))
            .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit))
            .padding(10);
        let show_password = checkbox("Show password", self.show_password)
            .on_toggle(|v| ScreenMessage::ScreenMessage(LoginMessage::ShowPassword(v)));

        let submit = button(
            text(if self.submitting {
                "Signing in..."
            } else {
                "Sign in"
            }),
        )
        .on_press_maybe(
            (!self.submitting).then_some(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
        )
        .width(Length::Fill)
        .padding(10);

        let switch = button(text("No account yet? Register").size(14))
            .style(button::text)
            .on_press(ScreenMessage::ParentMessage(ParentMessage::SwitchToRegister));

        let content = column![
            text("Smart Park").size(32),
            text("Sign in to manage your campus parking"),
            email,
            password,
            show_password,
            submit,
            switch,
        ]
        .spacing(14)
        .padding(24)
        .max_width(420)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(email) => {
                self.email = email;
                Task::none()
            }
            LoginMessage::PasswordChanged(password) => {
                self.password = password;
                Task::none()
            }
            LoginMessage::ShowPassword(show) => {
                self.show_password = show;
                Task::none()
            }
            LoginMessage::Submit => {
                // Required-field check happens here, before the simulated call.
                if self.email.trim().is_empty() || self.password.is_empty() {
                    state.notify(Notice::error("Sign-in failed", "Please fill in every field"));
                    return Task::none();
                }
                self.submitting = true;
                state.notice = None;
                let backend = state.backend.clone();
                let email = self.email.clone();
                let password = self.password.clone();
                Task::perform(
                    async move {
                        backend
                            .login(&email, &password)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(LoginMessage::Finished(result)),
                )
            }
            LoginMessage::Finished(Ok(user)) => {
                self.submitting = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Authenticated(
                    user,
                )))
            }
            LoginMessage::Finished(Err(reason)) => {
                self.submitting = false;
                state.notify(Notice::error("Sign-in failed", reason));
                Task::none()
            }
        }
    }
}
