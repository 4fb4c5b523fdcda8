use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::auth::Registration;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::{AppState, Notice};
use crate::models::{User, UserType};

#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    department: String,
    user_type: Option<UserType>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    DepartmentChanged(String),
    UserTypeSelected(UserType),
    Submit,
    Finished(Result<User, String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Authenticated(User),
    SwitchToLogin,
}

impl RegisterScreen {
    fn missing_field(&self) -> Option<&'static str> {
        if self.first_name.trim().is_empty() {
            Some("first name")
        } else if self.last_name.trim().is_empty() {
            Some("last name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else if self.password.is_empty() {
            Some("password")
        } else if self.user_type.is_none() {
            Some("user type")
        } else {
            None
        }
    }
}

impl Screen for RegisterScreen {
    type Message = RegisterMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let names = row![
            text_input("First name", &self.first_name)
                .on_input(|v| ScreenMessage::ScreenMessage(RegisterMessage::FirstNameChanged(v)))
                .padding(10),
            text_input("Last name", &self.last_name)
                .on_input(|v| ScreenMessage::ScreenMessage(RegisterMessage::LastNameChanged(v)))
                .padding(10),
        ]
        .spacing(10);

        let email = text_input("you@university.edu", &self.email)
            .on_input(|v| ScreenMessage::ScreenMessage(RegisterMessage::EmailChanged(v)))
            .padding(10);
        let password = text_input("Password", &self.password)
            .secure(true)
            .on_input(|v| ScreenMessage::ScreenMessage(RegisterMessage::PasswordChanged(v)))
            .padding(10);

        let user_type = pick_list(UserType::ALL, self.user_type, |t| {
            ScreenMessage::ScreenMessage(RegisterMessage::UserTypeSelected(t))
        })
        .placeholder("User type")
        .padding(10)
        .width(Length::Fill);

        let department = text_input("Department (optional)", &self.department)
            .on_input(|v| ScreenMessage::ScreenMessage(RegisterMessage::DepartmentChanged(v)))
            .padding(10);

        let submit = button(
            text(if self.submitting {
                "Creating account..."
            } else {
                "Register"
            }),
        )
        .on_press_maybe(
            (!self.submitting).then_some(ScreenMessage::ScreenMessage(RegisterMessage::Submit)),
        )
        .width(Length::Fill)
        .padding(10);

        let switch = button(text("Already registered? Sign in").size(14))
            .style(button::text)
            .on_press(ScreenMessage::ParentMessage(ParentMessage::SwitchToLogin));

        let content = column![
            text("Create your account").size(32),
            text("Register to use the campus parking"),
            names,
            email,
            password,
            user_type,
            department,
            submit,
            switch,
        ]
        .spacing(14)
        .padding(24)
        .max_width(460)
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
            RegisterMessage::FirstNameChanged(v) => {
                self.first_name = v;
                Task::none()
            }
            RegisterMessage::LastNameChanged(v) => {
                self.last_name = v;
                Task::none()
            }
            RegisterMessage::EmailChanged(v) => {
                self.email = v;
                Task::none()
            }
            RegisterMessage::PasswordChanged(v) => {
                self.password = v;
                Task::none()
            }
            RegisterMessage::DepartmentChanged(v) => {
                self.department = v;
                Task::none()
            }
            RegisterMessage::UserTypeSelected(t) => {
                self.user_type = Some(t);
                Task::none()
            }
            RegisterMessage::Submit => {
                if let Some(field) = self.missing_field() {
                    state.notify(Notice::error(
                        "Registration failed",
                        format!("Please provide your {field}"),
                    ));
                    return Task::none();
                }
                self.submitting = true;
                state.notice = None;
                let backend = state.backend.clone();
                let form = Registration {
                    email: self.email.clone(),
                    password: self.password.clone(),
                    first_name: self.first_name.clone(),
                    last_name: self.last_name.clone(),
                    user_type: self.user_type.unwrap_or_default(),
                    department: if self.department.trim().is_empty() {
                        None
                    } else {
                        Some(self.department.trim().to_string())
                    },
                };
                Task::perform(
                    async move { backend.register(form).await.map_err(|e| e.to_string()) },
                    |result| ScreenMessage::ScreenMessage(RegisterMessage::Finished(result)),
                )
            }
            RegisterMessage::Finished(Ok(user)) => {
                self.submitting = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Authenticated(
                    user,
                )))
            }
            RegisterMessage::Finished(Err(reason)) => {
                self.submitting = false;
                state.notify(Notice::error("Registration failed", reason));
                Task::none()
            }
        }
    }
}
