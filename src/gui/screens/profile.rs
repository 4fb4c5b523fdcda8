use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{column, container, text},
};
use iced_widget::container::bordered_box;
use time::format_description::well_known::Rfc2822;

use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::AppState;
use crate::models::User;

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    user: User,
}

impl ProfileScreen {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

fn field<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![text(label).size(13), text(value).size(16)]
        .spacing(2)
        .into()
}

impl Screen for ProfileScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let registered = self
            .user
            .registered_at
            .format(&Rfc2822)
            .unwrap_or_else(|_| "unknown".to_string());

        let mut card = column![
            field("Full name", self.user.full_name()),
            field("Email", self.user.email.clone()),
            field("User type", self.user.user_type.label().to_string()),
        ]
        .spacing(14);
        if let Some(department) = &self.user.department {
            card = card.push(field("Department", department.clone()));
        }
        card = card.push(field("Member since", registered));

        column![
            text("Your profile").size(28),
            container(card)
                .style(bordered_box)
                .padding(20)
                .width(Length::Fill),
        ]
        .spacing(18)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
