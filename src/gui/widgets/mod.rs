use iced::{
    Alignment::Center,
    Color, Element, Length, Theme,
    widget::{Space, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::gui::Message;
use crate::gui::state::{Notice, NoticeKind};
use crate::models::Occupancy;
use crate::session::ViewId;

pub fn occupancy_color(occupancy: Occupancy) -> Color {
    match occupancy {
        Occupancy::Available => Color::from_rgb8(0x22, 0xc5, 0x5e),
        Occupancy::Moderate => Color::from_rgb8(0xea, 0xb3, 0x08),
        Occupancy::Busy => Color::from_rgb8(0xef, 0x44, 0x44),
    }
}

/// The colored dot + label pair used wherever a zone status is shown.
pub fn occupancy_badge<'a, Message: 'a>(occupancy: Occupancy) -> Element<'a, Message> {
    let color = occupancy_color(occupancy);
    row![
        container(Space::new(10, 10)).style(move |_theme: &Theme| {
            container::Style::default().background(color)
        }),
        text(occupancy.label()).size(14),
    ]
    .spacing(6)
    .align_y(Center)
    .into()
}

/// One dashboard/statistics figure with its caption.
pub fn stat_card<'a, Message: 'a>(
    value: String,
    caption: &'a str,
    accent: Color,
) -> Element<'a, Message> {
    container(
        column![text(value).size(26).color(accent), text(caption).size(13)]
            .spacing(4)
            .align_x(Center),
    )
    .style(bordered_box)
    .padding(16)
    .width(Length::Fill)
    .into()
}

/// Application chrome for authenticated views: top navigation bar with the
/// active view highlighted, a sign-out button, the notice banner and the
/// scrollable screen content.
pub fn shell<'a>(
    active: ViewId,
    notice: Option<&'a Notice>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut nav = row![text("Smart Park").size(22)]
        .spacing(8)
        .padding(12)
        .align_y(Center);
    for view in ViewId::ALL {
        nav = nav.push(
            button(text(view.label()))
                .style(if view == active {
                    button::primary
                } else {
                    button::text
                })
                .on_press(Message::Navigate(view)),
        );
    }
    nav = nav.push(Space::with_width(Length::Fill));
    nav = nav.push(
        button(text("Sign out"))
            .style(button::danger)
            .on_press(Message::Logout),
    );

    let mut page = column![container(nav).style(bordered_box).width(Length::Fill)];
    if let Some(notice) = notice {
        page = page.push(banner(notice));
    }
    page = page.push(
        scrollable(container(content).padding(20).width(Length::Fill)).height(Length::Fill),
    );
    page.into()
}

/// Chrome-less wrapper for the auth screens; still shows notices.
pub fn bare<'a>(notice: Option<&'a Notice>, content: Element<'a, Message>) -> Element<'a, Message> {
    let mut page = column![];
    if let Some(notice) = notice {
        page = page.push(banner(notice));
    }
    page = page.push(container(content).width(Length::Fill).height(Length::Fill));
    page.into()
}

fn banner<'a>(notice: &'a Notice) -> Element<'a, Message> {
    let accent = match notice.kind {
        NoticeKind::Info => Color::from_rgb8(0x22, 0xc5, 0x5e),
        NoticeKind::Error => Color::from_rgb8(0xef, 0x44, 0x44),
    };
    container(
        row![
            column![
                text(&notice.title).size(16).color(accent),
                text(&notice.body).size(14),
            ]
            .spacing(2),
            Space::with_width(Length::Fill),
            button(text("Dismiss").size(14))
                .style(button::text)
                .on_press(Message::DismissNotice),
        ]
        .spacing(12)
        .align_y(Center),
    )
    .style(bordered_box)
    .padding(10)
    .width(Length::Fill)
    .into()
}
