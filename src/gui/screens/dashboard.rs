use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Color, Element, Length, Task,
    widget::{Space, column, container, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::data;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::AppState;
use crate::gui::widgets;
use crate::models::{ActivityEvent, LotSummary, ParkingZone};

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    summary: LotSummary,
    zones: Vec<ParkingZone>,
    activity: Vec<ActivityEvent>,
}

impl DashboardScreen {
    pub fn new(state: &AppState) -> Self {
        Self {
            summary: data::lot_summary(),
            zones: state.zones.clone(),
            activity: data::recent_activity(),
        }
    }
}

impl Screen for DashboardScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let cards = row![
            widgets::stat_card(
                self.summary.available.to_string(),
                "Free spaces",
                Color::from_rgb8(0x22, 0xc5, 0x5e),
            ),
            widgets::stat_card(
                self.summary.occupied.to_string(),
                "Occupied",
                Color::from_rgb8(0xef, 0x44, 0x44),
            ),
            widgets::stat_card(
                self.summary.reserved.to_string(),
                "Reserved",
                Color::from_rgb8(0x3b, 0x82, 0xf6),
            ),
            widgets::stat_card(
                self.summary.total.to_string(),
                "Total spaces",
                Color::from_rgb8(0xa8, 0x55, 0xf7),
            ),
        ]
        .spacing(12);

        let rate = self.summary.occupancy_rate();
        let occupancy = container(
            column![
                row![
                    text("Current occupancy"),
                    Space::with_width(Length::Fill),
                    text(format!("{rate:.1}%")),
                ],
                progress_bar(0.0..=100.0, rate).height(10),
            ]
            .spacing(8),
        )
        .style(bordered_box)
        .padding(16)
        .width(Length::Fill);

        let mut zone_rows = column![text("Zone status").size(20)].spacing(10);
        for zone in &self.zones {
            zone_rows = zone_rows.push(
                container(
                    row![
                        column![
                            text(&zone.name).size(16),
                            text(format!(
                                "{}/{} spaces occupied",
                                zone.occupied(),
                                zone.total
                            ))
                            .size(13),
                        ]
                        .spacing(2),
                        Space::with_width(Length::Fill),
                        widgets::occupancy_badge(zone.occupancy()),
                    ]
                    .align_y(Center),
                )
                .style(bordered_box)
                .padding(12)
                .width(Length::Fill),
            );
        }

        let mut feed = column![text("Recent activity").size(20)].spacing(10);
        for event in &self.activity {
            feed = feed.push(
                container(
                    row![
                        column![
                            text(format!("{} - {}", event.kind.label(), event.zone)).size(15),
                            text(event.user_type.label()).size(13),
                        ]
                        .spacing(2),
                        Space::with_width(Length::Fill),
                        text(format!("{} min ago", event.minutes_ago)).size(12),
                    ]
                    .align_y(Center),
                )
                .style(bordered_box)
                .padding(12)
                .width(Length::Fill),
            );
        }

        column![
            text("Welcome to Smart Park").size(28),
            text("Campus parking at a glance"),
            cards,
            occupancy,
            zone_rows,
            feed,
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
