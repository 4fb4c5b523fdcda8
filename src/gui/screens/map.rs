use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Color, Element, Length, Task,
    widget::{Space, button, column, container, row, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::{AppState, Notice};
use crate::gui::widgets;
use crate::models::{Occupancy, ParkingZone};

const TILES_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default)]
struct ReservationDraft {
    date: String,
    start: String,
    end: String,
    vehicle: String,
}

#[derive(Debug, Clone)]
pub struct MapScreen {
    zones: Vec<ParkingZone>,
    selected: Option<usize>,
    reservation: ReservationDraft,
}

#[derive(Debug, Clone)]
pub enum MapMessage {
    Select(usize),
    DateChanged(String),
    StartChanged(String),
    EndChanged(String),
    VehicleChanged(String),
    SubmitReservation,
}

impl MapScreen {
    pub fn new(state: &AppState) -> Self {
        let mut zones = state.zones.clone();
        // Tile order follows the campus plan, top to bottom.
        zones.sort_by_key(|z| (z.position.y, z.position.x));
        Self {
            zones,
            selected: None,
            reservation: ReservationDraft::default(),
        }
    }

    fn legend(&self) -> Element<'_, ScreenMessage<Self>> {
        container(
            row![
                widgets::occupancy_badge(Occupancy::Available),
                widgets::occupancy_badge(Occupancy::Moderate),
                widgets::occupancy_badge(Occupancy::Busy),
                text("Tiles show free spaces per zone").size(13),
            ]
            .spacing(24)
            .align_y(Center),
        )
        .style(bordered_box)
        .padding(12)
        .width(Length::Fill)
        .into()
    }

    fn tile_grid(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut grid = column![].spacing(12);
        let mut current = row![].spacing(12);
        for (index, zone) in self.zones.iter().enumerate() {
            let color = widgets::occupancy_color(zone.occupancy());
            let tile = button(
                column![
                    text(zone.kind.label()).size(12),
                    text(zone.available.to_string()).size(26),
                    text("free").size(12),
                ]
                .spacing(2)
                .align_x(Center),
            )
            .style(move |_theme, _status| iced::widget::button::Style {
                background: Some(color.into()),
                text_color: Color::WHITE,
                ..iced::widget::button::Style::default()
            })
            .on_press(ScreenMessage::ScreenMessage(MapMessage::Select(index)))
            .width(130)
            .padding(14);
            current = current.push(tile);
            if (index + 1) % TILES_PER_ROW == 0 {
                grid = grid.push(std::mem::replace(&mut current, row![].spacing(12)));
            }
        }
        grid.push(current).into()
    }

    fn detail_panel<'a>(&'a self, zone: &'a ParkingZone) -> Element<'a, ScreenMessage<Self>> {
        let reservation = column![
            text("Reserve a space").size(16),
            row![
                text_input("Date (e.g. 2026-09-01)", &self.reservation.date)
                    .on_input(|v| ScreenMessage::ScreenMessage(MapMessage::DateChanged(v)))
                    .padding(8),
                text_input("From (e.g. 09:00)", &self.reservation.start)
                    .on_input(|v| ScreenMessage::ScreenMessage(MapMessage::StartChanged(v)))
                    .padding(8),
                text_input("Until (e.g. 17:00)", &self.reservation.end)
                    .on_input(|v| ScreenMessage::ScreenMessage(MapMessage::EndChanged(v)))
                    .padding(8),
            ]
            .spacing(8),
            text_input("Vehicle plate (optional)", &self.reservation.vehicle)
                .on_input(|v| ScreenMessage::ScreenMessage(MapMessage::VehicleChanged(v)))
                .padding(8),
            button(text("Reserve"))
                .on_press(ScreenMessage::ScreenMessage(MapMessage::SubmitReservation))
                .padding(10),
        ]
        .spacing(10);

        container(
            column![
                row![
                    column![text(&zone.name).size(20), text(&zone.description).size(14)]
                        .spacing(2),
                    Space::with_width(Length::Fill),
                    widgets::occupancy_badge(zone.occupancy()),
                ]
                .align_y(Center),
                row![
                    column![
                        text(zone.available.to_string())
                            .size(24)
                            .color(widgets::occupancy_color(Occupancy::Available)),
                        text("available").size(13),
                    ]
                    .align_x(Center),
                    column![
                        text(zone.total.to_string()).size(24),
                        text("total").size(13),
                    ]
                    .align_x(Center),
                ]
                .spacing(32),
                reservation,
            ]
            .spacing(16),
        )
        .style(bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
    }
}

impl Screen for MapScreen {
    type Message = MapMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut page = column![
            text("Campus parking map").size(28),
            text("Pick a zone to see details and reserve a space"),
            self.legend(),
            self.tile_grid(),
        ]
        .spacing(18);

        if let Some(zone) = self.selected.and_then(|i| self.zones.get(i)) {
            page = page.push(self.detail_panel(zone));
        }

        page.into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            MapMessage::Select(index) => {
                // Clicking the selected tile deselects it.
                self.selected = if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Task::none()
            }
            MapMessage::DateChanged(v) => {
                self.reservation.date = v;
                Task::none()
            }
            MapMessage::StartChanged(v) => {
                self.reservation.start = v;
                Task::none()
            }
            MapMessage::EndChanged(v) => {
                self.reservation.end = v;
                Task::none()
            }
            MapMessage::VehicleChanged(v) => {
                self.reservation.vehicle = v;
                Task::none()
            }
            MapMessage::SubmitReservation => {
                let draft = &self.reservation;
                if draft.date.trim().is_empty()
                    || draft.start.trim().is_empty()
                    || draft.end.trim().is_empty()
                {
                    state.notify(Notice::error(
                        "Reservation incomplete",
                        "Date, start and end times are required",
                    ));
                    return Task::none();
                }
                let Some(zone) = self.selected.and_then(|i| self.zones.get(i)) else {
                    return Task::none();
                };
                // Local simulation only; no space is actually held anywhere.
                state.notify(Notice::info(
                    "Reservation confirmed",
                    format!(
                        "Space held in {} on {} from {} to {}",
                        zone.name, draft.date, draft.start, draft.end
                    ),
                ));
                self.reservation = ReservationDraft::default();
                Task::none()
            }
        }
    }
}
