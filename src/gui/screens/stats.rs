use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Color, Element, Length, Task, alignment,
    widget::{Space, column, container, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::data;
use crate::gui::screens::{Screen, ScreenMessage};
use crate::gui::state::AppState;
use crate::gui::widgets;
use crate::models::{DaySample, HourSample, MonthlySummary, Occupancy};

#[derive(Debug, Clone)]
pub struct StatsScreen {
    monthly: MonthlySummary,
    weekly: Vec<DaySample>,
    hourly: Vec<HourSample>,
}

impl StatsScreen {
    pub fn new() -> Self {
        Self {
            monthly: data::monthly_summary(),
            weekly: data::weekly_occupancy(),
            hourly: data::hourly_distribution(),
        }
    }

    fn monthly_cards(&self) -> Element<'_, ScreenMessage<Self>> {
        let accent = Color::from_rgb8(0x3b, 0x82, 0xf6);
        column![
            row![
                widgets::stat_card(
                    self.monthly.total_vehicles.to_string(),
                    "Vehicles this month",
                    accent,
                ),
                widgets::stat_card(self.monthly.average_stay.clone(), "Average stay", accent),
                widgets::stat_card(self.monthly.peak_hour.clone(), "Peak hour", accent),
            ]
            .spacing(12),
            row![
                widgets::stat_card(self.monthly.busiest_zone.clone(), "Busiest zone", accent),
                widgets::stat_card(
                    self.monthly.electric_vehicles.to_string(),
                    "Electric vehicles",
                    accent,
                ),
                widgets::stat_card(
                    self.monthly.reservations.to_string(),
                    "Reservations",
                    accent,
                ),
            ]
            .spacing(12),
        ]
        .spacing(12)
        .into()
    }

    fn weekly_trends(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut rows = column![text("Weekly occupancy").size(20)].spacing(8);
        for sample in &self.weekly {
            rows = rows.push(
                row![
                    text(&sample.day).size(14).width(40),
                    progress_bar(0.0..=100.0, f32::from(sample.occupancy_pct)).height(10),
                    text(format!("{}%", sample.occupancy_pct)).size(13).width(44),
                    text(format!("peak {}", sample.peak)).size(12),
                ]
                .spacing(10)
                .align_y(Center),
            );
        }
        container(rows)
            .style(bordered_box)
            .padding(16)
            .width(Length::Fill)
            .into()
    }

    fn hourly_chart(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut bars = row![].spacing(8).align_y(alignment::Vertical::Bottom);
        for sample in &self.hourly {
            let pct = u32::from(sample.occupancy_pct);
            let color = widgets::occupancy_color(Occupancy::classify(pct, 100));
            let height = f32::from(sample.occupancy_pct) * 1.2;
            bars = bars.push(
                column![
                    container(Space::new(18, height)).style(move |_theme: &iced::Theme| {
                        container::Style::default().background(color)
                    }),
                    text(&sample.hour).size(10),
                ]
                .spacing(4)
                .align_x(Center),
            );
        }
        container(column![text("Hourly distribution").size(20), bars].spacing(12))
            .style(bordered_box)
            .padding(16)
            .width(Length::Fill)
            .into()
    }
}

impl Screen for StatsScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            text("Parking statistics").size(28),
            text("Usage trends and analysis"),
            self.monthly_cards(),
            self.weekly_trends(),
            self.hourly_chart(),
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
