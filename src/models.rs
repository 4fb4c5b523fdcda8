use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A signed-in account. Built by the simulated backend; nothing here is
/// persisted, the record lives for the duration of the session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub department: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Faculty,
    Staff,
    Visitor,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Student,
        UserType::Faculty,
        UserType::Staff,
        UserType::Visitor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Faculty => "Faculty",
            UserType::Staff => "Staff",
            UserType::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How full a zone (or the whole lot) is, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Available,
    Moderate,
    Busy,
}

impl Occupancy {
    /// Under half full reads as available, more than four fifths as busy,
    /// anything between (both boundaries included) as moderate.
    ///
    /// Integer arithmetic keeps the 50% and 80% boundaries exact.
    pub fn classify(occupied: u32, total: u32) -> Self {
        if total == 0 || occupied * 2 < total {
            Occupancy::Available
        } else if occupied * 5 <= total * 4 {
            Occupancy::Moderate
        } else {
            Occupancy::Busy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Occupancy::Available => "Available",
            Occupancy::Moderate => "Moderate",
            Occupancy::Busy => "Busy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    General,
    Faculty,
    Visitor,
    Staff,
    Electric,
}

impl ZoneKind {
    pub fn label(self) -> &'static str {
        match self {
            ZoneKind::General => "General",
            ZoneKind::Faculty => "Faculty",
            ZoneKind::Visitor => "Visitor",
            ZoneKind::Staff => "Staff",
            ZoneKind::Electric => "Electric",
        }
    }
}

/// Percent coordinates on the campus plan, used to order the map tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingZone {
    pub id: String,
    pub name: String,
    pub total: u32,
    pub available: u32,
    pub kind: ZoneKind,
    pub position: MapPoint,
    pub description: String,
}

impl ParkingZone {
    pub fn occupied(&self) -> u32 {
        self.total.saturating_sub(self.available)
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy::classify(self.occupied(), self.total)
    }
}

/// Whole-lot counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSummary {
    pub total: u32,
    pub occupied: u32,
    pub available: u32,
    pub reserved: u32,
}

impl LotSummary {
    pub fn occupancy_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied as f32 / self.total as f32 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Entry,
    Exit,
    Reservation,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Entry => "Entry",
            ActivityKind::Exit => "Exit",
            ActivityKind::Reservation => "Reservation",
        }
    }
}

/// One line of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub zone: String,
    pub minutes_ago: u32,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySample {
    pub day: String,
    pub occupancy_pct: u8,
    pub peak: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourSample {
    pub hour: String,
    pub occupancy_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub total_vehicles: u32,
    pub average_stay: String,
    pub peak_hour: String,
    pub busiest_zone: String,
    pub electric_vehicles: u32,
    pub reservations: u32,
}
