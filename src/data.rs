//! Hardcoded sample data backing the dashboard, map and statistics views.
//! A real deployment would fetch all of this from the parking API.

use crate::models::{
    ActivityEvent, ActivityKind, DaySample, HourSample, LotSummary, MapPoint, MonthlySummary,
    ParkingZone, UserType, ZoneKind,
};

pub fn zones() -> Vec<ParkingZone> {
    vec![
        ParkingZone {
            id: "zone-a".to_string(),
            name: "Zone A - Main".to_string(),
            total: 80,
            available: 15,
            kind: ZoneKind::General,
            position: MapPoint { x: 20, y: 30 },
            description: "Main zone for students and staff".to_string(),
        },
        ParkingZone {
            id: "zone-b".to_string(),
            name: "Zone B - Faculty".to_string(),
            total: 60,
            available: 18,
            kind: ZoneKind::Faculty,
            position: MapPoint { x: 60, y: 20 },
            description: "Reserved for teaching staff".to_string(),
        },
        ParkingZone {
            id: "zone-c".to_string(),
            name: "Zone C - Visitors".to_string(),
            total: 40,
            available: 20,
            kind: ZoneKind::Visitor,
            position: MapPoint { x: 30, y: 70 },
            description: "Dedicated visitor parking".to_string(),
        },
        ParkingZone {
            id: "zone-d".to_string(),
            name: "Zone D - Staff".to_string(),
            total: 20,
            available: 5,
            kind: ZoneKind::Staff,
            position: MapPoint { x: 70, y: 60 },
            description: "Reserved for administrative staff".to_string(),
        },
        ParkingZone {
            id: "zone-e".to_string(),
            name: "Zone E - Electric".to_string(),
            total: 12,
            available: 8,
            kind: ZoneKind::Electric,
            position: MapPoint { x: 50, y: 50 },
            description: "Electric vehicle charging points".to_string(),
        },
    ]
}

pub fn lot_summary() -> LotSummary {
    LotSummary {
        total: 200,
        occupied: 142,
        available: 58,
        reserved: 15,
    }
}

pub fn recent_activity() -> Vec<ActivityEvent> {
    vec![
        ActivityEvent {
            kind: ActivityKind::Entry,
            zone: "Zone A".to_string(),
            minutes_ago: 5,
            user_type: UserType::Student,
        },
        ActivityEvent {
            kind: ActivityKind::Exit,
            zone: "Zone B".to_string(),
            minutes_ago: 8,
            user_type: UserType::Faculty,
        },
        ActivityEvent {
            kind: ActivityKind::Reservation,
            zone: "Zone C".to_string(),
            minutes_ago: 12,
            user_type: UserType::Visitor,
        },
        ActivityEvent {
            kind: ActivityKind::Entry,
            zone: "Zone A".to_string(),
            minutes_ago: 15,
            user_type: UserType::Staff,
        },
    ]
}

pub fn weekly_occupancy() -> Vec<DaySample> {
    [
        ("Mon", 85, "09:00"),
        ("Tue", 78, "10:30"),
        ("Wed", 92, "08:45"),
        ("Thu", 88, "09:15"),
        ("Fri", 82, "10:00"),
        ("Sat", 45, "11:00"),
        ("Sun", 25, "14:00"),
    ]
    .into_iter()
    .map(|(day, occupancy_pct, peak)| DaySample {
        day: day.to_string(),
        occupancy_pct,
        peak: peak.to_string(),
    })
    .collect()
}

pub fn hourly_distribution() -> Vec<HourSample> {
    [
        ("07:00", 25),
        ("08:00", 65),
        ("09:00", 95),
        ("10:00", 85),
        ("11:00", 78),
        ("12:00", 70),
        ("13:00", 82),
        ("14:00", 88),
        ("15:00", 75),
        ("16:00", 60),
        ("17:00", 45),
        ("18:00", 30),
    ]
    .into_iter()
    .map(|(hour, occupancy_pct)| HourSample {
        hour: hour.to_string(),
        occupancy_pct,
    })
    .collect()
}

pub fn monthly_summary() -> MonthlySummary {
    MonthlySummary {
        total_vehicles: 3420,
        average_stay: "2h 30min".to_string(),
        peak_hour: "09:00 - 10:00".to_string(),
        busiest_zone: "Zone A - Main".to_string(),
        electric_vehicles: 245,
        reservations: 186,
    }
}
