use smartpark::Occupancy;
use smartpark::data;

#[test]
fn under_half_full_is_available() {
    assert_eq!(Occupancy::classify(0, 200), Occupancy::Available);
    assert_eq!(Occupancy::classify(99, 200), Occupancy::Available);
}

#[test]
fn exactly_half_full_is_moderate() {
    assert_eq!(Occupancy::classify(100, 200), Occupancy::Moderate);
    assert_eq!(Occupancy::classify(1, 2), Occupancy::Moderate);
}

#[test]
fn exactly_four_fifths_full_is_moderate() {
    assert_eq!(Occupancy::classify(160, 200), Occupancy::Moderate);
    assert_eq!(Occupancy::classify(4, 5), Occupancy::Moderate);
}

#[test]
fn above_four_fifths_is_busy() {
    assert_eq!(Occupancy::classify(161, 200), Occupancy::Busy);
    assert_eq!(Occupancy::classify(200, 200), Occupancy::Busy);
}

#[test]
fn empty_lot_counts_as_available() {
    assert_eq!(Occupancy::classify(0, 0), Occupancy::Available);
}

#[test]
fn sample_zone_statuses_derive_from_counts() {
    let zones = data::zones();
    let by_id = |id: &str| {
        zones
            .iter()
            .find(|z| z.id == id)
            .unwrap_or_else(|| panic!("missing zone {id}"))
    };

    // 65/80 occupied
    assert_eq!(by_id("zone-a").occupancy(), Occupancy::Busy);
    // 42/60 occupied
    assert_eq!(by_id("zone-b").occupancy(), Occupancy::Moderate);
    // 20/40 occupied, the 50% boundary
    assert_eq!(by_id("zone-c").occupancy(), Occupancy::Moderate);
    // 4/12 occupied
    assert_eq!(by_id("zone-e").occupancy(), Occupancy::Available);
}

#[test]
fn labels_match_the_buckets() {
    assert_eq!(Occupancy::Available.label(), "Available");
    assert_eq!(Occupancy::Moderate.label(), "Moderate");
    assert_eq!(Occupancy::Busy.label(), "Busy");
}

#[test]
fn lot_summary_rate_is_a_percentage() {
    let summary = data::lot_summary();
    let rate = summary.occupancy_rate();
    assert!((rate - 71.0).abs() < 0.01, "unexpected rate {rate}");
}
