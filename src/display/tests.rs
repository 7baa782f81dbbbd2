use super::*;

#[test]
fn format_clock_zero_pads_both_components() {
    assert_eq!(format_clock(0.0), "00:00");
    assert_eq!(format_clock(9.99), "00:09");
    assert_eq!(format_clock(65.0), "01:05");
    assert_eq!(format_clock(600.0), "10:00");
    assert_eq!(format_clock(7503.4), "125:03");
}

#[test]
fn update_formats_position_duration_and_seek() {
    let mut d = TimeDisplay::default();
    assert!(d.update(65.0, 125.0));
    assert_eq!(d.current, "01:05");
    assert_eq!(d.total, "02:05");
    assert_eq!(d.seek, 52.0);
}

#[test]
fn update_with_unknown_duration_keeps_previous_strings() {
    let mut d = TimeDisplay::default();
    d.update(30.0, 90.0);
    let before = d.clone();

    assert!(!d.update(0.0, f64::NAN));
    assert_eq!(d, before);
}

#[test]
fn reset_returns_to_zero() {
    let mut d = TimeDisplay::default();
    d.update(65.0, 125.0);
    d.reset();
    assert_eq!(d.current, "00:00");
    assert_eq!(d.total, "00:00");
    assert_eq!(d.seek, 0.0);
}

#[test]
fn seek_and_volume_map_percentages() {
    assert_eq!(seek_position(200.0, 50.0), 100.0);
    assert_eq!(seek_position(200.0, 0.0), 0.0);
    assert_eq!(volume_gain(100.0), 1.0);
    assert_eq!(volume_gain(25.0), 0.25);
}
