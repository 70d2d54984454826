//! End-to-end tests for the date-time picker.

use std::sync::Arc;

use parking_lot::Mutex;
use switchpick::prelude::*;
use tracing_subscriber::EnvFilter;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(y: i32, m: u32, d: u32) -> DateFields {
    DateFields::new(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> TimeFields {
    TimeFields::new(h, m).unwrap()
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
    Timestamp::from_fields(date(y, m, d), time(h, min))
}

#[test]
fn test_edit_session() {
    setup();
    let mut picker = DateTimePicker::new();
    picker.set_timestamp(ts(2014, 0, 15, 9, 30));
    assert_eq!(picker.timestamp().to_string(), "2014-01-15 09:30");

    picker.date_control_mut().select_date(date(2014, 2, 20));
    assert_eq!(picker.timestamp(), ts(2014, 2, 20, 9, 30));
    assert_eq!(picker.field(CalendarField::Month), 2);
    assert_eq!(picker.field(CalendarField::DayOfMonth), 20);

    picker.time_control_mut().select_time(time(14, 45));
    assert_eq!(picker.timestamp(), ts(2014, 2, 20, 14, 45));
    assert_eq!(picker.field(CalendarField::HourOfDay), 14);
    assert_eq!(picker.field(CalendarField::Minute), 45);

    let before = Timestamp::now();
    picker.reset();
    let after = Timestamp::now();
    let reset_to = picker.timestamp();
    assert!(before <= reset_to && reset_to <= after);
    assert_eq!(picker.date_control().date(), reset_to.date_fields());
    assert_eq!(picker.time_control().time(), reset_to.time_fields());

    assert_eq!(picker.min_date(), None);
    assert_eq!(picker.max_date(), None);
}

#[test]
fn test_session_from_epoch_millis() {
    setup();
    let start = ts(2014, 0, 15, 9, 30);
    let mut picker = DateTimePicker::from_epoch_millis(start.epoch_millis()).unwrap();
    assert_eq!(picker.timestamp(), start);
    assert_eq!(picker.epoch_millis(), start.epoch_millis());

    picker.date_control_mut().select_date(date(2014, 2, 20));
    assert_eq!(picker.timestamp().to_string(), "2014-03-20 09:30");

    picker.time_control_mut().select_time(time(14, 45));
    assert_eq!(picker.timestamp().to_string(), "2014-03-20 14:45");

    let before = Timestamp::now();
    picker.reset();
    let after = Timestamp::now();
    assert!(before <= picker.timestamp() && picker.timestamp() <= after);
}

#[test]
fn test_out_of_range_epoch_millis_is_rejected() {
    for millis in [i64::MAX, i64::MIN] {
        assert!(matches!(
            DateTimePicker::from_epoch_millis(millis),
            Err(Error::TimestampOutOfRange(value)) if value == millis
        ));
    }
}

#[test]
fn test_set_then_get_round_trips() {
    setup();
    let mut picker = DateTimePicker::new();
    for value in [
        ts(1999, 11, 31, 23, 59),
        ts(2000, 1, 29, 0, 0),
        ts(2024, 6, 4, 12, 1),
    ] {
        picker.set_timestamp(value);
        assert_eq!(picker.timestamp(), value);
        assert_eq!(picker.date_control().date(), value.date_fields());
        assert_eq!(picker.time_control().time(), value.time_fields());
    }
}

#[test]
fn test_user_edits_notify_listeners() {
    setup();
    let mut picker = DateTimePicker::with_timestamp(ts(2014, 0, 15, 9, 30));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    picker
        .timestamp_changed
        .connect(move |value| seen_clone.lock().push(value.to_string()));

    picker.date_control_mut().step_day(1);
    picker.time_control_mut().step_hour(-10);

    assert_eq!(
        *seen.lock(),
        vec!["2014-01-16 09:30".to_string(), "2014-01-16 23:30".to_string()]
    );
}

#[test]
fn test_views_strictly_alternate() {
    setup();
    let mut picker = DateTimePicker::with_timestamp(ts(2014, 0, 15, 9, 30));
    let mut expected = PickerView::Date;

    for _ in 0..5 {
        let trigger = expected.other().trigger();
        assert!(picker.is_trigger_enabled(trigger));
        assert!(!picker.is_trigger_enabled(expected.trigger()));

        // Clicking the disabled trigger does nothing
        assert!(!picker.click(expected.trigger()));
        assert_eq!(picker.visible_view(), expected);

        assert!(picker.click(trigger));
        expected = expected.other();
        assert_eq!(picker.visible_view(), expected);
        assert_eq!(picker.view_switcher().current_view(), Some(expected));
    }
}

#[test]
fn test_bounds_follow_configuration() {
    setup();
    let low = ts(2014, 0, 1, 0, 0);
    let high = ts(2014, 0, 31, 0, 0);
    let config = PickerConfig::from_toml_str(&format!(
        "hour_format_24 = false\ninitial_millis = {}\nmin_date_millis = {}\nmax_date_millis = {}\n",
        ts(2014, 0, 15, 9, 30).epoch_millis(),
        low.epoch_millis(),
        high.epoch_millis(),
    ))
    .unwrap();

    let mut picker = DateTimePicker::from_config(&config).unwrap();
    assert_eq!(picker.min_date(), Some(low));
    assert_eq!(picker.max_date(), Some(high));
    assert!(!picker.is_hour_format_24());
    assert_eq!(picker.timestamp(), ts(2014, 0, 15, 9, 30));

    picker.date_control_mut().step_month(1);
    assert_eq!(picker.timestamp(), ts(2014, 0, 31, 9, 30));

    picker.set_max_date(None);
    picker.date_control_mut().step_month(1);
    assert_eq!(picker.timestamp(), ts(2014, 1, 28, 9, 30));
}
