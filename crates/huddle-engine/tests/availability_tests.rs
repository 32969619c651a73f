//! Tests for the interval-scan slot search.

use huddle_engine::{
    find_available_slots, first_available_slot, Attendee, AvailabilityOptions, HuddleError,
    TimeBlock, TimePoint, DEFAULT_SUGGESTION_INTERVAL,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn tp(clock: &str) -> TimePoint {
    clock.parse().unwrap()
}

fn block(start: &str, end: &str) -> TimeBlock {
    TimeBlock::new(tp(start), tp(end))
}

fn attendee(work_day: (&str, &str), meetings: &[(&str, &str)]) -> Attendee {
    Attendee::new(
        block(work_day.0, work_day.1),
        meetings.iter().map(|(s, e)| block(s, e)).collect(),
    )
}

fn options(meeting_length: u32, interval: u32) -> AvailabilityOptions {
    AvailabilityOptions::new(meeting_length)
        .unwrap()
        .with_suggestion_interval(interval)
        .unwrap()
}

fn starts(slots: &[TimeBlock]) -> Vec<String> {
    slots.iter().map(|s| s.start.to_string()).collect()
}

// ── Open calendars ──────────────────────────────────────────────────────────

#[test]
fn open_day_yields_slot_every_interval() {
    let attendees = vec![attendee(("9:00", "17:00"), &[])];

    let slots = find_available_slots(&attendees, options(30, 15));

    // 9:00, 9:15, ... 16:30 — the last slot ends exactly at 17:00.
    assert_eq!(slots.len(), 31);
    assert_eq!(slots[0], block("9:00", "9:30"));
    assert_eq!(slots[1], block("9:15", "9:45"));
    assert_eq!(slots[30], block("16:30", "17:00"));
    assert!(slots.iter().all(|s| s.duration_minutes() == 30));
}

#[test]
fn wider_interval_spaces_slots_further_apart() {
    let attendees = vec![attendee(("9:00", "17:00"), &[])];

    let slots = find_available_slots(&attendees, options(30, 30));

    assert_eq!(slots.len(), 16);
    assert_eq!(slots[1], block("9:30", "10:00"));
    assert_eq!(slots[15], block("16:30", "17:00"));
}

#[test]
fn default_interval_is_fifteen_minutes() {
    let opts = AvailabilityOptions::new(45).unwrap();
    assert_eq!(opts.meeting_length(), 45);
    assert_eq!(opts.suggestion_interval(), DEFAULT_SUGGESTION_INTERVAL);
    assert_eq!(DEFAULT_SUGGESTION_INTERVAL, 15);
}

#[test]
fn no_attendees_scans_full_day_span() {
    let slots = find_available_slots(&[], options(60, 60));

    assert_eq!(slots.len(), 40);
    assert_eq!(slots[0].start, TimePoint::MIN);
    assert_eq!(slots[39].end, TimePoint::MAX);
}

// ── Busy time ───────────────────────────────────────────────────────────────

#[test]
fn slots_skip_a_single_meeting() {
    let attendees = vec![attendee(("9:00", "12:00"), &[("10:00", "11:00")])];

    let slots = find_available_slots(&attendees, options(30, 15));

    assert_eq!(
        starts(&slots),
        vec!["9:00", "9:15", "9:30", "11:00", "11:15", "11:30"]
    );
    let meeting = block("10:00", "11:00");
    assert!(slots.iter().all(|s| !s.overlaps(&meeting)));
}

#[test]
fn touching_meetings_do_not_block() {
    // A slot may end exactly when a meeting starts and start exactly when one ends.
    let attendees = vec![attendee(
        ("9:00", "11:00"),
        &[("9:00", "9:30"), ("10:00", "11:00")],
    )];

    let slots = find_available_slots(&attendees, options(30, 15));

    assert_eq!(slots, vec![block("9:30", "10:00")]);
}

#[test]
fn two_attendees_combined_calendars() {
    let attendees = vec![
        attendee(
            ("9:00", "20:00"),
            &[("9:00", "10:30"), ("12:00", "13:00"), ("16:00", "18:00")],
        ),
        attendee(
            ("10:00", "18:30"),
            &[
                ("10:00", "11:30"),
                ("12:30", "14:30"),
                ("14:30", "15:00"),
                ("16:00", "17:00"),
            ],
        ),
    ];

    let slots = find_available_slots(&attendees, options(30, 15));

    assert_eq!(
        slots,
        vec![
            block("11:30", "12:00"),
            block("15:00", "15:30"),
            block("15:15", "15:45"),
            block("15:30", "16:00"),
            block("18:00", "18:30"),
        ]
    );
}

#[test]
fn rejection_by_later_attendee_rechecks_earlier_ones() {
    // Attendee 1 pushes the candidate to 10:00, straight into attendee 0's
    // meeting, which must then push it again to 10:30.
    let attendees = vec![
        attendee(("9:00", "12:00"), &[("10:00", "10:30")]),
        attendee(("9:00", "12:00"), &[("9:00", "10:00")]),
    ];

    let slots = find_available_slots(&attendees, options(30, 30));

    assert_eq!(starts(&slots), vec!["10:30", "11:00", "11:30"]);
}

#[test]
fn overlapping_meetings_of_one_attendee() {
    let attendees = vec![attendee(
        ("9:00", "12:00"),
        &[("9:00", "10:30"), ("9:30", "10:00"), ("10:15", "11:00")],
    )];

    let slots = find_available_slots(&attendees, options(30, 30));

    assert_eq!(starts(&slots), vec!["11:00", "11:30"]);
}

#[test]
fn unsorted_meetings_are_handled_and_left_untouched() {
    let original = vec![attendee(
        ("9:00", "12:00"),
        &[("11:00", "11:30"), ("9:00", "10:00")],
    )];
    let attendees = original.clone();

    let slots = find_available_slots(&attendees, options(60, 60));

    assert_eq!(slots, vec![block("10:00", "11:00")]);
    assert_eq!(attendees, original, "caller's calendars must not change");
}

#[test]
fn meetings_outside_window_are_ignored() {
    let attendees = vec![attendee(
        ("9:00", "10:00"),
        &[("7:00", "8:00"), ("13:00", "14:00")],
    )];

    let slots = find_available_slots(&attendees, options(60, 15));

    assert_eq!(slots, vec![block("9:00", "10:00")]);
}

// ── Empty results ───────────────────────────────────────────────────────────

#[test]
fn disjoint_work_days_yield_no_slots() {
    let attendees = vec![
        attendee(("9:00", "10:00"), &[]),
        attendee(("11:00", "12:00"), &[]),
    ];

    let slots = find_available_slots(&attendees, options(30, 15));

    assert!(slots.is_empty());
}

#[test]
fn meeting_longer_than_window_yields_no_slots() {
    let attendees = vec![attendee(("9:00", "10:00"), &[])];

    assert!(find_available_slots(&attendees, options(61, 15)).is_empty());
}

#[test]
fn fully_booked_day_yields_no_slots() {
    let attendees = vec![attendee(("9:00", "17:00"), &[("8:00", "16:45")])];

    assert!(find_available_slots(&attendees, options(30, 15)).is_empty());
}

// ── first_available_slot ────────────────────────────────────────────────────

#[test]
fn first_slot_is_earliest_fit() {
    let attendees = vec![attendee(("9:00", "12:00"), &[("9:00", "9:45")])];

    let first = first_available_slot(&attendees, options(30, 15));

    assert_eq!(first, Some(block("9:45", "10:15")));
}

#[test]
fn first_slot_none_when_nothing_fits() {
    let attendees = vec![attendee(("9:00", "9:20"), &[])];

    assert_eq!(first_available_slot(&attendees, options(30, 15)), None);
}

// ── Options validation ──────────────────────────────────────────────────────

#[test]
fn zero_meeting_length_is_rejected() {
    let err = AvailabilityOptions::new(0).unwrap_err();
    assert!(matches!(err, HuddleError::InvalidParameter(_)));
}

#[test]
fn zero_suggestion_interval_is_rejected() {
    let err = AvailabilityOptions::new(30)
        .unwrap()
        .with_suggestion_interval(0)
        .unwrap_err();
    assert!(matches!(err, HuddleError::InvalidParameter(_)));
}
