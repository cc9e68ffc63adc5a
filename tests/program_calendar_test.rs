use athlete_program_lib::calendar::{
    date_for_slot, program_end_date, slot_for_date, slot_for_index, total_workouts, workouts_in_range,
};
use athlete_program_lib::models::{Phase, WorkoutSlot};
use chrono::{Duration, NaiveDate};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A spread of start days and weekly schedules
fn programs() -> Vec<(NaiveDate, Vec<u32>, u32)> {
    vec![
        (ymd(2026, 2, 2), vec![1, 3, 5], 4),
        (ymd(2026, 2, 4), vec![1, 3, 5], 4),
        (ymd(2026, 2, 7), vec![1, 3, 5], 4),
        (ymd(2025, 12, 30), vec![0, 6], 3),
        (ymd(2026, 3, 8), vec![0, 1, 2, 3, 4, 5, 6], 2),
        (ymd(2026, 10, 16), vec![2], 5),
    ]
}

#[test]
fn test_every_slot_round_trips() {
    for (start, days, weeks) in programs() {
        let per_week = days.len() as u32;
        for index in 0..total_workouts(&days, weeks) {
            let slot = slot_for_index(index, per_week, weeks).unwrap();
            let date = date_for_slot(start, &days, slot, weeks).unwrap();
            assert_eq!(
                slot_for_date(start, &days, date, weeks),
                Some(slot),
                "start {} days {:?} slot {}",
                start,
                days,
                slot
            );
        }
    }
}

#[test]
fn test_dates_strictly_increase_with_index() {
    for (start, days, weeks) in programs() {
        let end = program_end_date(start, &days, weeks).unwrap();
        let workouts = workouts_in_range(
            start,
            &days,
            start - Duration::days(7),
            end + Duration::days(14),
            weeks,
        );

        assert_eq!(workouts.len() as u32, total_workouts(&days, weeks));
        for pair in workouts.windows(2) {
            assert!(pair[0].date < pair[1].date);
            assert_eq!(pair[0].absolute_workout_index + 1, pair[1].absolute_workout_index);
        }
    }
}

#[test]
fn test_phases_follow_fixed_order() {
    let days = [1, 3, 5];
    let start = ymd(2026, 2, 2);
    let gpp = date_for_slot(start, &days, WorkoutSlot::new(Phase::Gpp, 4, 3), 4).unwrap();
    let spp = date_for_slot(start, &days, WorkoutSlot::new(Phase::Spp, 1, 1), 4).unwrap();
    let ssp = date_for_slot(start, &days, WorkoutSlot::new(Phase::Ssp, 1, 1), 4).unwrap();

    assert_eq!(gpp, ymd(2026, 2, 27));
    assert_eq!(spp, ymd(2026, 3, 2));
    assert_eq!(ssp, ymd(2026, 3, 30));
}
