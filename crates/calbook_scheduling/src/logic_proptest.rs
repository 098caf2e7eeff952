#[cfg(test)]
mod tests {
    use crate::logic::calculate_available_slots;
    use calbook_config::models::AppConfig;
    use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    const MADRID: Tz = Tz::Europe__Madrid;

    // All generated instants stay in early March 2026, before the DST
    // change, so Madrid is a fixed UTC+1 throughout.
    fn base_monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
    }

    // Busy periods from (day offset, minutes past 08:00Z, length) triples.
    fn busy_from(plan: &[(i64, i64, i64)]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        plan.iter()
            .map(|&(day, offset_minutes, length_minutes)| {
                let start =
                    base_monday() + Duration::days(day) + Duration::minutes(480 + offset_minutes);
                (start, start + Duration::minutes(length_minutes))
            })
            .collect()
    }

    proptest! {
        #[test]
        fn test_slots_have_requested_duration_on_open_weekdays(
            duration_minutes in 15i64..=120,
            buffer_minutes in 0i64..=45,
            days in 1i64..7,
            busy_plan in prop::collection::vec((0i64..7, 0i64..480, 15i64..120), 0..6),
        ) {
            let availability = AppConfig::default().availability;
            let busy = busy_from(&busy_plan);
            let slots = calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(days),
                &busy,
                Duration::minutes(duration_minutes),
                &availability,
                Duration::minutes(buffer_minutes),
                MADRID,
                base_monday() - Duration::days(1),
            );

            for slot in &slots {
                prop_assert_eq!(slot.end - slot.start, Duration::minutes(duration_minutes));
                let weekday = slot.start.with_timezone(&MADRID).weekday();
                prop_assert!(
                    availability.window_for(weekday).is_some(),
                    "Slot on closed weekday {:?}", weekday
                );
            }
        }

        #[test]
        fn test_slots_stay_inside_the_daily_window(
            duration_minutes in 15i64..=120,
            buffer_minutes in 0i64..=45,
            days in 1i64..7,
        ) {
            let availability = AppConfig::default().availability;
            let slots = calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(days),
                &[],
                Duration::minutes(duration_minutes),
                &availability,
                Duration::minutes(buffer_minutes),
                MADRID,
                base_monday() - Duration::days(1),
            );

            for slot in &slots {
                let local_start = slot.start.with_timezone(&MADRID);
                let window = availability
                    .window_for(local_start.weekday())
                    .expect("slot on closed day");
                prop_assert!(local_start.time() >= window.start);
                prop_assert!(slot.end.with_timezone(&MADRID).time() <= window.end);
            }
        }

        #[test]
        fn test_slots_never_overlap_busy_periods(
            duration_minutes in 15i64..=120,
            buffer_minutes in 0i64..=45,
            busy_plan in prop::collection::vec((0i64..7, 0i64..480, 15i64..120), 1..8),
        ) {
            let busy = busy_from(&busy_plan);
            let slots = calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(7),
                &busy,
                Duration::minutes(duration_minutes),
                &AppConfig::default().availability,
                Duration::minutes(buffer_minutes),
                MADRID,
                base_monday() - Duration::days(1),
            );

            for slot in &slots {
                for &(busy_start, busy_end) in &busy {
                    prop_assert!(
                        !(slot.start < busy_end && slot.end > busy_start),
                        "Slot {:?} overlaps busy period {:?}",
                        slot, (busy_start, busy_end)
                    );
                }
            }
        }

        #[test]
        fn test_same_day_slots_align_to_the_step_grid(
            duration_minutes in 15i64..=120,
            buffer_minutes in 0i64..=45,
            busy_plan in prop::collection::vec((0i64..7, 0i64..480, 15i64..120), 0..6),
        ) {
            let step_minutes = duration_minutes + buffer_minutes;
            let slots = calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(7),
                &busy_from(&busy_plan),
                Duration::minutes(duration_minutes),
                &AppConfig::default().availability,
                Duration::minutes(buffer_minutes),
                MADRID,
                base_monday() - Duration::days(1),
            );

            for pair in slots.windows(2) {
                let same_day = pair[0].start.with_timezone(&MADRID).date_naive()
                    == pair[1].start.with_timezone(&MADRID).date_naive();
                if same_day {
                    let gap_minutes = (pair[1].start - pair[0].start).num_minutes();
                    prop_assert!(gap_minutes >= step_minutes);
                    prop_assert_eq!(
                        gap_minutes % step_minutes, 0,
                        "Dropping a candidate must not shift the grid"
                    );
                    prop_assert!(pair[0].end <= pair[1].start);
                }
            }
        }

        #[test]
        fn test_slots_start_strictly_after_now(
            duration_minutes in 15i64..=120,
            now_offset_minutes in 0i64..2880,
        ) {
            let now = base_monday() + Duration::minutes(now_offset_minutes);
            let slots = calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(7),
                &[],
                Duration::minutes(duration_minutes),
                &AppConfig::default().availability,
                Duration::minutes(15),
                MADRID,
                now,
            );

            for slot in &slots {
                prop_assert!(slot.start > now);
            }
        }

        #[test]
        fn test_identical_inputs_give_identical_slots(
            duration_minutes in 15i64..=120,
            buffer_minutes in 0i64..=45,
            busy_plan in prop::collection::vec((0i64..7, 0i64..480, 15i64..120), 0..6),
        ) {
            let busy = busy_from(&busy_plan);
            let run = || calculate_available_slots(
                base_monday(),
                base_monday() + Duration::days(7),
                &busy,
                Duration::minutes(duration_minutes),
                &AppConfig::default().availability,
                Duration::minutes(buffer_minutes),
                MADRID,
                base_monday() - Duration::days(1),
            );
            prop_assert_eq!(run(), run());
        }
    }
}
