#[cfg(test)]
mod tests {
    use crate::logic::compute_free_slots;
    use crate::slots::{Slot, SlotGrid};
    use chrono::{Duration, NaiveDate, NaiveTime};
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, 4).unwrap()
    }

    // Picks a subset of the grid's labels using a bit mask.
    fn pick(labels: &[String], mask: u64) -> Vec<String> {
        labels
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << (i % 64)) != 0)
            .map(|(_, l)| l.clone())
            .collect()
    }

    proptest! {
        // Regular grids start at the open hour, stay before close and step evenly
        #[test]
        fn test_regular_grid_shape(open in 0u32..23, span in 1u32..10, step in 5u32..120) {
            let close = (open + span).min(24);
            let grid = SlotGrid::regular(open, close, step).unwrap();
            let minutes: Vec<u32> = grid.iter().map(Slot::minutes).collect();

            prop_assert_eq!(minutes.first().copied(), Some(open * 60));
            prop_assert!(minutes.iter().all(|m| *m < close * 60));
            for pair in minutes.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], step);
            }
            prop_assert_eq!(grid.len() as u32, ((close - open) * 60).div_ceil(step));
        }

        // Free slots are an ordered subset of the grid, disjoint from booked and blocked
        #[test]
        fn test_free_slots_subset_in_grid_order(
            booked_mask in any::<u64>(),
            blocked_mask in any::<u64>(),
            day_offset in -3i64..5,
            now_minutes in 0u32..(24 * 60),
        ) {
            let grid = SlotGrid::regular(10, 19, 30).unwrap();
            let labels = grid.labels();
            let booked = pick(&labels, booked_mask);
            let blocked = pick(&labels, blocked_mask.rotate_left(7));
            let now = base_date().and_time(
                NaiveTime::from_hms_opt(now_minutes / 60, now_minutes % 60, 0).unwrap(),
            );
            let date = base_date() + Duration::days(day_offset);

            let free: Vec<String> = compute_free_slots(&grid, date, now, &booked, &blocked)
                .iter()
                .map(ToString::to_string)
                .collect();

            let positions: Vec<usize> = free
                .iter()
                .map(|s| labels.iter().position(|l| l == s).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(free.iter().all(|s| !booked.contains(s) && !blocked.contains(s)));

            if day_offset < 0 {
                prop_assert!(free.is_empty());
            }
            if day_offset == 0 {
                let slots: Vec<Slot> = free.iter().map(|s| s.parse().unwrap()).collect();
                prop_assert!(slots.iter().all(|s| s.minutes() > now_minutes));
            }
            if day_offset > 0 {
                let expected = labels
                    .iter()
                    .filter(|l| !booked.contains(*l) && !blocked.contains(*l))
                    .count();
                prop_assert_eq!(free.len(), expected);
            }
        }
    }
}
