#[cfg(test)]
mod tests {
    use crate::logic::{availability, create_booking, list_bookings, BookingError, BookingRequest};
    use crate::notify::Notifications;
    use crate::registry::{
        block_slots, blocked_for_date, close_day, list_closures, reopen_day, unblock_slots,
    };
    use crate::slots::SlotGrid;
    use crate::test_store::MemoryStore;
    use crate::ScheduleRules;
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn grid() -> SlotGrid {
        SlotGrid::regular(10, 19, 30).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_close_day_reports_new_and_existing() {
        let store = MemoryStore::new();
        let today = date("2030-03-04");

        assert!(close_day(&store, date("2030-03-08"), today).await.unwrap());
        assert!(!close_day(&store, date("2030-03-08"), today).await.unwrap());
        assert!(close_day(&store, today, today).await.unwrap());

        assert_eq!(
            list_closures(&store).await.unwrap(),
            vec![today, date("2030-03-08")]
        );
    }

    #[tokio::test]
    async fn test_close_past_day_is_rejected() {
        let store = MemoryStore::new();
        let err = close_day(&store, date("2030-03-03"), date("2030-03-04"))
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::PastDate));
        assert_eq!(err.to_string(), "cannot close a past date");
        assert!(list_closures(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closing_keeps_existing_bookings() {
        let store = MemoryStore::new();
        let rules = ScheduleRules::new(grid(), Weekday::Sun);
        let today = date("2030-03-04");
        let request = BookingRequest {
            nombre: Some("Ana".into()),
            apellido: Some("Ruiz".into()),
            telefono: Some("600000000".into()),
            email: Some("ana@example.com".into()),
            date: Some("2030-03-05".into()),
            time: Some("10:00".into()),
        };
        create_booking(&store, &rules, today, request, &Notifications::disabled())
            .await
            .unwrap();

        close_day(&store, date("2030-03-05"), today).await.unwrap();
        assert_eq!(store.booking_count(), 1);
    }

    #[tokio::test]
    async fn test_reopen_unknown_day_is_not_found() {
        let store = MemoryStore::new();
        close_day(&store, date("2030-03-08"), date("2030-03-04")).await.unwrap();

        reopen_day(&store, date("2030-03-08")).await.unwrap();
        let err = reopen_day(&store, date("2030-03-08")).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(ref m) if m == "day was not closed"));
    }

    #[tokio::test]
    async fn test_block_and_unblock_are_idempotent() {
        let store = MemoryStore::new();
        let day = date("2030-03-05");

        let blocked = block_slots(&store, &grid(), day, &strings(&["13:00", "12:30", "13:00"]))
            .await
            .unwrap();
        assert_eq!(blocked, vec!["12:30", "13:00"]);

        let blocked = block_slots(&store, &grid(), day, &strings(&["13:00", "13:30"]))
            .await
            .unwrap();
        assert_eq!(blocked, vec!["12:30", "13:00", "13:30"]);

        let blocked = unblock_slots(&store, &grid(), day, &strings(&["12:30", "18:00"]))
            .await
            .unwrap();
        assert_eq!(blocked, vec!["13:00", "13:30"]);
        assert_eq!(blocked_for_date(&store, day).await.unwrap(), blocked);
        assert!(blocked_for_date(&store, date("2030-03-06")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_block_batch_is_validated_as_a_whole() {
        let store = MemoryStore::new();
        let day = date("2030-03-05");

        let err = block_slots(&store, &grid(), day, &[]).await.unwrap_err();
        assert!(matches!(err, BookingError::MissingData));

        let err = block_slots(&store, &grid(), day, &strings(&["13:00", "13:10"]))
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidTime));

        let err = unblock_slots(&store, &grid(), day, &strings(&["later"]))
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidTime));

        for trailing in ["13:00:", "13:00:00", "13:00:99:99", "13:00:garbage"] {
            let err = block_slots(&store, &grid(), day, &strings(&[trailing]))
                .await
                .unwrap_err();
            assert!(matches!(err, BookingError::InvalidTime), "{trailing} should be rejected");
        }

        assert!(blocked_for_date(&store, day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocking_a_booked_slot_keeps_the_booking() {
        let store = MemoryStore::new();
        let rules = ScheduleRules::new(grid(), Weekday::Sun);
        let today = date("2030-03-04");
        let day = date("2030-03-05");
        let request = BookingRequest {
            nombre: Some("Ana".into()),
            apellido: Some("Ruiz".into()),
            telefono: Some("600000000".into()),
            email: Some("ana@example.com".into()),
            date: Some("2030-03-05".into()),
            time: Some("15:00".into()),
        };
        let booking = create_booking(&store, &rules, today, request, &Notifications::disabled())
            .await
            .unwrap();

        let blocked = block_slots(&store, &grid(), day, &strings(&["15:00"]))
            .await
            .unwrap();
        assert_eq!(blocked, vec!["15:00"]);

        let now = NaiveDateTime::parse_from_str("2030-03-04 09:00", "%Y-%m-%d %H:%M").unwrap();
        let free = availability(&store, &rules, day, now).await.unwrap();
        assert!(free.iter().all(|slot| slot.to_string() != "15:00"));
        assert_eq!(free.len(), grid().len() - 1);

        assert_eq!(list_bookings(&store, Some(day)).await.unwrap(), vec![booking]);
    }
}
