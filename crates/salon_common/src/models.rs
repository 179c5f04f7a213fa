// --- File: crates/salon_common/src/models.rs ---

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored appointment. `(date, time)` is unique across all bookings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Assigned by the store
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub email: String,
    /// Serialized as `YYYY-MM-DD`
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2030-03-04"))]
    pub date: NaiveDate,
    /// Always `HH:MM`
    #[cfg_attr(feature = "openapi", schema(example = "10:30"))]
    pub time: String,
}

/// A validated booking that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
}

impl NewBooking {
    /// Attaches the id handed out by the store.
    pub fn into_booking(self, id: i64) -> Booking {
        Booking {
            id,
            nombre: self.nombre,
            apellido: self.apellido,
            telefono: self.telefono,
            email: self.email,
            date: self.date,
            time: self.time,
        }
    }
}

/// Truncates a stored `HH:MM:SS` time to `HH:MM`.
///
/// Returns `None` unless `raw` is exactly `HH:MM` or `HH:MM:SS`.
pub fn normalize_time(raw: &str) -> Option<String> {
    let bytes = raw.trim().as_bytes();
    if bytes.len() < 5 {
        return None;
    }
    let (head, rest) = bytes.split_at(5);
    let well_formed = head[0].is_ascii_digit()
        && head[1].is_ascii_digit()
        && head[2] == b':'
        && head[3].is_ascii_digit()
        && head[4].is_ascii_digit();
    let seconds_ok = match rest {
        [] => true,
        [b':', a, b] => a.is_ascii_digit() && b.is_ascii_digit(),
        _ => false,
    };
    if !well_formed || !seconds_ok {
        return None;
    }
    // `head` is ASCII, so this cannot fail.
    std::str::from_utf8(head).ok().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("10:30").as_deref(), Some("10:30"));
        assert_eq!(normalize_time("10:30:00").as_deref(), Some("10:30"));
        assert_eq!(normalize_time(" 09:00:59 ").as_deref(), Some("09:00"));
        assert_eq!(normalize_time("9:30"), None);
        assert_eq!(normalize_time("10-30"), None);
        assert_eq!(normalize_time("10:30pm"), None);
        assert_eq!(normalize_time("10:30:"), None);
        assert_eq!(normalize_time("10:30:5"), None);
        assert_eq!(normalize_time("10:30:99:99"), None);
        assert_eq!(normalize_time("10:30:garbage"), None);
        assert_eq!(normalize_time(""), None);
    }

    #[test]
    fn test_booking_wire_format() {
        let booking = NewBooking {
            nombre: "Ana".into(),
            apellido: "García".into(),
            telefono: "600111222".into(),
            email: "ana@example.com".into(),
            date: NaiveDate::from_ymd_opt(2030, 3, 4).unwrap(),
            time: "10:30".into(),
        }
        .into_booking(7);

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["date"], "2030-03-04");
        assert_eq!(json["time"], "10:30");
    }
}
