// --- File: crates/salon_mailer/src/templates.rs ---
use salon_common::Booking;

/// A rendered plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

fn display_date(booking: &Booking) -> String {
    booking.date.format("%d/%m/%Y").to_string()
}

fn signature(business_name: &str) -> String {
    if business_name.trim().is_empty() {
        String::new()
    } else {
        format!("\n\n{}", business_name.trim())
    }
}

/// Sent after a booking is stored.
pub fn booking_confirmation(booking: &Booking, business_name: &str) -> EmailMessage {
    let date = display_date(booking);
    EmailMessage {
        subject: format!("Turno confirmado: {} a las {}", date, booking.time),
        body: format!(
            "Hola {} {},\n\n\
             Tu turno quedó reservado para el {} a las {}.\n\
             Si no puedes venir, avísanos para liberar el horario.{}",
            booking.nombre,
            booking.apellido,
            date,
            booking.time,
            signature(business_name)
        ),
    }
}

/// Sent after a booking is deleted.
pub fn booking_cancellation(booking: &Booking, business_name: &str) -> EmailMessage {
    let date = display_date(booking);
    EmailMessage {
        subject: format!("Turno cancelado: {} a las {}", date, booking.time),
        body: format!(
            "Hola {} {},\n\n\
             Tu turno del {} a las {} fue cancelado.\n\
             Puedes reservar otro horario cuando quieras.{}",
            booking.nombre,
            booking.apellido,
            date,
            booking.time,
            signature(business_name)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: 12,
            nombre: "Lucía".into(),
            apellido: "Martín".into(),
            telefono: "611222333".into(),
            email: "lucia@example.com".into(),
            date: NaiveDate::from_ymd_opt(2030, 3, 4).unwrap(),
            time: "17:30".into(),
        }
    }

    #[test]
    fn test_confirmation_names_customer_date_and_time() {
        let message = booking_confirmation(&booking(), "Peluquería Sol");
        assert_eq!(message.subject, "Turno confirmado: 04/03/2030 a las 17:30");
        assert!(message.body.starts_with("Hola Lucía Martín"));
        assert!(message.body.contains("04/03/2030 a las 17:30"));
        assert!(message.body.ends_with("Peluquería Sol"));
    }

    #[test]
    fn test_cancellation_without_business_name() {
        let message = booking_cancellation(&booking(), "  ");
        assert_eq!(message.subject, "Turno cancelado: 04/03/2030 a las 17:30");
        assert!(message.body.contains("fue cancelado"));
        assert!(message.body.ends_with("cuando quieras."));
    }
}
