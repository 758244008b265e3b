use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Utc};

use crate::models::{Booking, BookingStatus};
use crate::services::booking_store::upcoming_confirmed;

const PRODID: &str = "-//Photobooking//Studio Bookings//EN";

/// Single-booking calendar file, as an all-day event.
pub fn generate_ics(booking: &Booking, studio_name: &str) -> String {
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    wrap_calendar(studio_name, &render_event(booking, &dtstamp))
}

/// Calendar feed with one event for every upcoming confirmed booking.
pub fn generate_feed(bookings: &[Booking], studio_name: &str) -> String {
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let events: String = upcoming_confirmed(bookings)
        .into_iter()
        .map(|b| render_event(b, &dtstamp))
        .collect();
    wrap_calendar(studio_name, &events)
}

/// Days of `month` that have at least one booking, in any status.
pub fn booked_days(bookings: &[Booking], year: i32, month: u32) -> Vec<u32> {
    bookings
        .iter()
        .filter(|b| b.date.year() == year && b.date.month() == month)
        .map(|b| b.date.day())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn wrap_calendar(studio_name: &str, events: &str) -> String {
    let name = escape_text(studio_name);
    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:{PRODID}\r\n\
         X-WR-CALNAME:{name}\r\n\
         {events}\
         END:VCALENDAR\r\n"
    )
}

fn render_event(booking: &Booking, dtstamp: &str) -> String {
    let dtstart = booking.date.format("%Y%m%d").to_string();
    // DTEND is exclusive for all-day events.
    let dtend = booking
        .date
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
        .format("%Y%m%d")
        .to_string();
    let uid = format!("{}@photobooking", booking.id);
    let summary = escape_text(&format!("{} - {}", booking.service, booking.client_name));
    let description = escape_text(booking.message.as_deref().unwrap_or("No additional notes"));
    let status = match booking.status {
        BookingStatus::Confirmed => "CONFIRMED",
        BookingStatus::Cancelled => "CANCELLED",
        BookingStatus::Pending | BookingStatus::Completed => "TENTATIVE",
    };

    format!(
        "BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART;VALUE=DATE:{dtstart}\r\n\
         DTEND;VALUE=DATE:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         STATUS:{status}\r\n\
         END:VEVENT\r\n"
    )
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn booking(id: u64, date: &str, status: BookingStatus, message: Option<&str>) -> Booking {
        Booking {
            id,
            client_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+63 912 345 6789".to_string(),
            service: "Wedding Photography".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount: Amount::new(25000),
            status,
            message: message.map(str::to_string),
            payment_proof_url: None,
        }
    }

    #[test]
    fn test_generate_ics() {
        let b = booking(
            1,
            "2025-12-15",
            BookingStatus::Confirmed,
            Some("Full-day coverage, include preparation and reception."),
        );

        let ics = generate_ics(&b, "Lens & Light");
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Lens & Light"));
        assert!(ics.contains("UID:1@photobooking"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20251215"));
        assert!(ics.contains("DTEND;VALUE=DATE:20251216"));
        assert!(ics.contains("SUMMARY:Wedding Photography - Maria Santos"));
        assert!(ics.contains("DESCRIPTION:Full-day coverage\\, include preparation and reception."));
        assert!(ics.contains("STATUS:CONFIRMED"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn test_generate_ics_no_message_month_end() {
        let b = booking(2, "2025-12-31", BookingStatus::Pending, None);
        let ics = generate_ics(&b, "Studio");
        assert!(ics.contains("DTEND;VALUE=DATE:20260101"));
        assert!(ics.contains("DESCRIPTION:No additional notes"));
        assert!(ics.contains("STATUS:TENTATIVE"));
    }

    #[test]
    fn test_feed_only_has_confirmed_in_date_order() {
        let bookings = vec![
            booking(1, "2025-12-15", BookingStatus::Confirmed, None),
            booking(2, "2025-12-01", BookingStatus::Pending, None),
            booking(3, "2025-11-20", BookingStatus::Confirmed, None),
        ];

        let feed = generate_feed(&bookings, "Studio");
        assert_eq!(feed.matches("BEGIN:VEVENT").count(), 2);
        assert!(!feed.contains("UID:2@photobooking"));
        let first = feed.find("UID:3@photobooking").unwrap();
        let second = feed.find("UID:1@photobooking").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_feed_is_valid_calendar() {
        let feed = generate_feed(&[], "Studio");
        assert!(feed.contains("BEGIN:VCALENDAR"));
        assert!(!feed.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_booked_days() {
        let bookings = vec![
            booking(1, "2025-12-15", BookingStatus::Confirmed, None),
            booking(2, "2025-12-01", BookingStatus::Pending, None),
            booking(3, "2025-11-28", BookingStatus::Completed, None),
            booking(4, "2025-12-15", BookingStatus::Cancelled, None),
            booking(5, "2024-12-03", BookingStatus::Confirmed, None),
        ];

        assert_eq!(booked_days(&bookings, 2025, 12), vec![1, 15]);
        assert_eq!(booked_days(&bookings, 2025, 11), vec![28]);
        assert!(booked_days(&bookings, 2025, 1).is_empty());
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a;b,c\\d\r\ne"), "a\\;b\\,c\\\\d\\ne");
    }
}
