//! Sample records every session starts with.

use anyhow::Context;
use chrono::NaiveDate;

use crate::models::{Amount, Booking, BookingStatus, Category, Photo, ServiceOffering};
use crate::services::booking_store::BookingStore;
use crate::services::catalog::Catalog;

pub fn booking_store() -> anyhow::Result<BookingStore> {
    let bookings = vec![
        Booking {
            id: 1,
            client_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            phone: "+63 912 345 6789".to_string(),
            service: "Wedding Photography".to_string(),
            date: date("2025-12-15")?,
            amount: Amount::new(25000),
            status: BookingStatus::Confirmed,
            message: Some("Full-day coverage, include preparation and reception.".to_string()),
            payment_proof_url: Some(
                "https://via.placeholder.com/400x250?text=GCash+Proof+1".to_string(),
            ),
        },
        Booking {
            id: 2,
            client_name: "Juan Dela Cruz".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+63 923 456 7890".to_string(),
            service: "Portrait Photography".to_string(),
            date: date("2025-12-01")?,
            amount: Amount::new(5000),
            status: BookingStatus::Pending,
            message: Some("Outdoor golden hour photoshoot.".to_string()),
            payment_proof_url: Some(
                "https://via.placeholder.com/400x250?text=GCash+Proof+2".to_string(),
            ),
        },
        Booking {
            id: 3,
            client_name: "Ana Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+63 934 567 8901".to_string(),
            service: "Event Photography".to_string(),
            date: date("2025-11-28")?,
            amount: Amount::new(15000),
            status: BookingStatus::Completed,
            message: Some("Corporate event at BGC, 3-hour coverage.".to_string()),
            payment_proof_url: Some(
                "https://via.placeholder.com/400x250?text=GCash+Proof+3".to_string(),
            ),
        },
    ];

    BookingStore::new(bookings).context("invalid seed bookings")
}

pub fn catalog() -> Catalog {
    let photos = [
        (1, "/images/bg1.jpg", "Beach Wedding Ceremony", "A beautiful sunset wedding ceremony by the beach, capturing the couple's special moment.", "wedding"),
        (2, "/images/bg2.jpg", "Reception Dance", "The first dance under twinkling lights, a memory to cherish forever.", "wedding"),
        (3, "/images/bg3.jpg", "Wedding Details", "Intricate details of the wedding decorations and arrangements.", "wedding"),
        (4, "/images/bg4.jpg", "Family Portrait", "A warm family portrait capturing genuine smiles and connections.", "portrait"),
        (5, "/images/bg1.jpg", "Professional Headshots", "Clean, professional headshots perfect for corporate use.", "portrait"),
        (6, "/images/bg2.jpg", "Couple's Session", "An intimate couple's portrait session in a natural setting.", "portrait"),
        (7, "/images/bg3.jpg", "Birthday Celebration", "Joyful moments from a milestone birthday celebration.", "event"),
        (8, "/images/bg4.jpg", "Corporate Event", "Professional coverage of a corporate gathering and networking event.", "event"),
        (9, "/images/bg1.jpg", "Graduation Party", "Capturing the excitement and pride of a graduation celebration.", "event"),
    ]
    .into_iter()
    .map(|(id, image, title, description, category)| Photo {
        id,
        image: image.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    })
    .collect();

    let categories = [
        ("all", "All Photos"),
        ("wedding", "Weddings"),
        ("portrait", "Portraits"),
        ("event", "Events"),
    ]
    .into_iter()
    .map(|(id, label)| Category {
        id: id.to_string(),
        label: label.to_string(),
    })
    .collect();

    let services = [
        ("Wedding Photography", "Full-day coverage tailored to capture the emotion, beauty, and story of your special day.", 15000, 35000, "/images/bg1.jpg"),
        ("Portrait Photography", "Studio or outdoor portraits for individuals, couples, or families.", 3000, 8000, "/images/bg2.jpg"),
        ("Event Photography", "Professional coverage for birthdays, corporate events, reunions, and more.", 5000, 20000, "/images/bg3.jpg"),
    ]
    .into_iter()
    .map(|(title, description, min, max, image)| ServiceOffering {
        title: title.to_string(),
        description: description.to_string(),
        price_min: Amount::new(min),
        price_max: Amount::new(max),
        image: image.to_string(),
    })
    .collect();

    Catalog {
        photos,
        categories,
        services,
    }
}

fn date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid seed date {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::booking_store::aggregate_stats;

    #[test]
    fn test_seed_bookings() {
        let store = booking_store().unwrap();
        let stats = aggregate_stats(store.bookings());
        assert_eq!(stats.total_clients, 3);
        assert_eq!(stats.total_earnings, Amount::new(15000));
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.confirmed_count, 1);
    }

    #[test]
    fn test_seed_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.photos.len(), 9);
        assert_eq!(catalog.photos_in("portrait").len(), 3);
        assert_eq!(catalog.categories[0].id, "all");
        assert_eq!(catalog.services[1].price_label(), "₱3,000 - ₱8,000");
    }
}
