use crate::models::{Category, Photo, ServiceOffering, ALL_CATEGORIES};

/// Static gallery and services listing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub photos: Vec<Photo>,
    pub categories: Vec<Category>,
    pub services: Vec<ServiceOffering>,
}

impl Catalog {
    pub fn photo(&self, id: u64) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn photos_in(&self, category: &str) -> Vec<&Photo> {
        filter_photos(&self.photos, category)
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }
}

/// Exact match on the category tag. `"all"` turns filtering off.
pub fn filter_photos<'a>(photos: &'a [Photo], category: &str) -> Vec<&'a Photo> {
    photos
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u64, category: &str) -> Photo {
        Photo {
            id,
            image: format!("/images/bg{id}.jpg"),
            title: format!("Photo {id}"),
            description: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_filter_photos() {
        let photos = vec![
            photo(1, "wedding"),
            photo(2, "portrait"),
            photo(3, "wedding"),
            photo(4, "event"),
        ];

        let ids = |category: &str| -> Vec<u64> {
            filter_photos(&photos, category).iter().map(|p| p.id).collect()
        };

        assert_eq!(ids("all"), vec![1, 2, 3, 4]);
        assert_eq!(ids("wedding"), vec![1, 3]);
        assert_eq!(ids("event"), vec![4]);
        assert!(ids("Wedding").is_empty());
        assert!(ids("landscape").is_empty());
    }

    #[test]
    fn test_photo_lookup() {
        let catalog = Catalog {
            photos: vec![photo(1, "wedding"), photo(2, "event")],
            ..Default::default()
        };
        assert_eq!(catalog.photo(2).map(|p| p.category.as_str()), Some("event"));
        assert!(catalog.photo(3).is_none());
        assert_eq!(catalog.photos_in("wedding").len(), 1);
    }
}
