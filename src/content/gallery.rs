/// Photo gallery dataset
///
/// Nine captioned photos spanning the club's sports, facilities, and
/// community events. The category set is closed: an image with an
/// out-of-set tag is unrepresentable.

use super::Categorized;

/// Closed set of gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Basketball,
    Tennis,
    Swimming,
    Volleyball,
    Facilities,
    Events,
}

impl GalleryCategory {
    /// Every category, in the order the filter chips display them.
    pub const ALL: [GalleryCategory; 6] = [
        GalleryCategory::Basketball,
        GalleryCategory::Tennis,
        GalleryCategory::Swimming,
        GalleryCategory::Volleyball,
        GalleryCategory::Facilities,
        GalleryCategory::Events,
    ];

    /// Display label for filter chips and captions.
    pub fn label(self) -> &'static str {
        match self {
            GalleryCategory::Basketball => "Basketball",
            GalleryCategory::Tennis => "Tennis",
            GalleryCategory::Swimming => "Swimming",
            GalleryCategory::Volleyball => "Volleyball",
            GalleryCategory::Facilities => "Facilities",
            GalleryCategory::Events => "Events",
        }
    }
}

/// A single gallery photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryImage {
    /// Unique, stable id within the gallery collection
    pub id: u32,
    /// Asset path relative to the assets root (e.g. "sports/event1.jpg")
    pub source: &'static str,
    /// Human-readable caption
    pub caption: &'static str,
    pub category: GalleryCategory,
    /// Included in the featured showcase strip
    pub featured: bool,
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

pub static GALLERY_IMAGES: [GalleryImage; 9] = [
    GalleryImage {
        id: 1,
        source: "sports/event1.jpg",
        caption: "Basketball tournament final match",
        category: GalleryCategory::Basketball,
        featured: true,
    },
    GalleryImage {
        id: 2,
        source: "sports/event2.jpg",
        caption: "Youth sports camp training session",
        category: GalleryCategory::Events,
        featured: true,
    },
    GalleryImage {
        id: 3,
        source: "sports/event3.jpg",
        caption: "Junior basketball league opener",
        category: GalleryCategory::Basketball,
        featured: false,
    },
    GalleryImage {
        id: 4,
        source: "sports/facility1.jpg",
        caption: "Indoor basketball court",
        category: GalleryCategory::Facilities,
        featured: true,
    },
    GalleryImage {
        id: 5,
        source: "sports/facility2.jpg",
        caption: "Olympic-size swimming pool",
        category: GalleryCategory::Swimming,
        featured: true,
    },
    GalleryImage {
        id: 6,
        source: "sports/team1.jpg",
        caption: "Basketball coaching session",
        category: GalleryCategory::Basketball,
        featured: false,
    },
    GalleryImage {
        id: 7,
        source: "sports/team2.jpg",
        caption: "Tennis practice session",
        category: GalleryCategory::Tennis,
        featured: false,
    },
    GalleryImage {
        id: 8,
        source: "sports/team3.jpg",
        caption: "Swimming team training",
        category: GalleryCategory::Swimming,
        featured: false,
    },
    GalleryImage {
        id: 9,
        source: "sports/team4.jpg",
        caption: "Volleyball team practice",
        category: GalleryCategory::Volleyball,
        featured: false,
    },
];

/// The featured subset, in collection order.
pub fn featured_images() -> Vec<&'static GalleryImage> {
    GALLERY_IMAGES.iter().filter(|image| image.featured).collect()
}

/// Look up a gallery image by id.
pub fn image_by_id(id: u32) -> Option<&'static GalleryImage> {
    GALLERY_IMAGES.iter().find(|image| image.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in GALLERY_IMAGES.iter().enumerate() {
            for b in &GALLERY_IMAGES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate gallery id {}", a.id);
            }
        }
    }

    #[test]
    fn test_category_distribution() {
        let count = |category| {
            GALLERY_IMAGES
                .iter()
                .filter(|image| image.category == category)
                .count()
        };
        assert_eq!(count(GalleryCategory::Basketball), 3);
        assert_eq!(count(GalleryCategory::Tennis), 1);
        assert_eq!(count(GalleryCategory::Swimming), 2);
        assert_eq!(count(GalleryCategory::Volleyball), 1);
        assert_eq!(count(GalleryCategory::Facilities), 1);
        assert_eq!(count(GalleryCategory::Events), 1);
    }

    #[test]
    fn test_featured_subset() {
        let featured = featured_images();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|image| image.featured));
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(image_by_id(5).map(|i| i.source), Some("sports/facility2.jpg"));
        assert!(image_by_id(42).is_none());
    }
}
