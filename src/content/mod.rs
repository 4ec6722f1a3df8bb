/// Club content module
///
/// This module holds all content displayed by the application:
/// - Gallery images and their categories (gallery.rs)
/// - Events calendar (events.rs)
/// - Coaching team (team.rs)
/// - Training programs (programs.rs)
///
/// All collections are load-time literals. Nothing here is created,
/// updated, or deleted while the application runs.

pub mod events;
pub mod gallery;
pub mod programs;
pub mod team;

/// A content item that carries a category tag from a closed set.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

/// Active category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C: Copy + PartialEq> CategoryFilter<C> {
    /// Whether an item with the given category passes this filter.
    pub fn matches(self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Narrow a collection to the items matching the filter.
///
/// `All` returns every item; otherwise the ordered subsequence whose
/// category equals the selected one. Relative order is always preserved
/// and the input is never touched. An empty result is a normal outcome
/// the caller renders as an empty state, not an error.
pub fn filter_items<T: Categorized>(items: &[T], filter: CategoryFilter<T::Category>) -> Vec<&T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::gallery::{GalleryCategory, GALLERY_IMAGES};
    use super::*;

    #[test]
    fn test_all_filter_is_identity() {
        let filtered = filter_items(&GALLERY_IMAGES, CategoryFilter::All);
        assert_eq!(filtered.len(), GALLERY_IMAGES.len());
        for (kept, original) in filtered.iter().zip(GALLERY_IMAGES.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_category_filter_is_sound_and_ordered() {
        for category in GalleryCategory::ALL {
            let filtered = filter_items(&GALLERY_IMAGES, CategoryFilter::Only(category));

            // Only matching items survive
            assert!(filtered.iter().all(|image| image.category == category));

            // Exactly the matching items, in original relative order
            let ids: Vec<u32> = filtered.iter().map(|image| image.id).collect();
            let expected: Vec<u32> = GALLERY_IMAGES
                .iter()
                .filter(|image| image.category == category)
                .map(|image| image.id)
                .collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_swimming_filter_scenario() {
        let swimming = filter_items(
            &GALLERY_IMAGES,
            CategoryFilter::Only(GalleryCategory::Swimming),
        );
        assert_eq!(swimming.len(), 2);
        assert!(swimming[0].id < swimming[1].id);
    }

    #[test]
    fn test_filter_never_invents_items() {
        let total: usize = GalleryCategory::ALL
            .iter()
            .map(|&c| filter_items(&GALLERY_IMAGES, CategoryFilter::Only(c)).len())
            .sum();
        assert_eq!(total, GALLERY_IMAGES.len());
    }
}
