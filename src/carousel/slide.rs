use crate::constants::ADOPT_PATH;
use crate::pet::PetSummary;

/// Text and link targets shown in the hero regions for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideContent {
    pub title: String,
    pub primary_href: String,
    pub secondary_href: String,
    pub counter: String,
    pub age: String,
    pub breed: String,
    /// Empty when the species is unknown
    pub species: String,
}

impl SlideContent {
    pub fn for_pet(index: usize, pet: &PetSummary) -> Self {
        let href = adopt_href(pet.id);
        Self {
            title: pet.name.to_uppercase(),
            primary_href: href.clone(),
            secondary_href: href,
            counter: counter_label(index),
            age: age_label(pet.age),
            breed: pet.breed.clone(),
            species: pet.species.clone().unwrap_or_default(),
        }
    }
}

/// One carousel frame bound to a single pet.
#[derive(Debug, Clone)]
pub struct Slide {
    pub pet: PetSummary,
    pub content: SlideContent,
}

impl Slide {
    pub fn new(index: usize, pet: PetSummary) -> Self {
        let content = SlideContent::for_pet(index, &pet);
        Self { pet, content }
    }
}

/// Whether a slide and its dot carry the active highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideVisual {
    Active,
    Inactive,
}

impl SlideVisual {
    pub fn is_active(self) -> bool {
        self == SlideVisual::Active
    }
}

pub fn adopt_href(pet_id: u32) -> String {
    format!("{ADOPT_PATH}/{pet_id}")
}

/// One-based slide number, zero-padded to two digits.
pub fn counter_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn age_label(age: u32) -> String {
    if age == 1 {
        "1 year".to_string()
    } else {
        format!("{age} years")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_pluralized_except_for_one() {
        assert_eq!(age_label(0), "0 years");
        assert_eq!(age_label(1), "1 year");
        assert_eq!(age_label(2), "2 years");
        assert_eq!(age_label(14), "14 years");
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(counter_label(0), "01");
        assert_eq!(counter_label(9), "10");
        assert_eq!(counter_label(99), "100");
    }

    #[test]
    fn content_is_derived_from_pet() {
        let pet = PetSummary::new(42, "Luna", 1, "Russian Blue");
        let content = SlideContent::for_pet(3, &pet);
        assert_eq!(content.title, "LUNA");
        assert_eq!(content.primary_href, "/adopt/42");
        assert_eq!(content.secondary_href, "/adopt/42");
        assert_eq!(content.counter, "04");
        assert_eq!(content.age, "1 year");
        assert_eq!(content.breed, "Russian Blue");
        assert_eq!(content.species, "");
    }

    #[test]
    fn species_is_shown_when_known() {
        let pet = PetSummary::new(5, "Atlas", 5, "Husky").with_species("Dog");
        assert_eq!(SlideContent::for_pet(4, &pet).species, "Dog");
    }
}
