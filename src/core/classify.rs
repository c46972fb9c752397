use crate::models::{Classification, ClassifyMode, DietaryCategory, Venue};

/// Lookup tables for one dietary category
///
/// `associated_cuisines` drive the community inference; any
/// `exclusion_terms` found in the venue's name or description veto it.
/// The exclusion list is a coarse safety net, not an exhaustive one.
#[derive(Debug, Clone, PartialEq)]
pub struct DietaryProfile {
    pub category: DietaryCategory,
    pub associated_cuisines: Vec<String>,
    pub exclusion_terms: Vec<String>,
}

impl DietaryProfile {
    pub fn new(
        category: DietaryCategory,
        associated_cuisines: Vec<String>,
        exclusion_terms: Vec<String>,
    ) -> Self {
        // Stored lowercase so matching only has to lowercase the venue side
        Self {
            category,
            associated_cuisines: associated_cuisines.iter().map(|c| normalize(c)).collect(),
            exclusion_terms: exclusion_terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn halal() -> Self {
        Self::new(
            DietaryCategory::Halal,
            [
                "Middle Eastern",
                "Turkish",
                "Pakistani",
                "Bangladeshi",
                "Indonesian",
                "Malaysian",
                "Afghan",
                "Lebanese",
                "Moroccan",
                "Iranian",
                "Persian",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ["pork", "bacon", "ham", "charcuterie", "prosciutto"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    /// Explicit flag, or the category named in text, cuisines or types
    pub fn has_strict_signal(&self, venue: &Venue) -> bool {
        if venue.has_dietary_flag(self.category) {
            return true;
        }

        let needle = self.category.as_str();

        if text_fields(venue).any(|text| normalize(text).contains(needle)) {
            return true;
        }

        venue
            .cuisines
            .iter()
            .chain(venue.types.iter())
            .any(|tag| normalize(tag).contains(needle))
    }

    /// Associated cuisine present and no exclusion term in name or description
    pub fn has_community_signal(&self, venue: &Venue) -> bool {
        let cuisine_match = venue.cuisines.iter().any(|tag| {
            let tag = normalize(tag);
            self.associated_cuisines
                .iter()
                .any(|cuisine| tag.contains(cuisine.as_str()))
        });

        if !cuisine_match {
            return false;
        }

        !text_fields(venue).any(|text| {
            let text = text.to_lowercase();
            self.exclusion_terms
                .iter()
                .any(|term| text.contains(term.as_str()))
        })
    }
}

impl Default for DietaryProfile {
    fn default() -> Self {
        Self::halal()
    }
}

/// Decide whether a venue qualifies under the profile's category
///
/// A strict signal always yields `verified`, whatever the mode. The cuisine
/// inference is only tried in [`ClassifyMode::All`] and yields `community`.
/// This is a best-effort heuristic, not a certification.
pub fn classify(venue: &Venue, profile: &DietaryProfile, mode: ClassifyMode) -> Classification {
    if profile.has_strict_signal(venue) {
        return Classification::verified();
    }

    if mode == ClassifyMode::All && profile.has_community_signal(venue) {
        return Classification::community();
    }

    Classification::none()
}

fn text_fields(venue: &Venue) -> impl Iterator<Item = &str> {
    std::iter::once(venue.name.as_str()).chain(venue.description.as_deref())
}

/// Lowercase and read `_`/`-` as spaces, so `middle_eastern` matches "Middle Eastern"
fn normalize(text: &str) -> String {
    text.to_lowercase().replace(['_', '-'], " ")
}
