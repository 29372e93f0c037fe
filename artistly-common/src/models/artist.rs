use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// A performer listing in the directory
///
/// Location and fee labels are kept verbatim from the data source; they are
/// not guaranteed to belong to the picker option sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub bio: String,
    /// Never empty
    pub categories: Vec<CategoryId>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
    pub image: String,
    pub rating: f32,
    pub review_count: u32,
    pub verified: bool,
}

impl Artist {
    pub fn has_category(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }
}
