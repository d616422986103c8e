use serde::{Deserialize, Serialize};

/// A category page discovered on the root listing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryLink {
    pub url: String,
}

/// A recipe page listed by a category.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeReference {
    pub url: String,
}
