use serde::{Deserialize, Serialize};
use std::fmt;

/// The nutrients a recipe page may list, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    Calories,
    Fat,
    Saturates,
    Sugars,
    Salt,
    Protein,
    Carbs,
    Fibre,
}

impl Nutrient {
    pub const ALL: [Nutrient; 8] = [
        Nutrient::Calories,
        Nutrient::Fat,
        Nutrient::Saturates,
        Nutrient::Sugars,
        Nutrient::Salt,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fibre,
    ];

    /// Label as printed on the page and used as the CSV header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Fat => "Fat",
            Self::Saturates => "Saturates",
            Self::Sugars => "Sugars",
            Self::Salt => "Salt",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fibre => "Fibre",
        }
    }

    /// Match a page label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|n| n.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition values keyed by [`Nutrient`].
///
/// Every nutrient always has a value; ones the page did not list are empty strings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: String,
    pub fat: String,
    pub saturates: String,
    pub sugars: String,
    pub salt: String,
    pub protein: String,
    pub carbs: String,
    pub fibre: String,
}

impl Nutrition {
    pub fn get(&self, nutrient: Nutrient) -> &str {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Fat => &self.fat,
            Nutrient::Saturates => &self.saturates,
            Nutrient::Sugars => &self.sugars,
            Nutrient::Salt => &self.salt,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fibre => &self.fibre,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: impl Into<String>) {
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Saturates => &mut self.saturates,
            Nutrient::Sugars => &mut self.sugars,
            Nutrient::Salt => &mut self.salt,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fibre => &mut self.fibre,
        };
        *slot = value.into();
    }

    /// All eight (nutrient, value) pairs in column order.
    pub fn entries(&self) -> [(Nutrient, &str); 8] {
        Nutrient::ALL.map(|n| (n, self.get(n)))
    }

    /// Nutrients that actually carry a value.
    pub fn found(&self) -> usize {
        self.entries().iter().filter(|(_, v)| !v.is_empty()).count()
    }
}

/// One recipe page, flattened to the dataset's columns.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Page the record was extracted from; not a dataset column.
    #[serde(default)]
    pub url: String,
    pub title: String,
    pub subheading: String,
    pub image_link: String,
    pub serves: String,
    pub time: String,
    pub intro: String,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}
