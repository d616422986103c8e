use csv::StringRecord;

use super::LIST_DELIMITER;
use crate::tools::extract::{Nutrient, Nutrition, RecipeRecord};

/// Flatten a record into dataset columns.
pub(super) fn record_to_row(record: &RecipeRecord) -> Vec<String> {
    let mut row = vec![
        record.title.clone(),
        record.subheading.clone(),
        record.image_link.clone(),
        record.serves.clone(),
        record.time.clone(),
        record.intro.clone(),
    ];
    row.extend(
        record
            .nutrition
            .entries()
            .into_iter()
            .map(|(_, v)| v.to_string()),
    );
    row.push(record.ingredients.join(LIST_DELIMITER));
    row.push(record.steps.join(LIST_DELIMITER));
    row
}

/// Rebuild a record from one dataset row. Missing cells read as empty.
pub(super) fn row_to_record(row: &StringRecord) -> RecipeRecord {
    let cell = |i: usize| row.get(i).unwrap_or_default().to_string();

    let mut nutrition = Nutrition::default();
    for (offset, nutrient) in Nutrient::ALL.into_iter().enumerate() {
        nutrition.set(nutrient, cell(6 + offset));
    }

    RecipeRecord {
        url: String::new(),
        title: cell(0),
        subheading: cell(1),
        image_link: cell(2),
        serves: cell(3),
        time: cell(4),
        intro: cell(5),
        nutrition,
        ingredients: split_list(&cell(14)),
        steps: split_list(&cell(15)),
    }
}

/// Split a packed list cell; an empty cell is an empty list.
pub(super) fn split_list(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(LIST_DELIMITER).map(str::to_string).collect()
}
