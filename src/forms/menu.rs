use std::io::{Seek, SeekFrom};

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use csv::Trim;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::Category;
use crate::domain::menu_item::{NewMenuItem, UpdateMenuItem};
use crate::forms::{parse_optional_id, parse_price_cents, sanitize_inline_text, sanitize_multiline_text};

/// Maximum length allowed for a menu item name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for a menu item description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Maximum length allowed for an image url.
const IMAGE_URL_MAX_LEN: u64 = 512;

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu item forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("menu item name cannot be empty")]
    EmptyName,
    /// The price field could not be parsed into cents.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    /// Supplied identifier field could not be parsed.
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: String },
    /// A CSV row referenced a category that does not exist.
    #[error("unknown category `{name}`")]
    UnknownCategory { name: String },
    /// CSV parsing failures during import.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// The uploaded file could not be read.
    #[error("upload could not be read: {0}")]
    Io(#[from] std::io::Error),
}

/// Form payload emitted when submitting the "Add menu item" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Menu card description.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    /// Price in decimal form, parsed into cents.
    pub price: String,
    /// Optional image url.
    #[validate(length(max = IMAGE_URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    /// Optional owning category identifier in string form.
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub is_available: bool,
}

impl AddMenuItemForm {
    /// Validates and sanitizes the payload into a domain `NewMenuItem`.
    pub fn into_new_menu_item(self) -> MenuFormResult<NewMenuItem> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        let price_cents =
            parse_price_cents(&self.price).ok_or_else(|| MenuFormError::InvalidPrice {
                value: self.price.trim().to_string(),
            })?;

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .unwrap_or_default();

        let image_url = self
            .image_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let category_id = parse_optional_id(self.category_id).map_err(|value| {
            MenuFormError::InvalidIdentifier {
                field: "category",
                value,
            }
        })?;

        let mut new_item = NewMenuItem::new(sanitized_name, price_cents)
            .with_description(description)
            .with_image_url(image_url)
            .with_flags(self.is_vegetarian, self.is_spicy)
            .with_availability(self.is_available);

        if let Some(category_id) = category_id {
            new_item = new_item.with_category_id(category_id);
        }

        Ok(new_item)
    }
}

/// Normalized payload produced by the "Edit menu item" form.
#[derive(Debug)]
pub struct EditMenuItemPayload {
    /// Identifier of the menu item to update.
    pub menu_item_id: i32,
    /// Patch data that should be applied to the menu item.
    pub update: UpdateMenuItem,
}

/// Form payload emitted when editing an existing menu item.
#[derive(Debug, Deserialize, Validate)]
pub struct EditMenuItemForm {
    /// Identifier of the menu item to update.
    #[validate(range(min = 1))]
    pub menu_item_id: i32,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[validate(length(max = IMAGE_URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub is_available: bool,
}

impl EditMenuItemForm {
    /// Validates and sanitizes the payload into a domain `UpdateMenuItem`.
    pub fn into_update_menu_item(self) -> MenuFormResult<EditMenuItemPayload> {
        self.validate()?;

        let EditMenuItemForm {
            menu_item_id,
            name,
            description,
            price,
            image_url,
            category_id,
            is_vegetarian,
            is_spicy,
            is_available,
        } = self;

        let name = {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(MenuFormError::EmptyName);
            }
            sanitized
        };

        let price_cents = parse_price_cents(&price).ok_or_else(|| MenuFormError::InvalidPrice {
            value: price.trim().to_string(),
        })?;

        let description = description
            .as_deref()
            .map(sanitize_multiline_text)
            .unwrap_or_default();

        let image_url = image_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let category_id =
            parse_optional_id(category_id).map_err(|value| MenuFormError::InvalidIdentifier {
                field: "category",
                value,
            })?;

        let update = UpdateMenuItem::new(
            name,
            description,
            price_cents,
            image_url,
            category_id,
            is_vegetarian,
            is_spicy,
            is_available,
        );

        Ok(EditMenuItemPayload {
            menu_item_id,
            update,
        })
    }
}

/// Multipart payload carrying a CSV file of menu items.
#[derive(Debug, MultipartForm)]
pub struct UploadMenuItemsForm {
    pub csv: TempFile,
}

/// One row of the menu import file.
#[derive(Debug, Deserialize)]
struct MenuItemCsvRow {
    name: String,
    #[serde(default)]
    description: String,
    price: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    vegetarian: String,
    #[serde(default)]
    spicy: String,
    #[serde(default)]
    available: Option<String>,
}

impl UploadMenuItemsForm {
    /// Parses the uploaded CSV into insertable menu items, resolving category
    /// names against the known category list.
    pub fn into_new_menu_items(
        &mut self,
        categories: &[Category],
    ) -> MenuFormResult<Vec<NewMenuItem>> {
        self.csv.file.as_file_mut().seek(SeekFrom::Start(0))?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(self.csv.file.as_file_mut());

        let mut items = Vec::new();

        for row in reader.deserialize::<MenuItemCsvRow>() {
            let row = row?;

            let name = sanitize_inline_text(&row.name);
            if name.is_empty() {
                return Err(MenuFormError::EmptyName);
            }

            let price_cents =
                parse_price_cents(&row.price).ok_or_else(|| MenuFormError::InvalidPrice {
                    value: row.price.clone(),
                })?;

            let category_id = match row.category.trim() {
                "" => None,
                category_name => {
                    let found = categories.iter().find(|candidate| {
                        candidate.name.eq_ignore_ascii_case(category_name)
                    });
                    match found {
                        Some(category) => Some(category.id),
                        None => {
                            return Err(MenuFormError::UnknownCategory {
                                name: category_name.to_string(),
                            });
                        }
                    }
                }
            };

            let available = row
                .available
                .as_deref()
                .map(parse_flag)
                .unwrap_or(true);

            let mut item = NewMenuItem::new(name, price_cents)
                .with_description(sanitize_multiline_text(&row.description))
                .with_flags(parse_flag(&row.vegetarian), parse_flag(&row.spicy))
                .with_availability(available);

            if let Some(category_id) = category_id {
                item = item.with_category_id(category_id);
            }

            items.push(item);
        }

        Ok(items)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use chrono::NaiveDateTime;
    use tempfile::NamedTempFile;

    fn category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            icon: String::new(),
            display_order: 0,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn build_upload_form(csv: &str) -> UploadMenuItemsForm {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(csv.as_bytes()).expect("write csv contents");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("rewind csv");

        UploadMenuItemsForm {
            csv: TempFile {
                file,
                content_type: None,
                file_name: Some("menu.csv".to_string()),
                size: csv.len(),
            },
        }
    }

    #[test]
    fn add_menu_item_form_sanitizes_and_converts() {
        let form = AddMenuItemForm {
            name: "  Chicken  Biryani ".to_string(),
            description: Some(" Fragrant rice \n\n with chicken ".to_string()),
            price: "12.50".to_string(),
            image_url: Some(" https://cdn.example.com/biryani.jpg ".to_string()),
            category_id: Some(" 3 ".to_string()),
            is_vegetarian: false,
            is_spicy: true,
            is_available: true,
        };

        let item = form
            .into_new_menu_item()
            .expect("expected conversion to succeed");

        assert_eq!(item.name, "Chicken Biryani");
        assert_eq!(item.price_cents, 1250);
        assert_eq!(item.category_id, Some(3));
        assert_eq!(item.image_url, "https://cdn.example.com/biryani.jpg");
        assert!(item.is_spicy);
        assert!(!item.is_vegetarian);
        assert!(item.is_available);
    }

    #[test]
    fn add_menu_item_form_rejects_bad_price() {
        let form = AddMenuItemForm {
            name: "Naan".to_string(),
            description: None,
            price: "free".to_string(),
            image_url: None,
            category_id: None,
            is_vegetarian: true,
            is_spicy: false,
            is_available: true,
        };

        let result = form.into_new_menu_item();

        assert!(matches!(
            result,
            Err(MenuFormError::InvalidPrice { value }) if value == "free"
        ));
    }

    #[test]
    fn edit_menu_item_form_rejects_empty_name() {
        let form = EditMenuItemForm {
            menu_item_id: 5,
            name: "   ".to_string(),
            description: None,
            price: "1.00".to_string(),
            image_url: None,
            category_id: None,
            is_vegetarian: false,
            is_spicy: false,
            is_available: false,
        };

        let result = form.into_update_menu_item();

        assert!(matches!(result, Err(MenuFormError::EmptyName)));
    }

    #[test]
    fn upload_parses_rows_and_resolves_categories() {
        let csv = "\
name,description,price,category,vegetarian,spicy,available
Paneer Tikka,Grilled paneer,8.50,Starters,yes,yes,yes
Lamb Korma,,14,Mains,no,no,
";
        let mut form = build_upload_form(csv);
        let categories = vec![category(1, "Starters"), category(2, "Mains")];

        let items = form
            .into_new_menu_items(&categories)
            .expect("expected parse to succeed");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Paneer Tikka");
        assert_eq!(items[0].price_cents, 850);
        assert_eq!(items[0].category_id, Some(1));
        assert!(items[0].is_vegetarian);
        assert!(items[0].is_available);

        assert_eq!(items[1].price_cents, 1400);
        assert_eq!(items[1].category_id, Some(2));
        assert!(items[1].is_available);
    }

    #[test]
    fn upload_rejects_unknown_category() {
        let csv = "name,price,category\nSamosa,3.00,Snacks\n";
        let mut form = build_upload_form(csv);

        let result = form.into_new_menu_items(&[category(1, "Starters")]);

        assert!(matches!(
            result,
            Err(MenuFormError::UnknownCategory { name }) if name == "Snacks"
        ));
    }
}
