use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::pagination::Pagination;

/// Domain representation of a dish on the menu.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the menu item.
    pub id: i32,
    /// Display name of the dish.
    pub name: String,
    /// Menu card description.
    pub description: String,
    /// Price in cents.
    pub price_cents: i32,
    /// Image shown on the storefront.
    pub image_url: String,
    /// Owning category, if any.
    pub category_id: Option<i32>,
    /// Category record embedded for list screens.
    pub category: Option<Category>,
    /// Dietary flag shown on the menu card.
    pub is_vegetarian: bool,
    /// Dietary flag shown on the menu card.
    pub is_spicy: bool,
    /// Whether the dish can currently be ordered.
    pub is_available: bool,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub image_url: String,
    pub category_id: Option<i32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_available: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewMenuItem {
    /// Build a new menu item payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price_cents,
            image_url: String::new(),
            category_id: None,
            is_vegetarian: false,
            is_spicy: false,
            is_available: true,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a description to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image url to the payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Attach a category to the payload.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the dietary flags on the payload.
    pub fn with_flags(mut self, is_vegetarian: bool, is_spicy: bool) -> Self {
        self.is_vegetarian = is_vegetarian;
        self.is_spicy = is_spicy;
        self
    }

    /// Override the default availability.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

/// Patch data applied when updating an existing menu item.
#[derive(Debug, Clone)]
pub struct UpdateMenuItem {
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub image_url: String,
    /// `None` detaches the item from its category.
    pub category_id: Option<i32>,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_available: bool,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateMenuItem {
    /// Build a menu item patch stamped with the current time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        price_cents: i32,
        image_url: String,
        category_id: Option<i32>,
        is_vegetarian: bool,
        is_spicy: bool,
        is_available: bool,
    ) -> Self {
        Self {
            name,
            description,
            price_cents,
            image_url,
            category_id,
            is_vegetarian,
            is_spicy,
            is_available,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuItemListQuery {
    /// Optional search term matched against name and description.
    pub search: Option<String>,
    /// Optional category filter.
    pub category_id: Option<i32>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl MenuItemListQuery {
    /// Construct a query that targets every menu item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to name and description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results by category.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
