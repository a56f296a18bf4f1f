use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::category::Category;
use crate::domain::menu_item::{MenuItem, MenuItemListQuery};
use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm, UploadMenuItemsForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, MenuItemReader, MenuItemWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the menu index page.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Optional category filter in string form.
    pub category: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the menu index template.
pub struct MenuPageData {
    /// Paginated list of menu items displayed in the table.
    pub items: Paginated<MenuItem>,
    /// All categories, used for the filter bar and the modal form.
    pub categories: Vec<Category>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
    /// Active category filter echoed back to the view.
    pub category_id: Option<i32>,
}

/// Loads the menu overview page.
pub fn load_menu_page<R>(repo: &R, user: &AdminUser, query: MenuQuery) -> ServiceResult<MenuPageData>
where
    R: MenuItemReader + CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let MenuQuery {
        search,
        category,
        page,
    } = query;

    let category_id = category
        .as_deref()
        .map(str::trim)
        .and_then(|value| value.parse::<i32>().ok())
        .filter(|value| *value > 0);

    let page = page.unwrap_or(1);
    let mut list_query = MenuItemListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    if let Some(category_id) = category_id {
        list_query = list_query.category_id(category_id);
    }

    let (total, items) = repo.list_menu_items(list_query).map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let items = Paginated::new(items, page, DEFAULT_ITEMS_PER_PAGE, total);

    Ok(MenuPageData {
        items,
        categories,
        search,
        category_id,
    })
}

/// Creates a new menu item.
pub fn create_menu_item<R>(
    repo: &R,
    user: &AdminUser,
    form: AddMenuItemForm,
) -> ServiceResult<MenuItem>
where
    R: MenuItemWriter + CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let new_item = form
        .into_new_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(category_id) = new_item.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    repo.create_menu_item(&new_item).map_err(ServiceError::from)
}

/// Updates an existing menu item.
pub fn modify_menu_item<R>(
    repo: &R,
    user: &AdminUser,
    form: EditMenuItemForm,
) -> ServiceResult<MenuItem>
where
    R: MenuItemWriter + CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payload = form
        .into_update_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(category_id) = payload.update.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    repo.update_menu_item(payload.menu_item_id, &payload.update)
        .map_err(ServiceError::from)
}

/// Deletes a menu item.
pub fn remove_menu_item<R>(repo: &R, user: &AdminUser, item_id: i32) -> ServiceResult<()>
where
    R: MenuItemWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_menu_item(item_id).map_err(ServiceError::from)
}

/// Imports menu items from an uploaded CSV file, resolving category names
/// against the existing category list. Returns the number of created items.
pub fn import_menu_items<R>(
    repo: &R,
    user: &AdminUser,
    mut form: UploadMenuItemsForm,
) -> ServiceResult<usize>
where
    R: MenuItemWriter + CategoryReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let uploads = form
        .into_new_menu_items(&categories)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut created = 0usize;
    for upload in uploads {
        repo.create_menu_item(&upload).map_err(ServiceError::from)?;
        created += 1;
    }

    Ok(created)
}

fn ensure_category_exists<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    if repo
        .get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }
    Ok(())
}
