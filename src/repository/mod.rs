use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::branch::{Branch, NewBranch, UpdateBranch};
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::menu_item::{MenuItem, MenuItemListQuery, NewMenuItem, UpdateMenuItem};
use crate::domain::offer::{NewOffer, Offer, UpdateOffer};
use crate::domain::order::{NewOrder, Order, OrderListQuery, OrderStats, UpdateOrderStatus};
use crate::domain::restaurant_info::{RestaurantInfo, UpdateRestaurantInfo};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::user::{NewUser, Reward, UpsertReward, User, UserListQuery};
use crate::repository::errors::RepositoryResult;

pub mod errors;

pub mod branch;
pub mod category;
pub mod menu_item;
pub mod offer;
pub mod order;
pub mod restaurant_info;
pub mod service;
pub mod user;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over menu items.
pub trait MenuItemReader {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
    fn list_menu_items(&self, query: MenuItemListQuery)
    -> RepositoryResult<(usize, Vec<MenuItem>)>;
}

/// Write operations over menu items.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    fn update_menu_item(&self, item_id: i32, updates: &UpdateMenuItem)
    -> RepositoryResult<MenuItem>;
    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over menu categories.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    /// Full category list ordered by ascending display order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over menu categories.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over customer orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    /// Aggregates for the dashboard; `week_start` bounds the weekly revenue window.
    fn order_stats(&self, week_start: NaiveDateTime) -> RepositoryResult<OrderStats>;
}

/// Write operations over customer orders. Orders are created by the
/// storefront checkout and only ever move through the status workflow here.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order_status(
        &self,
        order_id: i32,
        updates: &UpdateOrderStatus,
    ) -> RepositoryResult<Order>;
}

/// Read-only operations over registered customers.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}

/// Write operations over customers and their loyalty records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    /// Insert-or-overwrite of the reward row keyed by `user_id`.
    fn upsert_reward(&self, user_id: i32, reward: &UpsertReward) -> RepositoryResult<Reward>;
}

/// Read-only operations over branches.
pub trait BranchReader {
    fn get_branch_by_id(&self, id: i32) -> RepositoryResult<Option<Branch>>;
    fn list_branches(&self) -> RepositoryResult<Vec<Branch>>;
}

/// Write operations over branches.
pub trait BranchWriter {
    fn create_branch(&self, new_branch: &NewBranch) -> RepositoryResult<Branch>;
    fn update_branch(&self, branch_id: i32, updates: &UpdateBranch) -> RepositoryResult<Branch>;
    fn delete_branch(&self, branch_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over restaurant services.
pub trait ServiceReader {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
}

/// Write operations over restaurant services.
pub trait ServiceWriter {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
    fn update_service(&self, service_id: i32, updates: &UpdateService)
    -> RepositoryResult<Service>;
    fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over offers.
pub trait OfferReader {
    fn get_offer_by_id(&self, id: i32) -> RepositoryResult<Option<Offer>>;
    fn list_offers(&self) -> RepositoryResult<Vec<Offer>>;
}

/// Write operations over offers.
pub trait OfferWriter {
    fn create_offer(&self, new_offer: &NewOffer) -> RepositoryResult<Offer>;
    fn update_offer(&self, offer_id: i32, updates: &UpdateOffer) -> RepositoryResult<Offer>;
    fn delete_offer(&self, offer_id: i32) -> RepositoryResult<()>;
}

/// Read access to the restaurant settings singleton.
pub trait RestaurantInfoReader {
    fn get_restaurant_info(&self) -> RepositoryResult<Option<RestaurantInfo>>;
}

/// Write access to the restaurant settings singleton.
pub trait RestaurantInfoWriter {
    /// Creates the row on first save, overwrites it afterwards.
    fn upsert_restaurant_info(
        &self,
        updates: &UpdateRestaurantInfo,
    ) -> RepositoryResult<RestaurantInfo>;
}
