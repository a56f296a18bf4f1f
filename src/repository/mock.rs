use chrono::NaiveDateTime;
use mockall::mock;

use super::{
    BranchReader, BranchWriter, CategoryReader, CategoryWriter, MenuItemReader, MenuItemWriter,
    OfferReader, OfferWriter, OrderReader, OrderWriter, RestaurantInfoReader, RestaurantInfoWriter,
    ServiceReader, ServiceWriter, UserReader, UserWriter,
};
use crate::domain::{
    branch::{Branch, NewBranch, UpdateBranch},
    category::{Category, NewCategory, UpdateCategory},
    menu_item::{MenuItem, MenuItemListQuery, NewMenuItem, UpdateMenuItem},
    offer::{NewOffer, Offer, UpdateOffer},
    order::{NewOrder, Order, OrderListQuery, OrderStats, UpdateOrderStatus},
    restaurant_info::{RestaurantInfo, UpdateRestaurantInfo},
    service::{NewService, Service, UpdateService},
    user::{NewUser, Reward, UpsertReward, User, UserListQuery},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub MenuItemReader {}

    impl MenuItemReader for MenuItemReader {
        fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<(usize, Vec<MenuItem>)>;
    }
}

mock! {
    pub MenuItemWriter {}

    impl MenuItemWriter for MenuItemWriter {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn update_menu_item(&self, item_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
        fn order_stats(&self, week_start: NaiveDateTime) -> RepositoryResult<OrderStats>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order_status(&self, order_id: i32, updates: &UpdateOrderStatus) -> RepositoryResult<Order>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn upsert_reward(&self, user_id: i32, reward: &UpsertReward) -> RepositoryResult<Reward>;
    }
}

mock! {
    pub BranchReader {}

    impl BranchReader for BranchReader {
        fn get_branch_by_id(&self, id: i32) -> RepositoryResult<Option<Branch>>;
        fn list_branches(&self) -> RepositoryResult<Vec<Branch>>;
    }
}

mock! {
    pub BranchWriter {}

    impl BranchWriter for BranchWriter {
        fn create_branch(&self, new_branch: &NewBranch) -> RepositoryResult<Branch>;
        fn update_branch(&self, branch_id: i32, updates: &UpdateBranch) -> RepositoryResult<Branch>;
        fn delete_branch(&self, branch_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ServiceReader {}

    impl ServiceReader for ServiceReader {
        fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
        fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    }
}

mock! {
    pub ServiceWriter {}

    impl ServiceWriter for ServiceWriter {
        fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
        fn update_service(&self, service_id: i32, updates: &UpdateService) -> RepositoryResult<Service>;
        fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OfferReader {}

    impl OfferReader for OfferReader {
        fn get_offer_by_id(&self, id: i32) -> RepositoryResult<Option<Offer>>;
        fn list_offers(&self) -> RepositoryResult<Vec<Offer>>;
    }
}

mock! {
    pub OfferWriter {}

    impl OfferWriter for OfferWriter {
        fn create_offer(&self, new_offer: &NewOffer) -> RepositoryResult<Offer>;
        fn update_offer(&self, offer_id: i32, updates: &UpdateOffer) -> RepositoryResult<Offer>;
        fn delete_offer(&self, offer_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub RestaurantInfoReader {}

    impl RestaurantInfoReader for RestaurantInfoReader {
        fn get_restaurant_info(&self) -> RepositoryResult<Option<RestaurantInfo>>;
    }
}

mock! {
    pub RestaurantInfoWriter {}

    impl RestaurantInfoWriter for RestaurantInfoWriter {
        fn upsert_restaurant_info(&self, updates: &UpdateRestaurantInfo) -> RepositoryResult<RestaurantInfo>;
    }
}
