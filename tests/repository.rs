use std::collections::HashSet;

use chrono::{Duration, Local};
use diesel::prelude::*;

use resto_admin::domain::order::{
    NewOrder, OrderItem, OrderListQuery, OrderStatus, PaymentMode, UpdateOrderStatus,
};
use resto_admin::domain::user::{NewUser, RewardTier, UpsertReward, UserListQuery};
use resto_admin::repository::DieselRepository;
use resto_admin::repository::errors::RepositoryError;
use resto_admin::repository::{OrderReader, OrderWriter, UserReader, UserWriter};

mod common;

fn order_with_items(name: &str, total_cents: i32) -> NewOrder {
    NewOrder::new(name, total_cents)
        .with_customer_phone("555-0100")
        .with_delivery_address("5 Spice Lane")
        .with_payment_mode(PaymentMode::Card)
        .with_items(vec![
            OrderItem {
                menu_item_id: None,
                name: "Biryani".to_string(),
                quantity: 2,
                price_cents: 400,
            },
            OrderItem {
                menu_item_id: None,
                name: "Kebab".to_string(),
                quantity: 1,
                price_cents: 450,
            },
        ])
}

#[test]
fn test_order_lifecycle() {
    let test_db = common::TestDb::new("test_order_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_order(&order_with_items("Asha Rao", 850))
        .unwrap();
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.items.len(), 2);

    // The stored total and the line-item sum are independent values.
    assert_eq!(created.total_cents, 850);
    assert_eq!(created.items_total_cents(), 1250);

    let fetched = repo.get_order_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched.customer_name, "Asha Rao");
    assert_eq!(fetched.items.len(), 2);

    let updated = repo
        .update_order_status(created.id, &UpdateOrderStatus::new(OrderStatus::Preparing))
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Preparing);
    assert_eq!(updated.items.len(), 2);
    assert!(updated.updated_at >= created.updated_at);

    // Unknown ids must fail loudly, not no-op.
    let err = repo
        .update_order_status(9999, &UpdateOrderStatus::new(OrderStatus::Completed))
        .expect_err("expected update of missing order to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    assert!(repo.get_order_by_id(9999).unwrap().is_none());
}

#[test]
fn test_order_pagination_is_exact() {
    let test_db = common::TestDb::new("test_order_pagination_is_exact.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..25 {
        repo.create_order(&NewOrder::new(format!("Customer {i}"), 1000 + i))
            .unwrap();
    }

    let per_page = 10;
    let mut seen = HashSet::new();
    let mut total_pages = None;

    let mut page = 1;
    loop {
        let (total, items) = repo
            .list_orders(OrderListQuery::new().paginate(page, per_page))
            .unwrap();
        assert_eq!(total, 25);

        let expected_pages = total.div_ceil(per_page);
        assert_eq!(expected_pages, 3);
        total_pages = Some(expected_pages);

        if page < expected_pages {
            assert_eq!(items.len(), per_page);
        } else {
            assert_eq!(items.len(), 5);
        }

        for order in &items {
            assert!(seen.insert(order.id), "order {} repeated", order.id);
        }

        if page == expected_pages {
            break;
        }
        page += 1;
    }

    // Concatenating all pages yields exactly the full snapshot.
    assert_eq!(seen.len(), 25);
    assert_eq!(total_pages, Some(3));
}

#[test]
fn test_order_list_filters_before_counting() {
    let test_db = common::TestDb::new("test_order_list_filters_before_counting.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..4 {
        repo.create_order(&NewOrder::new(format!("Pending {i}"), 500))
            .unwrap();
    }
    let completed = repo
        .create_order(&NewOrder::new("Done", 700).with_status(OrderStatus::Completed))
        .unwrap();

    let (total, items) = repo
        .list_orders(OrderListQuery::new().status(OrderStatus::Completed))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, completed.id);

    let (total, items) = repo
        .list_orders(OrderListQuery::new().search("pending 2"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].customer_name, "Pending 2");
}

#[test]
fn test_order_stats_aggregates() {
    let test_db = common::TestDb::new("test_order_stats_aggregates.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_order(&NewOrder::new("Recent", 3000).with_status(OrderStatus::Completed))
        .unwrap();
    let old = repo
        .create_order(&NewOrder::new("Old", 2000).with_status(OrderStatus::Completed))
        .unwrap();
    repo.create_order(&NewOrder::new("Waiting", 1000)).unwrap();
    repo.create_order(&NewOrder::new("Called off", 500).with_status(OrderStatus::Cancelled))
        .unwrap();

    // Age one completed order past the weekly window.
    {
        use resto_admin::schema::orders;
        let mut conn = test_db.pool().get().unwrap();
        let ten_days_ago = Local::now().naive_utc() - Duration::days(10);
        diesel::update(orders::table.filter(orders::id.eq(old.id)))
            .set(orders::created_at.eq(ten_days_ago))
            .execute(&mut conn)
            .unwrap();
    }

    let week_start = Local::now().naive_utc() - Duration::days(7);
    let stats = repo.order_stats(week_start).unwrap();

    assert_eq!(stats.total_orders, 4);
    assert_eq!(stats.completed_orders, 2);
    assert_eq!(stats.completed_total_cents, 5000);
    assert_eq!(stats.revenue_week_cents, 3000);

    let count_for = |status: OrderStatus| {
        stats
            .status_counts
            .iter()
            .find(|(candidate, _)| *candidate == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };
    assert_eq!(count_for(OrderStatus::Completed), 2);
    assert_eq!(count_for(OrderStatus::Pending), 1);
    assert_eq!(count_for(OrderStatus::Cancelled), 1);
    assert_eq!(count_for(OrderStatus::Preparing), 0);
}

#[test]
fn test_order_stats_empty_table() {
    let test_db = common::TestDb::new("test_order_stats_empty_table.db");
    let repo = DieselRepository::new(test_db.pool());

    let week_start = Local::now().naive_utc() - Duration::days(7);
    let stats = repo.order_stats(week_start).unwrap();

    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.completed_orders, 0);
    assert_eq!(stats.completed_total_cents, 0);
    assert_eq!(stats.revenue_week_cents, 0);
    assert!(stats.status_counts.is_empty());
}

#[test]
fn test_reward_upsert_creates_then_overwrites() {
    let test_db = common::TestDb::new("test_reward_upsert_creates_then_overwrites.db");
    let repo = DieselRepository::new(test_db.pool());

    let user = repo
        .create_user(&NewUser::new("jane@example.com", "Jane Doe").with_phone("555-0100"))
        .unwrap();
    assert!(user.reward.is_none());

    let first = repo
        .upsert_reward(user.id, &UpsertReward::new(50, RewardTier::Normal))
        .unwrap();
    assert_eq!(first.points, 50);
    assert_eq!(first.tier, RewardTier::Normal);

    // A second write replaces the balance rather than accumulating it.
    let second = repo
        .upsert_reward(user.id, &UpsertReward::new(200, RewardTier::Premium))
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.points, 200);
    assert_eq!(second.tier, RewardTier::Premium);

    let fetched = repo.get_user_by_id(user.id).unwrap().unwrap();
    let reward = fetched.reward.expect("expected reward to be embedded");
    assert_eq!(reward.points, 200);
    assert_eq!(reward.tier, RewardTier::Premium);
}

#[test]
fn test_user_listing_and_uniqueness() {
    let test_db = common::TestDb::new("test_user_listing_and_uniqueness.db");
    let repo = DieselRepository::new(test_db.pool());

    let jane = repo
        .create_user(&NewUser::new("Jane@Example.com", "Jane Doe"))
        .unwrap();
    repo.create_user(&NewUser::new("omar@example.com", "Omar Khan"))
        .unwrap();

    // Emails are stored lowercase and must stay unique.
    assert_eq!(jane.email, "jane@example.com");
    let err = repo
        .create_user(&NewUser::new("jane@example.com", "Impostor"))
        .expect_err("expected duplicate email to fail");
    assert!(matches!(err, RepositoryError::Conflict));

    repo.upsert_reward(jane.id, &UpsertReward::new(10, RewardTier::Normal))
        .unwrap();

    let (total, users) = repo.list_users(UserListQuery::new()).unwrap();
    assert_eq!(total, 2);
    let listed_jane = users
        .iter()
        .find(|candidate| candidate.id == jane.id)
        .unwrap();
    assert!(listed_jane.reward.is_some());

    let (total, users) = repo.list_users(UserListQuery::new().search("omar")).unwrap();
    assert_eq!(total, 1);
    assert_eq!(users[0].full_name, "Omar Khan");

    let by_email = repo
        .get_user_by_email("JANE@example.com")
        .unwrap()
        .expect("expected lookup to be case-insensitive on input");
    assert_eq!(by_email.id, jane.id);
}
