use chrono::{Duration, Local};
use serde::Serialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::order::{OrderStats, OrderStatus};
use crate::repository::OrderReader;
use crate::services::{ServiceError, ServiceResult};

/// One bar of the status histogram.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusBucket {
    pub status: OrderStatus,
    pub count: usize,
    /// Share of all orders, rounded to the nearest whole percent.
    pub percentage: u32,
}

/// View model backing the dashboard screen and the stats API.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Revenue from completed orders over the trailing seven days, in cents.
    pub revenue_week_cents: i64,
    /// Mean total of completed orders, in cents; 0 when none completed.
    pub average_order_value_cents: i64,
    /// One bucket per status value, in display order.
    pub status_distribution: Vec<StatusBucket>,
}

/// Loads the aggregates for the dashboard screen.
pub fn load_dashboard_stats<R>(repo: &R, user: &AdminUser) -> ServiceResult<DashboardStats>
where
    R: OrderReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let week_start = Local::now().naive_utc() - Duration::days(7);

    let stats = repo.order_stats(week_start).map_err(ServiceError::from)?;

    Ok(build_stats(stats))
}

fn build_stats(stats: OrderStats) -> DashboardStats {
    let OrderStats {
        total_orders,
        revenue_week_cents,
        completed_orders,
        completed_total_cents,
        status_counts,
    } = stats;

    let average_order_value_cents = if completed_orders == 0 {
        0
    } else {
        (completed_total_cents as f64 / completed_orders as f64).round() as i64
    };

    let status_distribution = OrderStatus::ALL
        .into_iter()
        .map(|status| {
            let count = status_counts
                .iter()
                .find(|(candidate, _)| *candidate == status)
                .map(|(_, count)| *count)
                .unwrap_or(0);

            let percentage = if total_orders == 0 {
                0
            } else {
                ((count as f64 / total_orders as f64) * 100.0).round() as u32
            };

            StatusBucket {
                status,
                count,
                percentage,
            }
        })
        .collect();

    DashboardStats {
        total_orders,
        revenue_week_cents,
        average_order_value_cents,
        status_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::mock::MockOrderReader;

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    #[test]
    fn requires_role() {
        let repo = MockOrderReader::new();
        let user = AdminUser {
            email: "guest@example.com".to_string(),
            name: "Guest".to_string(),
            roles: Vec::new(),
        };

        let result = load_dashboard_stats(&repo, &user);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn zero_completed_orders_yield_zero_average_and_revenue() {
        let mut repo = MockOrderReader::new();

        repo.expect_order_stats().times(1).returning(|_| {
            Ok(OrderStats {
                total_orders: 3,
                revenue_week_cents: 0,
                completed_orders: 0,
                completed_total_cents: 0,
                status_counts: vec![
                    (OrderStatus::Pending, 2),
                    (OrderStatus::Cancelled, 1),
                ],
            })
        });

        let stats = load_dashboard_stats(&repo, &admin()).expect("expected success");

        assert_eq!(stats.average_order_value_cents, 0);
        assert_eq!(stats.revenue_week_cents, 0);
        assert_eq!(stats.total_orders, 3);
    }

    #[test]
    fn average_is_rounded_mean_of_completed_totals() {
        let mut repo = MockOrderReader::new();

        repo.expect_order_stats().times(1).returning(|_| {
            Ok(OrderStats {
                total_orders: 3,
                revenue_week_cents: 1500,
                completed_orders: 3,
                completed_total_cents: 1000,
                status_counts: vec![(OrderStatus::Completed, 3)],
            })
        });

        let stats = load_dashboard_stats(&repo, &admin()).expect("expected success");

        // 1000 / 3 = 333.33..., rounded to 333.
        assert_eq!(stats.average_order_value_cents, 333);
    }

    #[test]
    fn distribution_covers_every_status_and_sums_near_hundred() {
        let mut repo = MockOrderReader::new();

        repo.expect_order_stats().times(1).returning(|_| {
            Ok(OrderStats {
                total_orders: 7,
                revenue_week_cents: 0,
                completed_orders: 2,
                completed_total_cents: 4200,
                status_counts: vec![
                    (OrderStatus::Pending, 3),
                    (OrderStatus::Preparing, 1),
                    (OrderStatus::Completed, 2),
                    (OrderStatus::Cancelled, 1),
                ],
            })
        });

        let stats = load_dashboard_stats(&repo, &admin()).expect("expected success");

        assert_eq!(stats.status_distribution.len(), OrderStatus::ALL.len());

        let total_percentage: u32 = stats
            .status_distribution
            .iter()
            .map(|bucket| bucket.percentage)
            .sum();
        let buckets = stats.status_distribution.len() as u32;
        assert!(total_percentage >= 100 - buckets && total_percentage <= 100 + buckets);

        let pending = &stats.status_distribution[0];
        assert_eq!(pending.status, OrderStatus::Pending);
        assert_eq!(pending.count, 3);
        assert_eq!(pending.percentage, 43); // 3/7 = 42.86 rounds to 43
    }

    #[test]
    fn distribution_reports_zero_percentages_for_empty_table() {
        let mut repo = MockOrderReader::new();

        repo.expect_order_stats()
            .times(1)
            .returning(|_| Ok(OrderStats::default()));

        let stats = load_dashboard_stats(&repo, &admin()).expect("expected success");

        assert!(stats.status_distribution.iter().all(|b| b.percentage == 0));
    }
}
