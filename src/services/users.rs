use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::auth::{AdminUser, check_role};
use crate::domain::user::{Reward, User, UserListQuery};
use crate::forms::rewards::UpdateRewardsForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the customers index page.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the customers index template.
pub struct UsersPageData {
    /// Paginated list of customers with their rewards embedded.
    pub users: Paginated<User>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
}

/// Loads the customers overview page.
pub fn load_users_page<R>(
    repo: &R,
    user: &AdminUser,
    query: UsersQuery,
) -> ServiceResult<UsersPageData>
where
    R: UserReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let UsersQuery { search, page } = query;

    let page = page.unwrap_or(1);
    let mut list_query = UserListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_users(list_query).map_err(ServiceError::from)?;

    let users = Paginated::new(items, page, DEFAULT_ITEMS_PER_PAGE, total);

    Ok(UsersPageData { users, search })
}

/// Overwrites a customer's reward record, creating it on first write.
///
/// The customer must exist; the reward row itself may not, in which case the
/// upsert creates it. A second call replaces points and tier rather than
/// accumulating.
pub fn update_user_rewards<R>(
    repo: &R,
    user: &AdminUser,
    user_id: i32,
    form: UpdateRewardsForm,
) -> ServiceResult<Reward>
where
    R: UserReader + UserWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let reward = form
        .into_upsert_reward()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.upsert_reward(user_id, &reward)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::user::{NewUser, RewardTier, UpsertReward};
    use crate::repository::mock::{MockUserReader, MockUserWriter};
    use crate::repository::errors::RepositoryResult;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_user(id: i32, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            address: String::new(),
            reward: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_reward(user_id: i32, points: i32, tier: RewardTier) -> Reward {
        Reward {
            id: 1,
            user_id,
            points,
            tier,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn admin() -> AdminUser {
        AdminUser::new("admin@example.com", "Admin")
    }

    struct FakeRepo {
        reader: MockUserReader,
        writer: MockUserWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                reader: MockUserReader::new(),
                writer: MockUserWriter::new(),
            }
        }
    }

    impl UserReader for FakeRepo {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
            self.reader.get_user_by_id(id)
        }

        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
            self.reader.get_user_by_email(email)
        }

        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
            self.reader.list_users(query)
        }
    }

    impl UserWriter for FakeRepo {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
            self.writer.create_user(new_user)
        }

        fn upsert_reward(&self, user_id: i32, reward: &UpsertReward) -> RepositoryResult<Reward> {
            self.writer.upsert_reward(user_id, reward)
        }
    }

    #[test]
    fn load_users_page_requires_role() {
        let repo = FakeRepo::new();
        let user = AdminUser {
            email: "guest@example.com".to_string(),
            name: "Guest".to_string(),
            roles: Vec::new(),
        };

        let result = load_users_page(&repo, &user, UsersQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn load_users_page_paginates() {
        let mut repo = FakeRepo::new();

        repo.reader
            .expect_list_users()
            .times(1)
            .withf(|query| {
                assert_eq!(query.search.as_deref(), Some("jane"));
                match &query.pagination {
                    Some(pagination) => {
                        assert_eq!(pagination.page, 1);
                        assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                    }
                    None => panic!("expected pagination to be set"),
                }
                true
            })
            .returning(|_| Ok((25, vec![sample_user(1, "jane@example.com")])));

        let data = load_users_page(
            &repo,
            &admin(),
            UsersQuery {
                search: Some("jane".to_string()),
                page: None,
            },
        )
        .expect("expected success");

        assert_eq!(data.users.total, 25);
        assert_eq!(data.users.total_pages, 3);
    }

    #[test]
    fn update_rewards_upserts_for_existing_user() {
        let mut repo = FakeRepo::new();

        repo.reader
            .expect_get_user_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_user(id, "jane@example.com"))));

        repo.writer
            .expect_upsert_reward()
            .times(1)
            .withf(|user_id, reward| {
                assert_eq!(*user_id, 7);
                assert_eq!(reward.points, 250);
                assert_eq!(reward.tier, RewardTier::Premium);
                true
            })
            .returning(|user_id, reward| {
                Ok(sample_reward(user_id, reward.points, reward.tier))
            });

        let form = UpdateRewardsForm {
            points: 250,
            tier: "premium".to_string(),
        };

        let reward = update_user_rewards(&repo, &admin(), 7, form).expect("expected success");

        assert_eq!(reward.points, 250);
        assert_eq!(reward.tier, RewardTier::Premium);
    }

    #[test]
    fn update_rewards_fails_for_unknown_user() {
        let mut repo = FakeRepo::new();

        repo.reader
            .expect_get_user_by_id()
            .times(1)
            .returning(|_| Ok(None));

        // No writer expectation: the upsert must never be attempted.
        let form = UpdateRewardsForm {
            points: 10,
            tier: "normal".to_string(),
        };

        let result = update_user_rewards(&repo, &admin(), 404, form);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_rewards_rejects_negative_points() {
        let repo = FakeRepo::new();

        let form = UpdateRewardsForm {
            points: -1,
            tier: "normal".to_string(),
        };

        let result = update_user_rewards(&repo, &admin(), 1, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
