use std::future::Future;
use std::pin::Pin;

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

pub mod middleware;

/// Operator identity stored in the session cookie after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl AdminUser {
    /// Build the identity granted to an operator holding valid credentials.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            roles: vec![crate::SERVICE_ACCESS_ROLE.to_string()],
        }
    }
}

impl FromRequest for AdminUser {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload);

        Box::pin(async move {
            let identity = identity.await?;
            let id = identity.id().map_err(ErrorUnauthorized)?;
            serde_json::from_str(&id).map_err(ErrorUnauthorized)
        })
    }
}

/// Returns true when `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|candidate| candidate == role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_admin_user_carries_access_role() {
        let user = AdminUser::new("admin@example.com", "Admin");
        assert!(check_role(crate::SERVICE_ACCESS_ROLE, &user.roles));
    }

    #[test]
    fn check_role_rejects_missing_role() {
        assert!(!check_role("admin", &[]));
        assert!(!check_role("admin", &["viewer".to_string()]));
    }

    #[test]
    fn admin_user_round_trips_through_identity_payload() {
        let user = AdminUser::new("admin@example.com", "Admin");
        let payload = serde_json::to_string(&user).expect("serialize identity");
        let parsed: AdminUser = serde_json::from_str(&payload).expect("parse identity");
        assert_eq!(parsed, user);
    }
}
