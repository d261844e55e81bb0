//! Business logic services

pub mod auth;
pub mod bookings;
pub mod comments;
pub mod foods;
pub mod user_foods;
pub mod users;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Outcome of the ownership check on owner-scoped reads
#[derive(Debug, PartialEq, Eq)]
pub enum OwnerScope<'a> {
    /// No owner given: respond with an empty list
    Empty,
    /// Owner matches the requester: filter by this email
    Owner(&'a str),
}

/// Decide whether `requester` may read documents owned by `owner`.
///
/// A missing owner email short-circuits to an empty result; a mismatch is
/// a 403 regardless of whether matching data exists.
pub fn authorize_owner<'a>(
    requester: &str,
    owner: Option<&'a str>,
) -> AppResult<OwnerScope<'a>> {
    let Some(owner) = owner else {
        return Ok(OwnerScope::Empty);
    };
    if owner != requester {
        return Err(AppError::Forbidden(format!(
            "{} may not read documents owned by {}",
            requester, owner
        )));
    }
    Ok(OwnerScope::Owner(owner))
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub users: users::UsersService,
    pub foods: foods::FoodsService,
    pub user_foods: user_foods::UserFoodsService,
    pub bookings: bookings::BookingsService,
    pub comments: comments::CommentsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            users: users::UsersService::new(repository.clone()),
            foods: foods::FoodsService::new(repository.clone()),
            user_foods: user_foods::UserFoodsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            comments: comments::CommentsService::new(repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_owner_email_yields_empty_scope() {
        assert_eq!(
            authorize_owner("a@x.com", None).unwrap(),
            OwnerScope::Empty
        );
    }

    #[test]
    fn matching_owner_email_yields_filter_scope() {
        assert_eq!(
            authorize_owner("a@x.com", Some("a@x.com")).unwrap(),
            OwnerScope::Owner("a@x.com")
        );
    }

    #[test]
    fn mismatched_owner_email_is_forbidden() {
        assert!(matches!(
            authorize_owner("a@x.com", Some("b@y.com")),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn mismatch_wins_even_for_empty_owner_string() {
        // "" is a present-but-wrong owner, not a missing one
        assert!(authorize_owner("a@x.com", Some("")).is_err());
    }
}
