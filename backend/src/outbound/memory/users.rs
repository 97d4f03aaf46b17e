use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, User, UserRole, Username};

/// Credential store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `users` already registered.
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_login(&self, identifier: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.matches_login(identifier)).cloned())
    }

    async fn is_taken(
        &self,
        username: &Username,
        email: &Email,
    ) -> Result<bool, UserPersistenceError> {
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .any(|u| u.username() == username || u.email() == email))
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.username() == user.username()) {
            return Err(UserPersistenceError::duplicate("username"));
        }
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(UserPersistenceError::duplicate("email"));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn set_role(
        &self,
        identifier: &str,
        role: UserRole,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.users.lock().await;
        let Some(slot) = users.iter_mut().find(|u| u.matches_login(identifier)) else {
            return Ok(None);
        };
        *slot = slot.clone().with_role(role);
        Ok(Some(slot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PasswordHash, UserDraft, UserId};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn user(username: &str, email: &str) -> User {
        User::new(UserDraft {
            id: UserId::random(),
            username: Username::new(username).expect("username"),
            email: Email::new(email).expect("email"),
            password_hash: PasswordHash::from_encoded("$2b$10$hash"),
            role: UserRole::User,
            created_at: Utc
                .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
                .single()
                .expect("timestamp"),
        })
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::seeded([user("novice", "novice@example.com")])
    }

    #[rstest]
    #[case("novice")]
    #[case("NOVICE@example.com")]
    #[case("  novice  ")]
    #[tokio::test]
    async fn finds_by_username_or_email(repo: InMemoryUserRepository, #[case] login: &str) {
        let found = repo.find_by_login(login).await.expect("lookup");
        assert_eq!(
            found.map(|u| u.username().to_string()),
            Some("novice".to_owned())
        );
    }

    #[rstest]
    #[case("novice", "other@example.com", "username")]
    #[case("other", "novice@example.com", "email")]
    #[tokio::test]
    async fn duplicate_inserts_name_the_clashing_field(
        repo: InMemoryUserRepository,
        #[case] username: &str,
        #[case] email: &str,
        #[case] field: &str,
    ) {
        let err = repo
            .insert(&user(username, email))
            .await
            .expect_err("duplicate");
        assert_eq!(err, UserPersistenceError::duplicate(field));
    }

    #[rstest]
    #[tokio::test]
    async fn set_role_updates_the_stored_record(repo: InMemoryUserRepository) {
        let updated = repo
            .set_role("novice", UserRole::Admin)
            .await
            .expect("update")
            .expect("user exists");
        assert_eq!(updated.role(), UserRole::Admin);

        let reread = repo
            .find_by_login("novice")
            .await
            .expect("lookup")
            .expect("user exists");
        assert_eq!(reread.role(), UserRole::Admin);
        assert!(
            repo.set_role("ghost", UserRole::Admin)
                .await
                .expect("update")
                .is_none()
        );
    }
}
