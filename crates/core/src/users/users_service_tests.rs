#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::errors::{Error, Result};
    use crate::users::{NewUser, RegisterUser, User, UserRepositoryTrait, UserService, UserServiceTrait};

    // --- Mock UserRepository ---
    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn insert(&self, new_user: NewUser) -> Result<User> {
            let user = User {
                id: Uuid::new_v4().to_string(),
                email: new_user.email,
                password_hash: new_user.password_hash,
                created_at: Utc::now().naive_utc(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(MockUserRepository::default()))
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let service = service();
        let user = service
            .register(RegisterUser {
                email: "Alice@Example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        // Email is normalized and the plaintext never stored
        assert_eq!(user.email, "alice@example.com");
        assert_ne!(user.password_hash, "correct horse");

        let authed = service.authenticate("alice@example.com", "correct horse").unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let service = service();
        let input = RegisterUser {
            email: "bob@example.com".to_string(),
            password: "longenough".to_string(),
        };
        service.register(input.clone()).await.unwrap();
        let err = service.register(input).await.unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let err = service()
            .register(RegisterUser {
                email: "carol@example.com".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let service = service();
        service
            .register(RegisterUser {
                email: "dave@example.com".to_string(),
                password: "the right one".to_string(),
            })
            .await
            .unwrap();
        let err = service
            .authenticate("dave@example.com", "the wrong one")
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[tokio::test]
    async fn authenticate_unknown_email_is_unauthorized() {
        let err = service().authenticate("nobody@example.com", "x").unwrap_err();
        // Unknown email and bad password are indistinguishable to callers
        assert!(matches!(err, Error::Unauthorized(_)));
    }
}
