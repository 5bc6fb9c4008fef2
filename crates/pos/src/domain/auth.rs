// crates/pos/src/domain/auth.rs
//
// Collaborateur d'authentification : émission et renouvellement de paires
// de jetons opaques. La vérification de mot de passe réelle vit derrière
// ce trait ; l'implémentation mémoire suffit au serveur de référence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair>;
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair>;
}

pub type DynAuthService = Arc<dyn AuthService>;

fn unauthorized(reason: &str) -> DomainError {
    DomainError::Unauthorized {
        reason: reason.into(),
    }
}

pub struct MemoryAuth {
    credentials: HashMap<String, String>,
    // refresh_token -> email ; un refresh consomme l'ancien jeton.
    sessions: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl MemoryAuth {
    pub fn new(credentials: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            credentials: credentials.into_iter().collect(),
            sessions: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn issue(&self, email: &str) -> TokenPair {
        let pair = TokenPair {
            access_token: Uuid::new_v4().to_string(),
            refresh_token: Uuid::new_v4().to_string(),
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(pair.refresh_token.clone(), email.to_string());
        pair
    }
}

#[async_trait]
impl AuthService for MemoryAuth {
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.credentials.get(email) {
            Some(expected) if expected == password => Ok(self.issue(email)),
            _ => Err(unauthorized("invalid email or password")),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let email = self
            .sessions
            .lock()
            .unwrap()
            .remove(refresh_token)
            .ok_or_else(|| unauthorized("unknown or expired refresh token"))?;
        Ok(self.issue(&email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> MemoryAuth {
        MemoryAuth::new([("admin@pos.local".to_string(), "admin123".to_string())])
    }

    #[tokio::test]
    async fn login_with_good_credentials_issues_a_pair() {
        let auth = auth();
        let pair = auth.login("admin@pos.local", "admin123").await.unwrap();
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[tokio::test]
    async fn login_with_bad_password_is_unauthorized() {
        let auth = auth();
        let err = auth.login("admin@pos.local", "nope").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn refresh_rotates_and_consumes_the_token() {
        let auth = auth();
        let first = auth.login("admin@pos.local", "admin123").await.unwrap();

        let second = auth.refresh(&first.refresh_token).await.unwrap();
        assert_ne!(second.refresh_token, first.refresh_token);

        // L'ancien jeton est consommé.
        let err = auth.refresh(&first.refresh_token).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized { .. }));
    }
}
