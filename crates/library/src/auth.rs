//! Bearer-token authentication boundary

use athena_config::AuthConfig;
use athena_core::User;
use async_trait::async_trait;
use std::collections::HashMap;

/// Maps a bearer credential to a user
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the user for `token`, or `None` if it is not recognized
    async fn authenticate(&self, token: &str) -> Option<User>;
}

/// Authenticator backed by a fixed token table from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, User>,
}

impl StaticTokenAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, user: User) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        config
            .tokens
            .iter()
            .fold(Self::new(), |auth, (token, user)| {
                auth.with_token(token, User::new(&user.email, &user.name))
            })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Option<User> {
        if token.is_empty() {
            return None;
        }
        self.tokens.get(token).cloned()
    }
}
