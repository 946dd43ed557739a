//! User aggregate

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::guard;
use crate::units::{Height, Weight};

/// A registered user.
///
/// Profile fields (username, height, weight) stay mutable for the account's
/// lifetime. Password handling is conditional on the login type: an account
/// linked to an external provider never carries a local password. The stored
/// password is an opaque string; hashing belongs to the auth boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Uuid,
    email: String,
    name: String,
    username: Option<String>,
    password: Option<String>,
    provider: Option<String>,
    provider_id: Option<String>,
    height: Option<Height>,
    weight: Option<Weight>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Register a new user. Guards: non-nil id, non-blank name, well-formed
    /// email. The creation timestamp is stamped here.
    pub fn new(id: Uuid, name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();

        guard::against_nil_id(id, "id")?;
        guard::against_blank(&name, "name")?;
        guard::against_invalid_email(&email, "email")?;

        Ok(Self {
            id,
            email,
            name,
            username: None,
            password: None,
            provider: None,
            provider_id: None,
            height: None,
            weight: None,
            created_at: Utc::now(),
        })
    }

    /// Reconstruct a user from stored fields. For persistence adapters only;
    /// this is the sole path that restores the original creation timestamp
    /// and a password persisted before a provider was linked.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: Uuid,
        name: String,
        email: String,
        username: Option<String>,
        password: Option<String>,
        provider: Option<String>,
        provider_id: Option<String>,
        height: Option<Height>,
        weight: Option<Weight>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_blank(&name, "name")?;
        guard::against_invalid_email(&email, "email")?;

        Ok(Self {
            id,
            email,
            name,
            username,
            password,
            provider,
            provider_id,
            height,
            weight,
            created_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    pub fn height(&self) -> Option<Height> {
        self.height
    }

    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True iff the account authenticates through an external provider.
    pub fn has_external_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> DomainResult<()> {
        let username = username.into();
        guard::against_blank(&username, "username")?;
        self.username = Some(username);
        Ok(())
    }

    pub fn set_height(&mut self, height: Height) {
        self.height = Some(height);
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }

    /// Attach an external identity provider (e.g. "Google") to this account.
    pub fn link_provider(
        &mut self,
        provider: impl Into<String>,
        provider_id: impl Into<String>,
    ) -> DomainResult<()> {
        let provider = provider.into();
        let provider_id = provider_id.into();
        guard::against_blank(&provider, "provider")?;
        guard::against_blank(&provider_id, "provider_id")?;
        self.provider = Some(provider);
        self.provider_id = Some(provider_id);
        Ok(())
    }

    /// Set a local password. Forbidden on provider-linked accounts; the
    /// password must be at least 8 characters.
    pub fn set_password(&mut self, password: impl Into<String>) -> DomainResult<()> {
        if self.has_external_provider() {
            return Err(DomainError::invalid_operation(
                "cannot set a password on an externally authenticated account",
            ));
        }
        let password = password.into();
        guard::against_short_password(&password, "password")?;
        self.password = Some(password);
        Ok(())
    }
}
