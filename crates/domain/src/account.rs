//! Account — a console login, either a regular user or an administrator.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SsmgrError, ValidationError};
use crate::id::AccountId;

/// Which side of the console an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// A console account.
///
/// The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub role: Role,
    pub alias: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a builder for constructing an [`Account`].
    #[must_use]
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] when `phone` is empty or `email`
    /// is not an address.
    pub fn validate(&self) -> Result<(), SsmgrError> {
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyPhone.into());
        }
        let well_formed = self
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !well_formed {
            return Err(ValidationError::InvalidEmail(self.email.clone()).into());
        }
        Ok(())
    }

    /// Name shown in lists: the alias when set, otherwise the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.email)
    }
}

/// Step-by-step builder for [`Account`].
#[derive(Debug, Default)]
pub struct AccountBuilder {
    id: Option<AccountId>,
    role: Role,
    alias: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    password: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl AccountBuilder {
    #[must_use]
    pub fn id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an [`Account`].
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::Validation`] if `phone` is missing or `email`
    /// is missing or malformed.
    pub fn build(self) -> Result<Account, SsmgrError> {
        let account = Account {
            id: self.id.unwrap_or_default(),
            role: self.role,
            alias: self.alias.filter(|alias| !alias.is_empty()),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        };
        account.validate()?;
        Ok(account)
    }
}
