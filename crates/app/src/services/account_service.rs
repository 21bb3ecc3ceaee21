//! Account service — use-cases behind the user list and admin views.

use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::error::{NotFoundError, SsmgrError};
use ssmgr_domain::id::AccountId;

use crate::ports::AccountDirectory;

/// Application service for browsing accounts.
pub struct AccountService<D> {
    directory: D,
}

impl<D: AccountDirectory> AccountService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// List regular users, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the directory.
    pub async fn list_users(&self) -> Result<Vec<Account>, SsmgrError> {
        self.list_accounts(Some(Role::User)).await
    }

    /// List administrators, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the directory.
    pub async fn list_admins(&self) -> Result<Vec<Account>, SsmgrError> {
        self.list_accounts(Some(Role::Admin)).await
    }

    /// List accounts of any role, or of one role when `role` is set.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the directory.
    pub async fn list_accounts(&self, role: Option<Role>) -> Result<Vec<Account>, SsmgrError> {
        let mut accounts = self.directory.list_accounts(role).await?;
        accounts.sort_by_key(|account| account.created_at);
        Ok(accounts)
    }

    /// Look up an account by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::NotFound`] when no account with `id` exists,
    /// or an error from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn get_account(&self, id: AccountId) -> Result<Account, SsmgrError> {
        self.directory.get_account(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Account",
                id: id.to_string(),
            }
            .into()
        })
    }
}
