//! Account directory port.

use std::future::Future;

use ssmgr_domain::account::{Account, Role};
use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::id::AccountId;

/// Read access to console accounts.
pub trait AccountDirectory {
    /// List accounts, optionally restricted to one role.
    fn list_accounts(
        &self,
        role: Option<Role>,
    ) -> impl Future<Output = Result<Vec<Account>, SsmgrError>> + Send;

    fn get_account(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, SsmgrError>> + Send;
}
