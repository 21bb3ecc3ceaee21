//! Server source port — where the console gets its proxy server list from.
//!
//! This is the typed client interface for the remote data source. The
//! console only ever reads from it; records come back in a stable order
//! that the card grid preserves.

use std::future::Future;

use ssmgr_domain::error::SsmgrError;
use ssmgr_domain::id::ServerId;
use ssmgr_domain::server::ServerRecord;

/// Read access to managed proxy servers.
pub trait ServerSource {
    /// Return every server, in display order.
    fn list_servers(&self) -> impl Future<Output = Result<Vec<ServerRecord>, SsmgrError>> + Send;

    /// Look up a single server by its code.
    fn get_server(
        &self,
        id: &ServerId,
    ) -> impl Future<Output = Result<Option<ServerRecord>, SsmgrError>> + Send;
}
