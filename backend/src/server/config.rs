//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use socialbuddy::outbound::persistence::DbPool;
use socialbuddy::outbound::viacep::ViaCepAddressLookup;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) address_lookup: Option<ViaCepAddressLookup>,
}

impl ServerConfig {
    /// Construct a configuration that serves from the in-memory store and
    /// the public postal directory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            address_lookup: None,
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    ///
    /// Without a pool every repository port is served by one shared
    /// in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Use a specific postal directory client.
    #[must_use]
    pub fn with_address_lookup(mut self, address_lookup: ViaCepAddressLookup) -> Self {
        self.address_lookup = Some(address_lookup);
        self
    }
}
