//! Embedded PostgreSQL for the Diesel adapter suite.
//!
//! One cluster is shared per test binary. Each test gets its own temporary
//! database with the crate's embedded migrations applied, so suites never see
//! each other's rows.

use std::time::Duration;

use pg_embedded_setup_unpriv::{BootstrapResult, ClusterHandle, TemporaryDatabase};
use socialbuddy::outbound::persistence::run_pending_migrations;
use tokio::runtime::Runtime;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Shared cluster handle, retrying transient bootstrap failures.
pub fn shared_cluster_handle() -> BootstrapResult<&'static ClusterHandle> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) => {
                if attempt >= SHARED_CLUSTER_RETRIES {
                    return Err(error);
                }
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the cluster bootstrap spawns threads, and the
        // shared handle serialises callers.
        unsafe {
            std::env::set_var("PG_PASSWORD", "socialbuddy_embedded_test");
        }
    }
}

/// Create a fresh database on `cluster` and migrate it to the current schema.
pub fn provision_migrated_database(
    runtime: &Runtime,
    cluster: &ClusterHandle,
) -> Result<TemporaryDatabase, String> {
    let name = format!("socialbuddy_test_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    runtime
        .block_on(run_pending_migrations(database.url()))
        .map_err(|err| err.to_string())?;
    Ok(database)
}
