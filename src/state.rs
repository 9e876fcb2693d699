use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub aggregate_locks: AggregateLocks,
}

pub type RedisClient = Pool<RedisConnectionManager>;

// One async mutex per organization, created on first ingest. Writers to the
// same organization's aggregate serialize on it; different organizations
// proceed in parallel and readers never take it.
pub type AggregateLocks = Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>;

pub async fn aggregate_lock(locks: &AggregateLocks, organization_id: u64) -> Arc<Mutex<()>> {
    let mut map = locks.lock().await;
    // An entry only the map still references belongs to a finished ingest;
    // drop it so the map doesn't grow with every organization ever commented on.
    map.retain(|_, lock| Arc::strong_count(lock) > 1);
    map.entry(organization_id)
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}
