use calm_map_be::state::{AggregateLocks, aggregate_lock};

#[tokio::test]
async fn test_released_locks_are_evicted() {
    let locks: AggregateLocks = Default::default();

    let first = aggregate_lock(&locks, 1).await;
    drop(first);

    // The next lookup sweeps the entry nobody holds anymore
    let _second = aggregate_lock(&locks, 2).await;

    let map = locks.lock().await;
    assert!(!map.contains_key(&1));
    assert!(map.contains_key(&2));
    assert_eq!(map.len(), 1);
}

#[tokio::test]
async fn test_held_locks_survive_eviction() {
    let locks: AggregateLocks = Default::default();

    let held = aggregate_lock(&locks, 1).await;
    let _guard = held.lock().await;

    let _other = aggregate_lock(&locks, 2).await;

    let map = locks.lock().await;
    assert!(map.contains_key(&1));
    assert!(map.contains_key(&2));
}

#[tokio::test]
async fn test_same_organization_gets_same_lock() {
    let locks: AggregateLocks = Default::default();

    let a = aggregate_lock(&locks, 7).await;
    let b = aggregate_lock(&locks, 7).await;

    assert!(std::sync::Arc::ptr_eq(&a, &b));
}
