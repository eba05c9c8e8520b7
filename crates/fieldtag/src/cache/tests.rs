use super::*;
use crate::{
    RecordSchema,
    config::NameCase,
    test_fixtures::{Account, Diamond, SELF_EMBEDDING, StatusBase},
};
use std::thread;

#[test]
fn repeated_lookups_share_one_layout() {
    let cache = LayoutCache::default();

    let first = cache.layout(Diamond::MODEL).unwrap();
    let second = cache.layout(Diamond::MODEL).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_drops_cached_layouts() {
    let cache = LayoutCache::default();
    cache.layout(Diamond::MODEL).unwrap();
    cache.layout(StatusBase::MODEL).unwrap();
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn failed_builds_are_not_cached() {
    let cache = LayoutCache::default();

    assert!(matches!(
        cache.layout(&SELF_EMBEDDING),
        Err(FieldSetError::EmbeddingTooDeep { .. })
    ));
    assert!(cache.is_empty());
}

#[test]
fn cache_applies_its_config() {
    let cache = LayoutCache::new(TagConfig::default().with_name_case(NameCase::Kebab));
    let layout = cache.layout(Account::MODEL).unwrap();

    assert!(layout.find("db-instance-id").is_some());
    assert_eq!(cache.config().name_case, NameCase::Kebab);
}

#[test]
fn build_binds_cached_layout_to_value() {
    let cache = LayoutCache::default();
    let mut record = Diamond::default();

    {
        let mut set = cache.build_mut(&mut record).unwrap();
        set.set("prop2", "right".to_string()).unwrap();
    }
    assert_eq!(record.right.prop2, "right");

    let set = cache.build(&record).unwrap();
    assert_eq!(set.value_as::<String>("prop2").unwrap(), "right");
    assert_eq!(cache.len(), 1);

    assert!(matches!(
        cache.build(&1_i32),
        Err(FieldSetError::InvalidShape { .. })
    ));
}

#[test]
fn concurrent_population_converges() {
    let cache = LayoutCache::default();

    let layouts: Vec<Arc<FieldLayout>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| cache.layout(Account::MODEL).unwrap()))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(cache.len(), 1);
    for layout in &layouts {
        assert_eq!(layout.entries(), layouts[0].entries());
    }
}

#[test]
fn global_cache_is_shared() {
    let a = LayoutCache::global();
    let b = LayoutCache::global();

    assert!(std::ptr::eq(a, b));
    assert!(a.layout(StatusBase::MODEL).is_ok());
}
