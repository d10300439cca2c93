mod support;

use support::{family, recording_pipeline, StateBuilder};
use wallet_sections::models::{Collectible, CollectibleFamily, CollectibleRow};
use wallet_sections::preload::{PreloadPolicy, PreloadPriority};
use wallet_sections::sections::SectionKind;

fn priorities_of(tasks: &[wallet_sections::preload::PreloadTask], family: &str) -> Vec<PreloadPriority> {
    let prefix = format!("{family}/");
    tasks
        .iter()
        .filter(|t| t.id.starts_with(&prefix))
        .map(|t| t.priority)
        .collect()
}

fn twenty_families() -> Vec<CollectibleFamily> {
    let mut families = vec![family("jumbo", 10)];
    families.extend((1..19).map(|i| family(&format!("mid{i}"), 1)));
    families.push(family("last", 10));
    families
}

#[test]
fn jumbo_top_fold_family_is_tiered_by_row() {
    let policy = PreloadPolicy::default();
    let families = twenty_families();
    let tasks = policy.family_tasks(&families[0], 0, families.len());

    let priorities: Vec<_> = tasks.iter().map(|t| t.priority).collect();
    let mut expected = vec![PreloadPriority::High; 5];
    expected.extend([PreloadPriority::Normal; 4]);
    expected.push(PreloadPriority::Low);
    assert_eq!(priorities, expected);
}

#[test]
fn family_below_the_fold_is_all_normal() {
    let policy = PreloadPolicy::default();
    let families = twenty_families();
    let tasks = policy.family_tasks(&families[19], 19, families.len());

    assert_eq!(tasks.len(), 10);
    assert!(tasks.iter().all(|t| t.priority == PreloadPriority::Normal));
}

#[test]
fn dispatch_groups_by_priority_class_across_families() {
    let (mut pipeline, loader) = recording_pipeline();
    let state = StateBuilder::new().with_families(twenty_families()).build();

    pipeline.compose(&state);
    let tasks = loader.dispatched();

    let first_non_high = tasks
        .iter()
        .position(|t| t.priority != PreloadPriority::High)
        .expect("normal tasks present");
    assert!(tasks[..first_non_high]
        .iter()
        .all(|t| t.priority == PreloadPriority::High));
    assert!(tasks[first_non_high..]
        .iter()
        .all(|t| t.priority != PreloadPriority::High));

    let first_low = tasks
        .iter()
        .position(|t| t.priority == PreloadPriority::Low)
        .expect("low task present");
    assert!(tasks[first_low..].iter().all(|t| t.priority == PreloadPriority::Low));

    // The below-fold family sits last in the input but its tasks are all
    // normal, in row order.
    let last_ids: Vec<_> = tasks
        .iter()
        .filter(|t| t.id.starts_with("last/"))
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(last_ids.first(), Some(&"last/0"));
    assert_eq!(last_ids.last(), Some(&"last/9"));
    assert_eq!(priorities_of(&tasks, "last"), vec![PreloadPriority::Normal; 10]);

    // Normal tasks keep family order: jumbo's rows 5-8 precede last's rows.
    let jumbo_row5 = tasks.iter().position(|t| t.id == "jumbo/5").unwrap();
    let last_row0 = tasks.iter().position(|t| t.id == "last/0").unwrap();
    assert!(jumbo_row5 < last_row0);
}

#[test]
fn thumbnails_missing_urls_are_skipped() {
    let (mut pipeline, loader) = recording_pipeline();
    let mixed = CollectibleFamily::new(
        "mixed",
        vec![
            CollectibleRow(vec![
                Collectible::new("a", Some("https://img.example/a.png")),
                Collectible::new("b", None),
                Collectible::new("c", Some("")),
            ]),
            CollectibleRow(vec![Collectible::new("d", None)]),
        ],
    );
    let state = StateBuilder::new().with_families(vec![mixed]).build();

    let composed = pipeline.compose(&state);
    let ids: Vec<_> = loader.dispatched().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["a".to_string()]);

    // Every holding still counts toward the header.
    let collectibles = composed.section(SectionKind::Collectibles).expect("collectibles retained");
    assert_eq!(collectibles.header.total_items, 4);
}

#[test]
fn preload_dispatches_once_per_session() {
    let (mut pipeline, loader) = recording_pipeline();
    let families = vec![family("punks", 3)];

    pipeline.compose(&StateBuilder::new().with_families(families.clone()).build());
    // Fresh allocations force the collectibles section to rebuild.
    pipeline.compose(&StateBuilder::new().with_families(families).build());

    assert_eq!(loader.batches().len(), 1);
    assert!(pipeline.is_preload_complete());
    assert_eq!(pipeline.stats().collectibles.misses, 2);
}

#[test]
fn empty_families_leave_preload_armed() {
    let (mut pipeline, loader) = recording_pipeline();

    pipeline.compose(&StateBuilder::new().build());
    assert!(!pipeline.is_preload_complete());
    assert!(loader.batches().is_empty());

    pipeline.compose(&StateBuilder::new().with_families(vec![family("late", 2)]).build());
    assert!(pipeline.is_preload_complete());
    assert_eq!(loader.dispatched().len(), 2);
}

#[test]
fn account_switch_rearms_preload() {
    let (mut pipeline, loader) = recording_pipeline();
    let state = StateBuilder::new().with_families(vec![family("punks", 2)]).build();

    pipeline.switch_account("0xaaa");
    pipeline.compose(&state);
    pipeline.switch_account("0xaaa");
    pipeline.compose(&state);
    assert_eq!(loader.batches().len(), 1);

    pipeline.switch_account("0xbbb");
    assert!(!pipeline.is_preload_complete());
    pipeline.compose(&state);
    assert_eq!(loader.batches().len(), 2);
    assert_eq!(pipeline.account(), Some("0xbbb"));
}

#[test]
fn reset_preload_runs_again_on_next_compose() {
    let (mut pipeline, loader) = recording_pipeline();
    let state = StateBuilder::new().with_families(vec![family("punks", 2)]).build();

    pipeline.compose(&state);
    pipeline.reset_preload();
    pipeline.compose(&state);

    assert_eq!(loader.batches().len(), 2);
}
