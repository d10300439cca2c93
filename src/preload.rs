//! Collectible thumbnail prefetching.
//!
//! Every thumbnail gets a priority from the position of its family among all
//! families and of its row within the family. Tasks are then regrouped by
//! priority class (high, normal, low) and handed to an [`ImageLoader`] once
//! per session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{CollectibleFamily, CollectibleRow};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreloadPolicyError {
    #[error("{name} must be greater than zero")]
    ZeroThreshold { name: &'static str },
    #[error("jumbo_family_threshold ({jumbo}) must not be below large_family_threshold ({large})")]
    JumboBelowLarge { large: usize, jumbo: usize },
}

/// Fetch priority class understood by the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreloadPriority {
    High,
    Normal,
    Low,
}

impl PreloadPriority {
    /// Dispatch order of the classes.
    pub const ORDER: [PreloadPriority; 3] =
        [PreloadPriority::High, PreloadPriority::Normal, PreloadPriority::Low];
}

/// One thumbnail to prefetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadTask {
    pub id: String,
    pub uri: String,
    pub priority: PreloadPriority,
}

/// How a family was classified for tiering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyTier {
    pub top_fold: bool,
    pub large: bool,
    pub jumbo: bool,
}

/// Thresholds driving priority assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadPolicy {
    large_family_threshold: usize,
    jumbo_family_threshold: usize,
    min_top_fold_threshold: usize,
}

impl Default for PreloadPolicy {
    fn default() -> Self {
        Self {
            large_family_threshold: 4,
            jumbo_family_threshold: 8,
            min_top_fold_threshold: 10,
        }
    }
}

impl PreloadPolicy {
    pub fn new(
        large_family_threshold: usize,
        jumbo_family_threshold: usize,
        min_top_fold_threshold: usize,
    ) -> Result<Self, PreloadPolicyError> {
        if large_family_threshold == 0 {
            return Err(PreloadPolicyError::ZeroThreshold {
                name: "large_family_threshold",
            });
        }
        if min_top_fold_threshold == 0 {
            return Err(PreloadPolicyError::ZeroThreshold {
                name: "min_top_fold_threshold",
            });
        }
        if jumbo_family_threshold < large_family_threshold {
            return Err(PreloadPolicyError::JumboBelowLarge {
                large: large_family_threshold,
                jumbo: jumbo_family_threshold,
            });
        }
        Ok(Self {
            large_family_threshold,
            jumbo_family_threshold,
            min_top_fold_threshold,
        })
    }

    /// Classify the family at `index` of `total_families` holding `row_count` rows.
    ///
    /// Top-fold means `index < max(total_families / 2, min_top_fold_threshold)`
    /// with real (not floor) division.
    pub fn classify(&self, index: usize, total_families: usize, row_count: usize) -> FamilyTier {
        let top_fold = index < self.min_top_fold_threshold || 2 * index < total_families;
        FamilyTier {
            top_fold,
            large: row_count > self.large_family_threshold,
            jumbo: row_count > self.jumbo_family_threshold,
        }
    }

    pub fn row_priority(&self, tier: FamilyTier, row_index: usize) -> PreloadPriority {
        if !tier.top_fold {
            return PreloadPriority::Normal;
        }
        if !tier.large || row_index <= self.large_family_threshold {
            return PreloadPriority::High;
        }
        if tier.jumbo && row_index > self.jumbo_family_threshold {
            PreloadPriority::Low
        } else {
            PreloadPriority::Normal
        }
    }

    /// Tasks for one family, in row then token order.
    pub fn family_tasks(
        &self,
        family: &CollectibleFamily,
        index: usize,
        total_families: usize,
    ) -> Vec<PreloadTask> {
        let tier = self.classify(index, total_families, family.row_count());
        family
            .rows
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| row_tasks(row, self.row_priority(tier, row_index)))
            .collect()
    }

    /// All tasks across `families`, grouped high, then normal, then low.
    /// Order inside a class follows family, row and token order.
    pub fn build_tasks(&self, families: &[CollectibleFamily]) -> Vec<PreloadTask> {
        let total = families.len();
        let tasks: Vec<PreloadTask> = families
            .iter()
            .enumerate()
            .flat_map(|(index, family)| self.family_tasks(family, index, total))
            .collect();
        sort_by_priority(tasks)
    }
}

fn row_tasks(row: &CollectibleRow, priority: PreloadPriority) -> impl Iterator<Item = PreloadTask> + '_ {
    row.tokens().iter().filter_map(move |token| {
        token.thumbnail().map(|uri| PreloadTask {
            id: token.id.clone(),
            uri: uri.to_string(),
            priority,
        })
    })
}

/// Stable partition into priority classes, concatenated in dispatch order.
pub fn sort_by_priority(tasks: Vec<PreloadTask>) -> Vec<PreloadTask> {
    let mut ordered = Vec::with_capacity(tasks.len());
    for class in PreloadPriority::ORDER {
        ordered.extend(tasks.iter().filter(|t| t.priority == class).cloned());
    }
    ordered
}

/// Image-loading collaborator. Dispatch is fire-and-forget.
pub trait ImageLoader: Send + Sync {
    fn preload(&self, tasks: Vec<PreloadTask>);

    fn name(&self) -> &str;
}

/// Keeps every dispatched batch in memory.
#[derive(Default)]
pub struct RecordingImageLoader {
    batches: Mutex<Vec<Vec<PreloadTask>>>,
}

impl RecordingImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> Vec<Vec<PreloadTask>> {
        self.batches
            .lock()
            .expect("image loader lock poisoned")
            .clone()
    }

    /// All dispatched tasks in dispatch order.
    pub fn dispatched(&self) -> Vec<PreloadTask> {
        self.batches().into_iter().flatten().collect()
    }
}

impl ImageLoader for RecordingImageLoader {
    fn preload(&self, tasks: Vec<PreloadTask>) {
        self.batches
            .lock()
            .expect("image loader lock poisoned")
            .push(tasks);
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Whether this session's one-shot preload pass has run.
#[derive(Debug, Default)]
pub struct PreloadState {
    complete: AtomicBool,
}

impl PreloadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Flip to complete. Returns false if another caller already did.
    pub fn try_complete(&self) -> bool {
        self.complete
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn reset(&self) {
        self.complete.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadOutcome {
    Dispatched { tasks: usize },
    AlreadyComplete,
    NothingToLoad,
}

/// Builds and dispatches the prefetch batch at most once per session.
pub struct PreloadScheduler {
    policy: PreloadPolicy,
    state: PreloadState,
    loader: Arc<dyn ImageLoader>,
}

impl PreloadScheduler {
    pub fn new(policy: PreloadPolicy, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            policy,
            state: PreloadState::new(),
            loader,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn reset(&self) {
        self.state.reset();
    }

    /// Build the ordered batch for `families` and dispatch it, unless a
    /// previous call already dispatched. An empty batch leaves the state
    /// untouched so later data can still trigger the pass.
    pub fn schedule(&self, families: &[CollectibleFamily]) -> PreloadOutcome {
        if self.state.is_complete() {
            debug!("collectible preload already ran for this session");
            return PreloadOutcome::AlreadyComplete;
        }

        let tasks = self.policy.build_tasks(families);
        if tasks.is_empty() {
            return PreloadOutcome::NothingToLoad;
        }

        if !self.state.try_complete() {
            return PreloadOutcome::AlreadyComplete;
        }

        let count = |class: PreloadPriority| tasks.iter().filter(|t| t.priority == class).count();
        info!(
            loader = self.loader.name(),
            total = tasks.len(),
            high = count(PreloadPriority::High),
            normal = count(PreloadPriority::Normal),
            low = count(PreloadPriority::Low),
            "dispatching collectible preload"
        );

        let total = tasks.len();
        self.loader.preload(tasks);
        PreloadOutcome::Dispatched { tasks: total }
    }
}
