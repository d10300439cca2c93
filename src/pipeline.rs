//! The single entry point turning wallet state into display sections.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::derivation::{CacheStats, DerivationCache, Shared};
use crate::models::WalletState;
use crate::preload::{ImageLoader, PreloadPolicy, PreloadScheduler};
use crate::sections::{
    build_balance_section, build_collectible_section, build_investment_section, compose_sections,
    BalanceInputs, CollectibleInputs, InvestmentInputs, Section, WalletSections,
};

type ComposeInputs = (Shared<Section>, Shared<Section>, Shared<Section>);

/// Cache counters for each derivation, for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub balances: CacheStats,
    pub investments: CacheStats,
    pub collectibles: CacheStats,
    pub composed: CacheStats,
}

/// Owns the per-derivation caches and the session's preload state.
///
/// One pipeline serves one active account. [`switch_account`] clears every
/// cache and re-arms the preload pass when the account changes.
///
/// [`switch_account`]: WalletSectionsPipeline::switch_account
pub struct WalletSectionsPipeline {
    config: Config,
    account: Option<String>,
    scheduler: PreloadScheduler,
    balances: DerivationCache<BalanceInputs, Section>,
    investments: DerivationCache<InvestmentInputs, Section>,
    collectibles: DerivationCache<CollectibleInputs, Section>,
    composed: DerivationCache<ComposeInputs, WalletSections>,
}

impl WalletSectionsPipeline {
    pub fn new(config: Config, loader: Arc<dyn ImageLoader>) -> anyhow::Result<Self> {
        let policy = config.preload.policy()?;
        Ok(Self::with_policy(config, policy, loader))
    }

    pub fn with_policy(config: Config, policy: PreloadPolicy, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            config,
            account: None,
            scheduler: PreloadScheduler::new(policy, loader),
            balances: DerivationCache::new("balances"),
            investments: DerivationCache::new("investments"),
            collectibles: DerivationCache::new("collectibles"),
            composed: DerivationCache::new("composed_sections"),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Derive the composed sections for `state`, reusing every section whose
    /// inputs did not change since the previous call.
    pub fn compose(&mut self, state: &WalletState) -> Arc<WalletSections> {
        let config = &self.config;
        let scheduler = &self.scheduler;

        let balances = self
            .balances
            .get_or_derive(BalanceInputs::from_state(state), |inputs| {
                build_balance_section(inputs, config)
            });
        let investments = self
            .investments
            .get_or_derive(InvestmentInputs::from_state(state), build_investment_section);
        let collectibles = self
            .collectibles
            .get_or_derive(CollectibleInputs::from_state(state), |inputs| {
                build_collectible_section(inputs, scheduler)
            });

        let inputs = (
            Shared::from_arc(balances),
            Shared::from_arc(investments),
            Shared::from_arc(collectibles),
        );
        self.composed
            .get_or_derive(inputs, |(balances, investments, collectibles)| {
                compose_sections(balances, investments, collectibles)
            })
    }

    /// Make `account` the active account. Switching to a different account
    /// drops all cached sections and re-arms the preload pass.
    pub fn switch_account(&mut self, account: impl Into<String>) {
        let account = account.into();
        if self.account.as_deref() == Some(account.as_str()) {
            return;
        }

        info!(
            from = self.account.as_deref().unwrap_or("none"),
            to = %account,
            "switching active wallet account"
        );
        self.balances.invalidate();
        self.investments.invalidate();
        self.collectibles.invalidate();
        self.composed.invalidate();
        self.scheduler.reset();
        self.account = Some(account);
    }

    /// Re-arm the preload pass. The collectibles section is rebuilt on the
    /// next `compose` so the pass runs again against current families.
    pub fn reset_preload(&mut self) {
        self.scheduler.reset();
        self.collectibles.invalidate();
    }

    pub fn is_preload_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            balances: self.balances.stats(),
            investments: self.investments.stats(),
            collectibles: self.collectibles.stats(),
            composed: self.composed.stats(),
        }
    }
}
