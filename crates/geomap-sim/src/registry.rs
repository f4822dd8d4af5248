//! Asset registry — the current asset set as reported by the external feed.
//!
//! The registry is a leaf data holder: assets arrive only as whole-set
//! refreshes and are read-only within a tick. Insertion order is preserved,
//! which the targeting resolver's tie-break depends on.

use geomap_core::asset::Asset;
use geomap_core::enums::{Allegiance, AssetStatus};

/// Insertion-ordered store of the current assets.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire asset set. The engine applies refreshes between
    /// ticks, so engagement logic never observes a partial update.
    pub fn replace_all(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
    }

    /// Look up an asset by id.
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// All assets, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Assets of the given allegiance whose status passes the predicate,
    /// in insertion order.
    pub fn filter<'a>(
        &'a self,
        allegiance: Allegiance,
        status: impl Fn(AssetStatus) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Asset> {
        self.assets
            .iter()
            .filter(move |a| a.allegiance == allegiance && status(a.status))
    }

    /// Friendlies eligible as engagement sources (Available or InUse).
    pub fn eligible_sources(&self) -> impl Iterator<Item = &Asset> {
        self.filter(Allegiance::Friendly, |s| s.eligible_source())
    }

    /// All hostile assets.
    pub fn hostiles(&self) -> impl Iterator<Item = &Asset> {
        self.filter(Allegiance::Hostile, |_| true)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
