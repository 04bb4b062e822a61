//! Catalogue feed orchestration.
//!
//! [`CatalogueLoader`] owns the page-and-append state machine behind the
//! product grid: incremental pagination over the recommendation feed,
//! category filtering, and the price sort cycle. All mutable state sits
//! behind one lock; network calls happen with the lock released.

use std::sync::Arc;

use spacepal_core::catalog::{Product, RecommendationQuery, PAGE_SIZE};
use spacepal_core::error::Result;
use spacepal_core::gateway::{CatalogGateway, RecommendationGateway};
use spacepal_core::session::SelectionStore;
use spacepal_core::SpacePalError;
use tokio::sync::Mutex;

/// Where the loader is in its fetch lifecycle.
///
/// Only an `Idle` loader issues requests; `Exhausted` is terminal until a
/// filter change resets the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Exhausted,
}

/// The three-way price sort cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Original,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            Self::Original => Self::PriceAscending,
            Self::PriceAscending => Self::PriceDescending,
            Self::PriceDescending => Self::Original,
        }
    }
}

#[derive(Debug, Default)]
struct LoaderState {
    /// The list the caller renders; sorted in place when a price sort is on.
    products: Vec<Product>,
    /// Arrival-order shadow of `products`, restored when sorting returns
    /// to `Original`.
    arrival_order: Vec<Product>,
    offset: u32,
    phase: LoadPhase,
    sort: SortOrder,
    categories: Vec<String>,
    space_name: Option<String>,
    style_name: Option<String>,
    /// Bumped on every filter reset; in-flight fetches from an older
    /// generation are discarded on arrival.
    generation: u64,
}

impl LoaderState {
    fn reset_pages(&mut self) {
        self.products.clear();
        self.arrival_order.clear();
        self.offset = 0;
        self.phase = LoadPhase::Idle;
        self.sort = SortOrder::Original;
        self.generation += 1;
    }
}

/// Incremental loader for the recommended-product feed.
pub struct CatalogueLoader {
    catalog: Arc<dyn CatalogGateway>,
    recommendations: Arc<dyn RecommendationGateway>,
    selection: Arc<dyn SelectionStore>,
    state: Mutex<LoaderState>,
}

impl CatalogueLoader {
    pub fn new(
        catalog: Arc<dyn CatalogGateway>,
        recommendations: Arc<dyn RecommendationGateway>,
        selection: Arc<dyn SelectionStore>,
    ) -> Self {
        Self {
            catalog,
            recommendations,
            selection,
            state: Mutex::new(LoaderState::default()),
        }
    }

    /// Resolves the persisted space/style selection to the human-readable
    /// names the feed endpoint takes, fetching both filter lists
    /// concurrently.
    ///
    /// Fails when no complete selection exists or when an id no longer
    /// resolves; in either case the loader will not fetch pages.
    pub async fn load_filters(&self) -> Result<()> {
        let selection = self.selection.selection().await?;
        if !selection.is_complete() {
            return Err(SpacePalError::validation(
                "a space and a style must be chosen before browsing",
            ));
        }

        let (spaces, styles) =
            futures::future::try_join(self.catalog.spaces(), self.catalog.styles()).await?;

        let space_name = spaces
            .iter()
            .find(|s| s.id == selection.space_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| SpacePalError::not_found("space", selection.space_id.clone()))?;
        let style_name = styles
            .iter()
            .find(|s| s.id == selection.style_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| SpacePalError::not_found("style", selection.style_id.clone()))?;

        let mut state = self.state.lock().await;
        state.space_name = Some(space_name);
        state.style_name = Some(style_name);
        state.reset_pages();
        Ok(())
    }

    /// Fetches the next page and appends it to the feed.
    ///
    /// Returns `Ok(true)` when products were appended. Calls while a fetch
    /// is in flight or after the feed is exhausted are no-ops, so a
    /// level-triggered caller can invoke this freely.
    pub async fn load_next_page(&self) -> Result<bool> {
        let (query, generation) = {
            let mut state = self.state.lock().await;
            if state.phase != LoadPhase::Idle {
                return Ok(false);
            }
            let (space, style) = match (&state.space_name, &state.style_name) {
                (Some(space), Some(style)) => (space.clone(), style.clone()),
                _ => {
                    return Err(SpacePalError::validation(
                        "filters not loaded; call load_filters first",
                    ));
                }
            };
            state.phase = LoadPhase::Loading;
            let query = RecommendationQuery::new(space, style)
                .with_offset(state.offset)
                .with_categories(state.categories.clone());
            (query, state.generation)
        };

        let result = self.recommendations.recommendations(&query).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            // Filters changed while the request was in flight.
            tracing::debug!(offset = query.offset, "discarding stale page");
            return Ok(false);
        }

        match result {
            Err(e) => {
                tracing::warn!(error = %e, offset = query.offset, "page fetch failed");
                state.phase = LoadPhase::Exhausted;
                Ok(false)
            }
            Ok(page) if page.is_empty() => {
                state.phase = LoadPhase::Exhausted;
                Ok(false)
            }
            Ok(page) => {
                for product in page {
                    let seen = state.arrival_order.iter().any(|p| p.id == product.id);
                    if !seen {
                        state.arrival_order.push(product.clone());
                        state.products.push(product);
                    }
                }
                state.offset += PAGE_SIZE;
                state.phase = LoadPhase::Idle;
                Ok(true)
            }
        }
    }

    /// Adds or removes a category filter and resets the feed.
    pub async fn toggle_category(&self, label: &str) {
        let mut state = self.state.lock().await;
        if let Some(pos) = state.categories.iter().position(|c| c == label) {
            state.categories.remove(pos);
        } else {
            state.categories.push(label.to_string());
        }
        state.reset_pages();
    }

    /// Drops every category filter and resets the feed.
    pub async fn clear_categories(&self) {
        let mut state = self.state.lock().await;
        if !state.categories.is_empty() {
            state.categories.clear();
            state.reset_pages();
        }
    }

    /// Advances the sort cycle and reorders the feed in memory.
    ///
    /// Ascending and descending recompute from the full accumulated set;
    /// returning to `Original` restores arrival order verbatim. No network
    /// effect.
    pub async fn cycle_sort(&self) -> SortOrder {
        let mut state = self.state.lock().await;
        state.sort = state.sort.next();
        match state.sort {
            SortOrder::Original => {
                state.products = state.arrival_order.clone();
            }
            SortOrder::PriceAscending => {
                state.products.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            SortOrder::PriceDescending => {
                state.products.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
        }
        state.sort
    }

    pub async fn products(&self) -> Vec<Product> {
        self.state.lock().await.products.clone()
    }

    /// Whether another `load_next_page` call would issue a request.
    pub async fn can_load_more(&self) -> bool {
        let state = self.state.lock().await;
        state.phase == LoadPhase::Idle
            && state.space_name.is_some()
            && state.style_name.is_some()
    }

    pub async fn phase(&self) -> LoadPhase {
        self.state.lock().await.phase
    }

    pub async fn sort(&self) -> SortOrder {
        self.state.lock().await.sort
    }

    pub async fn categories(&self) -> Vec<String> {
        self.state.lock().await.categories.clone()
    }

    /// Resolved filter names, once `load_filters` has succeeded.
    pub async fn filter_names(&self) -> Option<(String, String)> {
        let state = self.state.lock().await;
        match (&state.space_name, &state.style_name) {
            (Some(space), Some(style)) => Some((space.clone(), style.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle_wraps() {
        assert_eq!(SortOrder::Original.next(), SortOrder::PriceAscending);
        assert_eq!(SortOrder::PriceAscending.next(), SortOrder::PriceDescending);
        assert_eq!(SortOrder::PriceDescending.next(), SortOrder::Original);
    }
}
