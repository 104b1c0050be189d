//! Memoized binder projection.
//!
//! `BinderView` remembers the last (binder revision, card generation,
//! filter, sort) it computed and the resulting entry order. Asking again
//! with the same inputs returns the cached order; any change recomputes
//! from scratch. Revisions and generations are process-wide stamps, so a
//! reloaded or different binder never matches a stale key.
//!
//! Lookups that report generation 0 are untracked; call `invalidate`
//! after changing one.

use crate::binder::{Binder, EntryView};
use crate::cards::CardLookup;
use crate::filter::{FilterMatcher, FilterSpec};
use crate::sort::{sort_order, SortSpec};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ViewKey {
    revision: u64,
    len: usize,
    cards: u64,
    filter: FilterSpec,
    sort: SortSpec,
}

/// Cached filter + sort result for one binder.
#[derive(Clone, Debug, Default)]
pub struct BinderView {
    key: Option<ViewKey>,
    order: Vec<usize>,
    hits: u64,
    misses: u64,
}

impl BinderView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binder positions of the visible entries, in display order.
    pub fn refresh<L: CardLookup + ?Sized>(
        &mut self,
        binder: &Binder,
        cards: &L,
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> &[usize] {
        let key = ViewKey {
            revision: binder.revision(),
            len: binder.len(),
            cards: cards.generation(),
            filter: filter.clone(),
            sort: *sort,
        };

        if self.key.as_ref() == Some(&key) {
            self.hits += 1;
            log::trace!("binder view hit (revision {})", key.revision);
            return &self.order;
        }

        self.misses += 1;
        let views = binder.resolve(cards);
        let matcher = FilterMatcher::new(filter);
        let visible: Vec<usize> = (0..views.len()).filter(|&i| matcher.matches(&views[i])).collect();
        let visible_views: Vec<EntryView<'_>> = visible.iter().map(|&i| views[i]).collect();

        self.order = sort_order(&visible_views, sort)
            .into_iter()
            .map(|i| visible[i])
            .collect();
        log::debug!(
            "binder view recomputed: {} of {} entries visible",
            self.order.len(),
            views.len()
        );

        self.key = Some(key);
        &self.order
    }

    /// Visible entries, resolved, in display order.
    pub fn entries<'a, L: CardLookup + ?Sized>(
        &mut self,
        binder: &'a Binder,
        cards: &'a L,
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Vec<EntryView<'a>> {
        self.refresh(binder, cards, filter, sort)
            .iter()
            .filter_map(|&i| binder.get(i))
            .map(|e| EntryView::resolve(e, cards))
            .collect()
    }

    /// Drop the cached result so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.order.clear();
    }

    /// Calls answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Calls that recomputed.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
