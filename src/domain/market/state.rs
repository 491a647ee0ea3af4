//! Coin list view-model — app-owned, SDK-provided update logic.

use super::{CoinRow, CoinSummary};
use crate::currency::{CurrencySelection, CurrencyWatch};
use crate::error::LoadError;
use crate::shared::{LoadStatus, Pending, RequestSeq, RequestTicket};

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Coins whose name or symbol contains `term`, case-insensitively, in list order.
///
/// An empty term returns every coin.
pub fn search<'a>(coins: &'a [CoinSummary], term: &str) -> Vec<&'a CoinSummary> {
    if term.is_empty() {
        return coins.iter().collect();
    }
    let needle = term.to_lowercase();
    coins.iter().filter(|c| c.matches_lowercase(&needle)).collect()
}

/// The 1-indexed `page` of `items`: `[(page-1)*page_size, page*page_size)`.
///
/// Page 0 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// State behind the market table: the fetched list plus search and page input.
///
/// The app owns instances of this type; the `markets()` sub-client drives
/// `begin_refresh`/`complete_refresh` around the network call.
#[derive(Debug, Clone)]
pub struct CoinListViewModel {
    currency: CurrencyWatch,
    coins: Vec<CoinSummary>,
    /// Currency the displayed coins are priced in.
    loaded_for: Option<CurrencySelection>,
    /// Currency of the most recent refresh, finished or not.
    requested_for: Option<CurrencySelection>,
    status: LoadStatus,
    seq: RequestSeq,
    search: String,
    page: usize,
}

impl CoinListViewModel {
    pub fn new(currency: CurrencyWatch) -> Self {
        Self {
            currency,
            coins: Vec::new(),
            loaded_for: None,
            requested_for: None,
            status: LoadStatus::Idle,
            seq: RequestSeq::new(),
            search: String::new(),
            page: 1,
        }
    }

    // ── Fetch cycle ──────────────────────────────────────────────────────

    /// Start a refresh for the currently selected currency.
    pub fn begin_refresh(&mut self) -> Pending<CurrencySelection> {
        let currency = self.currency.get();
        self.requested_for = Some(currency.clone());
        self.status = LoadStatus::Loading;
        Pending {
            ticket: self.seq.issue(),
            query: currency,
        }
    }

    /// Apply a refresh result. Returns `false` if `ticket` is stale.
    ///
    /// Failures keep the previously displayed coins.
    pub fn complete_refresh(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<CoinSummary>, LoadError>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(ticket = ticket.seq(), "Discarding stale coin list response");
            return false;
        }

        match result {
            Ok(coins) if coins.is_empty() => {
                self.status = LoadStatus::Failed(LoadError::EmptyResult);
            }
            Ok(coins) => {
                self.coins = coins;
                self.loaded_for = self.requested_for.clone();
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    /// Whether the selected currency differs from the last requested one.
    pub fn needs_refresh(&self) -> bool {
        self.requested_for.as_ref() != Some(&self.currency.get())
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Full list in server (market cap) order.
    pub fn coins(&self) -> &[CoinSummary] {
        &self.coins
    }

    /// Currency the displayed prices are in (falls back to the selection
    /// before the first successful load).
    pub fn display_currency(&self) -> CurrencySelection {
        self.loaded_for
            .clone()
            .unwrap_or_else(|| self.currency.get())
    }

    // ── Search & pagination ──────────────────────────────────────────────

    pub fn search(&self, term: &str) -> Vec<&CoinSummary> {
        search(&self.coins, term)
    }

    /// Set the search box contents. The current page is kept as is.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Coins matching the current search.
    pub fn filtered(&self) -> Vec<&CoinSummary> {
        search(&self.coins, &self.search)
    }

    /// Current page of the current search.
    pub fn visible(&self) -> Vec<&CoinSummary> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, PAGE_SIZE).to_vec()
    }

    /// Formatted rows for the current page.
    pub fn visible_rows(&self) -> Vec<CoinRow> {
        let currency = self.display_currency();
        self.visible().into_iter().map(|c| c.row(&currency)).collect()
    }

    /// Pages available for the current search.
    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyContext;
    use crate::domain::market::test_support::coin;

    fn coins(n: usize) -> Vec<CoinSummary> {
        (0..n)
            .map(|i| coin(&format!("c{i}"), &format!("s{i}"), &format!("Coin {i}")))
            .collect()
    }

    fn sample() -> Vec<CoinSummary> {
        vec![
            coin("bitcoin", "btc", "Bitcoin"),
            coin("ethereum", "eth", "Ethereum"),
            coin("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
            coin("tether", "usdt", "Tether"),
            coin("bitget-token", "bgb", "Bitget Token"),
        ]
    }

    #[test]
    fn test_search_empty_returns_all_in_order() {
        let list = sample();
        let found = search(&list, "");
        assert_eq!(found.len(), list.len());
        assert!(found.iter().zip(&list).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_is_case_insensitive_ordered_subsequence() {
        let list = sample();
        let found = search(&list, "BiT");
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["bitcoin", "wrapped-bitcoin", "bitget-token"]);
    }

    #[test]
    fn test_search_matches_symbol() {
        let list = sample();
        let ids: Vec<_> = search(&list, "usdt").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["tether"]);
    }

    #[test]
    fn test_paginate_slices_one_indexed() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_whole() {
        for len in [0usize, 1, 9, 10, 11, 20, 37] {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(len, 10);
            let mut joined = Vec::new();
            for p in 1..=pages {
                let page = paginate(&items, p, 10);
                assert!(page.len() <= 10);
                joined.extend_from_slice(page);
            }
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn test_refresh_cycle() {
        let ctx = CurrencyContext::default();
        let mut vm = CoinListViewModel::new(ctx.watch());
        assert_eq!(vm.status(), &LoadStatus::Idle);
        assert!(vm.needs_refresh());

        let pending = vm.begin_refresh();
        assert_eq!(pending.query.code(), "USD");
        assert!(vm.status().is_loading());
        assert!(!vm.needs_refresh());

        assert!(vm.complete_refresh(pending.ticket, Ok(sample())));
        assert!(vm.status().is_ready());
        assert_eq!(vm.coins().len(), 5);
    }

    #[test]
    fn test_failure_keeps_previous_coins() {
        let ctx = CurrencyContext::default();
        let mut vm = CoinListViewModel::new(ctx.watch());
        let p = vm.begin_refresh();
        vm.complete_refresh(p.ticket, Ok(sample()));

        let p = vm.begin_refresh();
        vm.complete_refresh(p.ticket, Err(LoadError::NetworkFailure("offline".into())));
        assert_eq!(
            vm.status().error(),
            Some(&LoadError::NetworkFailure("offline".into()))
        );
        assert_eq!(vm.coins().len(), 5);
    }

    #[test]
    fn test_empty_list_is_failure() {
        let mut vm = CoinListViewModel::new(CurrencyContext::default().watch());
        let p = vm.begin_refresh();
        vm.complete_refresh(p.ticket, Ok(Vec::new()));
        assert_eq!(vm.status().error(), Some(&LoadError::EmptyResult));
    }

    #[test]
    fn test_stale_refresh_is_discarded() {
        let ctx = CurrencyContext::default();
        let mut vm = CoinListViewModel::new(ctx.watch());
        let usd = vm.begin_refresh();
        ctx.set("INR").unwrap();
        assert!(vm.needs_refresh());
        let inr = vm.begin_refresh();

        assert!(vm.complete_refresh(inr.ticket, Ok(coins(3))));
        assert!(!vm.complete_refresh(usd.ticket, Ok(sample())));
        assert_eq!(vm.coins().len(), 3);
        assert_eq!(vm.display_currency().code(), "INR");
    }

    #[test]
    fn test_search_then_page_two() {
        let mut list = coins(30);
        for c in list.iter_mut().step_by(2) {
            c.name = format!("Bit {}", c.name);
        }
        let mut vm = CoinListViewModel::new(CurrencyContext::default().watch());
        let p = vm.begin_refresh();
        vm.complete_refresh(p.ticket, Ok(list));

        vm.set_search("bit");
        assert_eq!(vm.filtered().len(), 15);
        assert_eq!(vm.page_count(), 2);
        vm.set_page(2);
        let visible = vm.visible();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id.as_str(), "c20");

        vm.set_page(3);
        assert!(vm.visible().is_empty());
    }

    #[test]
    fn test_visible_rows_use_loaded_currency() {
        let ctx = CurrencyContext::new("EUR").unwrap();
        let mut vm = CoinListViewModel::new(ctx.watch());
        let p = vm.begin_refresh();
        vm.complete_refresh(p.ticket, Ok(sample()));
        ctx.set("GBP").unwrap();

        let rows = vm.visible_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].price.starts_with('€'));
    }
}
