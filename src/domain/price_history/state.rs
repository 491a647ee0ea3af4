//! Chart view-model — app-owned, SDK-provided update logic.

use super::{ChartQuery, ChartSeries, LabelZone, PricePoint};
use crate::currency::CurrencyWatch;
use crate::error::LoadError;
use crate::shared::{CoinId, DayRange, LoadStatus, Pending, RequestSeq, RequestTicket};
use chrono::FixedOffset;

/// State behind the price chart for one coin.
///
/// `ready` drops to `false` the moment a new query starts and only comes back
/// once that query's points have landed, so labels and points handed to a
/// chart always belong to the same series.
#[derive(Debug, Clone)]
pub struct ChartViewModel {
    currency: CurrencyWatch,
    days: DayRange,
    /// Most recent query, finished or not.
    requested: Option<ChartQuery>,
    /// Query the current points belong to.
    loaded: Option<ChartQuery>,
    points: Vec<PricePoint>,
    ready: bool,
    status: LoadStatus,
    seq: RequestSeq,
    zone: LabelZone,
}

impl ChartViewModel {
    /// Labels are rendered in local time.
    pub fn new(currency: CurrencyWatch) -> Self {
        Self::with_zone(currency, LabelZone::Local)
    }

    /// Labels are rendered at a fixed UTC offset.
    pub fn with_offset(currency: CurrencyWatch, offset: FixedOffset) -> Self {
        Self::with_zone(currency, LabelZone::Fixed(offset))
    }

    pub fn with_zone(currency: CurrencyWatch, zone: LabelZone) -> Self {
        Self {
            currency,
            days: DayRange::default(),
            requested: None,
            loaded: None,
            points: Vec::new(),
            ready: false,
            status: LoadStatus::Idle,
            seq: RequestSeq::new(),
            zone,
        }
    }

    /// Start loading `days` of history for `coin_id` in the selected currency.
    pub fn begin_load(&mut self, coin_id: CoinId, days: DayRange) -> Pending<ChartQuery> {
        let query = ChartQuery {
            coin_id,
            days,
            currency: self.currency.get(),
        };
        self.days = days;
        self.ready = false;
        self.requested = Some(query.clone());
        self.status = LoadStatus::Loading;
        Pending {
            ticket: self.seq.issue(),
            query,
        }
    }

    /// Apply a load result. Returns `false` if `ticket` is stale.
    pub fn complete_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<PricePoint>, LoadError>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(ticket = ticket.seq(), "Discarding stale price history response");
            return false;
        }

        match result {
            Ok(points) => {
                let empty = points.is_empty();
                self.points = points;
                self.loaded = self.requested.clone();
                if empty {
                    self.status = LoadStatus::Failed(LoadError::EmptyResult);
                } else {
                    self.ready = true;
                    self.status = LoadStatus::Ready;
                }
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    /// Whether the coin, range or selected currency differ from the last query.
    pub fn needs_reload(&self, coin_id: &CoinId, days: DayRange) -> bool {
        match &self.requested {
            Some(q) => q.coin_id != *coin_id || q.days != days || q.currency != self.currency.get(),
            None => true,
        }
    }

    /// Selected range (defaults to one day).
    pub fn days(&self) -> DayRange {
        self.days
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Most recent query, finished or not.
    pub fn requested_query(&self) -> Option<&ChartQuery> {
        self.requested.as_ref()
    }

    /// Query the current points were fetched for.
    pub fn loaded_query(&self) -> Option<&ChartQuery> {
        self.loaded.as_ref()
    }

    /// Plot data, only while a complete non-empty series is in place.
    pub fn chart(&self) -> Option<ChartSeries> {
        if !self.ready || self.points.is_empty() {
            return None;
        }
        let query = self.loaded.as_ref()?;
        let (labels, prices) = self
            .points
            .iter()
            .map(|p| (self.zone.label(p.timestamp_ms, query.days), p.price))
            .unzip();
        Some(ChartSeries {
            labels,
            prices,
            legend: query.legend(),
        })
    }
}
