//! Shared currency context with change notification.

use super::CurrencySelection;
use crate::error::CurrencyError;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::stream::Stream;
use std::pin::Pin;
use std::sync::{Arc, Mutex, RwLock};
use std::task::{Context, Poll};

#[derive(Debug)]
struct Shared {
    current: RwLock<(CurrencySelection, u64)>,
    subscribers: Mutex<Vec<UnboundedSender<CurrencySelection>>>,
}

/// Owner of the active currency selection.
///
/// Cheap to clone; clones share the same selection. Hand a [`CurrencyWatch`]
/// (not the context) to anything that only needs to read.
#[derive(Debug, Clone)]
pub struct CurrencyContext {
    shared: Arc<Shared>,
}

impl CurrencyContext {
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        Ok(Self::with_selection(CurrencySelection::new(code)?))
    }

    pub fn with_selection(selection: CurrencySelection) -> Self {
        Self {
            shared: Arc::new(Shared {
                current: RwLock::new((selection, 0)),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> CurrencySelection {
        self.watch().get()
    }

    /// Select a currency by code.
    ///
    /// Returns `Ok(true)` if the selection changed and subscribers were
    /// notified, `Ok(false)` if `code` was already active. Unknown codes leave
    /// the selection untouched.
    pub fn set(&self, code: &str) -> Result<bool, CurrencyError> {
        let next = CurrencySelection::new(code)?;
        let mut current = self
            .shared
            .current
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if current.0 == next {
            return Ok(false);
        }
        current.0 = next.clone();
        current.1 += 1;

        tracing::info!(currency = next.code(), "Currency changed");

        // Notified under the write guard: delivery order matches `get()`.
        let mut subscribers = self
            .shared
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| tx.unbounded_send(next.clone()).is_ok());
        Ok(true)
    }

    /// Read-only handle for view-models.
    pub fn watch(&self) -> CurrencyWatch {
        CurrencyWatch {
            shared: self.shared.clone(),
        }
    }
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self::with_selection(CurrencySelection::default())
    }
}

/// Read-only view of a [`CurrencyContext`].
#[derive(Debug, Clone)]
pub struct CurrencyWatch {
    shared: Arc<Shared>,
}

impl CurrencyWatch {
    pub fn get(&self) -> CurrencySelection {
        self.shared
            .current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .0
            .clone()
    }

    /// Number of effective changes since the context was created.
    pub fn version(&self) -> u64 {
        self.shared
            .current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .1
    }

    /// Stream of selections, one item per effective change after this call.
    pub fn changes(&self) -> CurrencyChanges {
        let (tx, rx) = unbounded();
        self.shared
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        CurrencyChanges { rx }
    }
}

/// Stream returned by [`CurrencyWatch::changes`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct CurrencyChanges {
    rx: UnboundedReceiver<CurrencySelection>,
}

impl CurrencyChanges {
    /// Most recent pending change, if any, without waiting.
    pub fn latest(&mut self) -> Option<CurrencySelection> {
        let mut latest = None;
        while let Ok(sel) = self.rx.try_recv() {
            latest = Some(sel);
        }
        latest
    }
}

impl Stream for CurrencyChanges {
    type Item = CurrencySelection;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.rx).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn test_set_replaces_selection() {
        let ctx = CurrencyContext::default();
        assert_eq!(ctx.get().code(), "USD");
        assert_eq!(ctx.set("INR"), Ok(true));
        assert_eq!(ctx.get().code(), "INR");
        assert_eq!(ctx.get().symbol(), "₹");
        assert_eq!(ctx.watch().version(), 1);
    }

    #[test]
    fn test_same_code_is_noop() {
        let ctx = CurrencyContext::new("EUR").unwrap();
        let mut changes = ctx.watch().changes();
        assert_eq!(ctx.set("eur"), Ok(false));
        assert_eq!(ctx.watch().version(), 0);
        assert_eq!(changes.latest(), None);
    }

    #[test]
    fn test_unknown_code_keeps_selection() {
        let ctx = CurrencyContext::default();
        assert!(ctx.set("ZZZ").is_err());
        assert_eq!(ctx.get().code(), "USD");
        assert_eq!(ctx.watch().version(), 0);
    }

    #[test]
    fn test_watch_sees_updates() {
        let ctx = CurrencyContext::default();
        let watch = ctx.watch();
        ctx.set("GBP").unwrap();
        assert_eq!(watch.get().code(), "GBP");
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let ctx = CurrencyContext::default();
        let mut a = ctx.watch().changes();
        let mut b = ctx.watch().changes();
        ctx.set("JPY").unwrap();
        ctx.set("USD").unwrap();

        assert_eq!(a.next().await.unwrap().code(), "JPY");
        assert_eq!(a.next().await.unwrap().code(), "USD");
        assert_eq!(b.latest().unwrap().code(), "USD");
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let ctx = CurrencyContext::default();
        let dropped = ctx.watch().changes();
        drop(dropped);
        let mut kept = ctx.watch().changes();
        ctx.set("CAD").unwrap();
        assert_eq!(ctx.shared.subscribers.lock().unwrap().len(), 1);
        assert_eq!(kept.latest().unwrap().code(), "CAD");
    }

    #[test]
    fn test_concurrent_sets_end_on_current_selection() {
        let ctx = CurrencyContext::default();
        let mut changes = ctx.watch().changes();
        let codes = ["INR", "EUR", "GBP", "JPY", "AUD", "CAD", "USD"];

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let ctx = ctx.clone();
                std::thread::spawn(move || {
                    for i in 0..200 {
                        let _ = ctx.set(codes[(t + i) % codes.len()]);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(changes.latest(), Some(ctx.get()));
    }
}
