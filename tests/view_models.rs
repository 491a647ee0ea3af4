//! End-to-end view-model tests through `CoinboardClient` with an in-memory
//! transport.
//!
//! Run with: cargo test --test view_models

#![cfg(feature = "http")]

use async_lock::Mutex;
use async_trait::async_trait;
use chrono::FixedOffset;
use coinboard::prelude::*;
use futures_util::StreamExt;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

const BASE: &str = "http://fake.local/api/v3";

// ── Fake transport ───────────────────────────────────────────────────────────

/// Serves canned bodies by path; paths with a gate wait for `notify_one`.
#[derive(Default)]
struct FakeTransport {
    responses: std::sync::Mutex<HashMap<String, Result<String, u16>>>,
    gates: std::sync::Mutex<HashMap<String, Arc<Notify>>>,
    requests: std::sync::Mutex<Vec<String>>,
}

impl FakeTransport {
    fn respond(&self, path: &str, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body.to_string()));
    }

    fn fail(&self, path: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(status));
    }

    fn gate(&self, path: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(path.to_string(), notify.clone());
        notify
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &Request) -> Result<String, HttpError> {
        let path = request
            .url
            .strip_prefix(BASE)
            .unwrap_or(&request.url)
            .to_string();
        self.requests.lock().unwrap().push(path.clone());

        let gate = self.gates.lock().unwrap().get(&path).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let response = self.responses.lock().unwrap().get(&path).cloned();
        match response {
            Some(Ok(body)) => Ok(body),
            Some(Err(404)) | None => Err(HttpError::NotFound(path)),
            Some(Err(status)) => Err(HttpError::ServerError {
                status,
                body: String::new(),
            }),
        }
    }
}

fn client_with(transport: Arc<FakeTransport>) -> CoinboardClient {
    CoinboardClient::builder()
        .base_url(BASE)
        .transport(transport)
        .label_offset(FixedOffset::east_opt(0).unwrap())
        .build()
        .unwrap()
}

fn list_path(currency: &str) -> String {
    format!(
        "/coins/markets?vs_currency={currency}&order=market_cap_desc&per_page=250&page=1&sparkline=false"
    )
}

fn chart_path(id: &str, days: u32) -> String {
    chart_path_in(id, days, "usd")
}

fn chart_path_in(id: &str, days: u32, currency: &str) -> String {
    format!("/coins/{id}/market_chart?vs_currency={currency}&days={days}")
}

/// 30 coins; every even index is a "Bit..." coin, so 15 match `"bit"`.
fn market_list(price: f64) -> serde_json::Value {
    let coins: Vec<_> = (0..30)
        .map(|i| {
            let (name, symbol) = if i % 2 == 0 {
                (format!("BitFork {i}"), format!("bf{i}"))
            } else {
                (format!("Other {i}"), format!("o{i}"))
            };
            json!({
                "id": format!("coin-{i}"),
                "symbol": symbol,
                "name": name,
                "image": format!("https://img.local/{i}.png"),
                "current_price": price,
                "market_cap": 1234567890.0,
                "market_cap_rank": i + 1,
                "price_change_percentage_24h": if i % 3 == 0 { 2.5 } else { -1.25 }
            })
        })
        .collect();
    json!(coins)
}

fn price_chart(start_ms: i64, n: i64, price: f64) -> serde_json::Value {
    let prices: Vec<_> = (0..n)
        .map(|i| json!([start_ms + i * 86_400_000, price]))
        .collect();
    json!({ "prices": prices, "market_caps": [], "total_volumes": [] })
}

/// 2024-01-01T13:05:00Z
const JAN_1_13_05: i64 = 1_704_114_300_000;

// ── List ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_search_second_page() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&list_path("usd"), market_list(1234.5));
    let client = client_with(transport.clone());

    let list = Mutex::new(client.list_view_model());
    assert!(client.markets().refresh(&list).await);

    let mut vm = list.lock().await;
    assert!(vm.status().is_ready());
    assert_eq!(vm.coins().len(), 30);

    vm.set_search("bit");
    vm.set_page(2);
    assert_eq!(vm.filtered().len(), 15);
    assert_eq!(vm.page_count(), 2);

    let visible: Vec<_> = vm.visible().iter().map(|c| c.id.to_string()).collect();
    let expected: Vec<_> = (20..30).step_by(2).map(|i| format!("coin-{i}")).collect();
    assert_eq!(visible, expected);

    let rows = vm.visible_rows();
    assert_eq!(rows[0].symbol, "BF20");
    assert_eq!(rows[0].price, "$ 1,234.50");
    assert_eq!(rows[0].market_cap, "$ 1,234M");

    vm.set_search("BITFORK 2");
    vm.set_page(1);
    let ids: Vec<_> = vm.visible().iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids, ["coin-2", "coin-20", "coin-22", "coin-24", "coin-26", "coin-28"]);
}

#[tokio::test]
async fn test_currency_change_refetches_list() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&list_path("usd"), market_list(10.0));
    transport.respond(&list_path("inr"), market_list(830.0));
    let client = client_with(transport.clone());

    let mut changes = client.currency().watch().changes();
    let list = Mutex::new(client.list_view_model());
    client.markets().refresh(&list).await;
    assert!(!client.markets().refresh_if_stale(&list).await);

    assert!(client.currency().set("INR").unwrap());
    assert_eq!(changes.next().await.map(|c| c.code()), Some("INR"));
    assert!(client.markets().refresh_if_stale(&list).await);

    let vm = list.lock().await;
    assert_eq!(vm.display_currency().code(), "INR");
    assert_eq!(vm.visible_rows()[0].price, "₹ 830.00");
    assert_eq!(
        transport.requests(),
        [list_path("usd"), list_path("inr")]
    );
}

#[tokio::test]
async fn test_empty_list_is_failed() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&list_path("usd"), json!([]));
    let client = client_with(transport);

    let list = Mutex::new(client.list_view_model());
    client.markets().refresh(&list).await;
    assert_eq!(list.lock().await.status().error(), Some(&LoadError::EmptyResult));

    let err = client
        .markets()
        .list(&CurrencySelection::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::EmptyResult(ref msg) if msg.contains("USD")));
}

#[tokio::test]
async fn test_follow_refetches_list_on_currency_change() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&list_path("usd"), market_list(10.0));
    transport.respond(&list_path("inr"), market_list(830.0));
    let client = client_with(transport.clone());

    let markets = client.markets();
    let list = Mutex::new(client.list_view_model());
    markets.refresh(&list).await;
    let changes = client.currency().watch().changes();

    tokio::select! {
        _ = markets.follow(&list, changes) => panic!("currency changes ended"),
        _ = async {
            client.currency().set("INR").unwrap();
            while list.lock().await.display_currency().code() != "INR" {
                tokio::task::yield_now().await;
            }
        } => {}
    }

    assert_eq!(list.lock().await.visible_rows()[0].price, "₹ 830.00");
    assert_eq!(transport.requests(), [list_path("usd"), list_path("inr")]);
}

#[tokio::test]
async fn test_list_failure_keeps_previous_coins() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&list_path("usd"), market_list(10.0));
    transport.fail(&list_path("eur"), 503);
    let client = client_with(transport);

    let list = Mutex::new(client.list_view_model());
    client.markets().refresh(&list).await;
    client.currency().set("EUR").unwrap();
    client.markets().refresh(&list).await;

    let vm = list.lock().await;
    assert!(matches!(vm.status().error(), Some(LoadError::NetworkFailure(_))));
    assert_eq!(vm.coins().len(), 30);
    assert_eq!(vm.display_currency().code(), "USD");
}

// ── Detail ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_detail_load_and_figures() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(
        "/coins/bitcoin",
        json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": { "large": "https://img.local/btc.png" },
            "description": { "en": "Bitcoin is the first decentralized currency. It launched in 2009." },
            "market_cap_rank": 1,
            "market_data": {
                "current_price": { "usd": 64123.45, "inr": 5350000, "eur": null },
                "market_cap": { "usd": 1262345678901.0 }
            }
        }),
    );
    let client = client_with(transport);

    let detail = Mutex::new(client.detail_view_model());
    assert!(client.coins().load(&detail, "bitcoin".into()).await);

    let vm = detail.lock().await;
    assert!(vm.status().is_ready());
    let coin = vm.detail().unwrap();
    assert_eq!(coin.summary(), "Bitcoin is the first decentralized currency");

    let figures = vm.figures().unwrap();
    assert_eq!(figures.rank, "1");
    assert_eq!(figures.current_price, "$ 64,123.45");
    assert_eq!(figures.market_cap, "$ 1,262,345 M");
    drop(vm);

    client.currency().set("EUR").unwrap();
    let vm = detail.lock().await;
    assert_eq!(vm.current_price(), 0.0);
    assert!(vm.needs_reload(&"bitcoin".into()));
}

#[tokio::test]
async fn test_detail_failure_is_failed_not_loading() {
    let transport = Arc::new(FakeTransport::default());
    let client = client_with(transport);

    let detail = Mutex::new(client.detail_view_model());
    client.coins().load(&detail, "no-such-coin".into()).await;

    let vm = detail.lock().await;
    assert!(!vm.status().is_loading());
    assert!(matches!(vm.status().error(), Some(LoadError::NetworkFailure(_))));
    assert!(vm.detail().is_none());
}

// ── Chart ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_chart_loads_intraday_labels() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(
        &chart_path("bitcoin", 1),
        json!({ "prices": [[JAN_1_13_05, 42000.0], [JAN_1_13_05 + 3_600_000, 42100.0]] }),
    );
    let client = client_with(transport);

    let chart = Mutex::new(client.chart_view_model());
    client
        .price_history()
        .load(&chart, "bitcoin".into(), DayRange::DAY)
        .await;

    let series = chart.lock().await.chart().unwrap();
    assert_eq!(series.labels, ["1:5 PM", "2:5 PM"]);
    assert_eq!(series.prices, [42000.0, 42100.0]);
    assert_eq!(series.legend, "Price (Past 1 Days) in USD");
}

#[tokio::test]
async fn test_chart_stale_day_response_lands_after_week() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&chart_path("bitcoin", 1), price_chart(JAN_1_13_05, 24, 1.0));
    transport.respond(&chart_path("bitcoin", 7), price_chart(JAN_1_13_05, 7, 7.0));
    let day_gate = transport.gate(&chart_path("bitcoin", 1));
    let client = client_with(transport.clone());

    let chart = Mutex::new(client.chart_view_model());
    let week = DayRange::new(7).unwrap();

    let history = client.price_history();
    let (day_applied, week_applied) = tokio::join!(
        history.load(&chart, "bitcoin".into(), DayRange::DAY),
        async {
            while transport.requests().is_empty() {
                tokio::task::yield_now().await;
            }
            let applied = history.load(&chart, "bitcoin".into(), week).await;
            day_gate.notify_one();
            applied
        }
    );

    assert!(!day_applied);
    assert!(week_applied);

    let vm = chart.lock().await;
    assert_eq!(vm.days(), week);
    assert_eq!(vm.points().len(), 7);
    let series = vm.chart().unwrap();
    assert_eq!(series.labels.len(), series.prices.len());
    assert_eq!(series.labels[0], "1/1/2024");
    assert!(series.prices.iter().all(|p| *p == 7.0));
    assert_eq!(series.legend, "Price (Past 7 Days) in USD");
}

#[tokio::test]
async fn test_chart_malformed_body_fails() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond(&chart_path("bitcoin", 30), json!({ "prices": "nope" }));
    let client = client_with(transport);

    let chart = Mutex::new(client.chart_view_model());
    client
        .price_history()
        .load(&chart, "bitcoin".into(), DayRange::MONTH)
        .await;

    let vm = chart.lock().await;
    assert!(matches!(vm.status().error(), Some(LoadError::Malformed(_))));
    assert!(vm.chart().is_none());
}

#[tokio::test]
async fn test_follow_reloads_chart_and_detail_in_new_currency() {
    let transport = Arc::new(FakeTransport::default());
    let week = DayRange::new(7).unwrap();
    transport.respond(&chart_path("bitcoin", 7), price_chart(JAN_1_13_05, 7, 1.0));
    transport.respond(&chart_path_in("bitcoin", 7, "eur"), price_chart(JAN_1_13_05, 7, 0.9));
    transport.respond(
        "/coins/bitcoin",
        json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "market_data": { "current_price": { "usd": 100.0, "eur": 90.0 } }
        }),
    );
    let client = client_with(transport.clone());

    let history = client.price_history();
    let coins = client.coins();
    let chart = Mutex::new(client.chart_view_model());
    let detail = Mutex::new(client.detail_view_model());
    let idle = Mutex::new(client.detail_view_model());
    history.load(&chart, "bitcoin".into(), week).await;
    coins.load(&detail, "bitcoin".into()).await;

    let followers = async {
        tokio::join!(
            history.follow(&chart, client.currency().watch().changes()),
            coins.follow(&detail, client.currency().watch().changes()),
            coins.follow(&idle, client.currency().watch().changes()),
        )
    };
    tokio::select! {
        _ = followers => panic!("currency changes ended"),
        _ = async {
            client.currency().set("EUR").unwrap();
            loop {
                let chart_done = chart
                    .lock()
                    .await
                    .chart()
                    .is_some_and(|s| s.legend == "Price (Past 7 Days) in EUR");
                let detail_done = {
                    let vm = detail.lock().await;
                    !vm.needs_reload(&"bitcoin".into()) && vm.status().is_ready()
                };
                if chart_done && detail_done {
                    break;
                }
                tokio::task::yield_now().await;
            }
        } => {}
    }

    assert!(chart.lock().await.chart().unwrap().prices.iter().all(|p| *p == 0.9));
    assert_eq!(detail.lock().await.current_price(), 90.0);
    assert!(idle.lock().await.detail().is_none());
    let requests = transport.requests();
    assert!(requests.contains(&chart_path_in("bitcoin", 7, "eur")));
    assert_eq!(requests.iter().filter(|r| *r == "/coins/bitcoin").count(), 2);
}

// ── Currency stream ──────────────────────────────────────────────────────────

#[test]
fn test_changes_stream_is_pending_until_set() {
    use tokio_test::{assert_pending, assert_ready_eq};

    let ctx = CurrencyContext::default();
    let mut changes = tokio_test::task::spawn(ctx.watch().changes());
    assert_pending!(changes.poll_next());

    ctx.set("GBP").unwrap();
    assert!(changes.is_woken());
    assert_ready_eq!(changes.poll_next(), Some(CurrencySelection::new("gbp").unwrap()));

    assert!(!ctx.set("GBP").unwrap());
    assert_pending!(changes.poll_next());
}
