//! End-to-end scenarios against an in-memory fake of the partner API.
//!
//! The fake keeps prices, hidden offers, and outlets in shared state so a
//! write followed by a read sees its own effect, as on the real platform.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};
use ymarket::{
    Currency, HiddenOffer, HiddenOffersQuery, MarketClient, Offer, OfferPricesQuery,
    OfferToUnhide, PointOfSale, PointsOfSaleQuery, Price,
};

const CAMPAIGN: i64 = 21_000_001;
const FEED: i64 = 12345;

#[derive(Default)]
struct MarketState {
    /// Offer id -> priced offer as served back.
    prices: BTreeMap<String, Value>,
    /// (feed id, offer id) -> hidden offer.
    hidden: BTreeMap<(i64, String), Value>,
    outlets: BTreeMap<i64, Value>,
    next_outlet_id: i64,
}

#[derive(Clone, Copy)]
enum Route {
    SetPrices,
    GetPrices,
    Hide,
    Unhide,
    ListHidden,
    CreateOutlet,
    ListOutlets,
    DeleteOutlet,
}

struct FakeMarket {
    state: Arc<Mutex<MarketState>>,
    route: Route,
}

fn ok(extra: Value) -> ResponseTemplate {
    let mut body = json!({ "status": "OK" });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }
    ResponseTemplate::new(200).set_body_json(body)
}

fn hidden_key(entry: &Value) -> (i64, String) {
    (
        entry["feedId"].as_i64().unwrap_or_default(),
        entry["offerId"].as_str().unwrap_or_default().to_owned(),
    )
}

impl Respond for FakeMarket {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let mut state = self.state.lock().unwrap();

        match self.route {
            Route::SetPrices => {
                for offer in body["offers"].as_array().into_iter().flatten() {
                    let id = offer["id"].as_str().unwrap_or_default().to_owned();
                    if offer["delete"].as_bool().unwrap_or(false) {
                        state.prices.remove(&id);
                    } else {
                        let mut priced = offer.clone();
                        if let Some(fields) = priced.as_object_mut() {
                            fields.remove("delete");
                            fields.insert("updatedAt".to_owned(), json!("2024-03-01T12:00:00+03:00"));
                        }
                        state.prices.insert(id, priced);
                    }
                }
                ok(json!({}))
            }
            Route::GetPrices => {
                let offers: Vec<&Value> = state.prices.values().collect();
                ok(json!({ "result": { "offers": offers, "total": offers.len() } }))
            }
            Route::Hide => {
                for entry in body["hiddenOffers"].as_array().into_iter().flatten() {
                    state.hidden.insert(hidden_key(entry), entry.clone());
                }
                ok(json!({}))
            }
            Route::Unhide => {
                for entry in body["hiddenOffers"].as_array().into_iter().flatten() {
                    state.hidden.remove(&hidden_key(entry));
                }
                ok(json!({}))
            }
            Route::ListHidden => {
                let hidden: Vec<&Value> = state.hidden.values().collect();
                ok(json!({
                    "result": { "hiddenOffers": hidden, "total": hidden.len(), "paging": {} }
                }))
            }
            Route::CreateOutlet => {
                state.next_outlet_id += 1;
                let id = state.next_outlet_id;
                let mut outlet = body;
                outlet["id"] = json!(id);
                state.outlets.insert(id, outlet);
                ok(json!({ "result": { "id": id } }))
            }
            Route::ListOutlets => {
                let outlets: Vec<&Value> = state.outlets.values().collect();
                ok(json!({ "outlets": outlets, "paging": {}, "pager": { "total": outlets.len() } }))
            }
            Route::DeleteOutlet => {
                let id = request
                    .url
                    .path_segments()
                    .and_then(Iterator::last)
                    .and_then(|segment| segment.strip_suffix(".json"))
                    .and_then(|id| id.parse::<i64>().ok());
                match id.and_then(|id| state.outlets.remove(&id)) {
                    Some(_) => ok(json!({})),
                    None => ResponseTemplate::new(200).set_body_json(json!({
                        "status": "ERROR",
                        "errors": [{ "code": "NOT_FOUND", "message": "outlet not found" }]
                    })),
                }
            }
        }
    }
}

/// Starts a fake platform with every route wired to one shared state.
async fn start_fake_market() -> MockServer {
    let server = MockServer::start().await;
    let state = Arc::new(Mutex::new(MarketState {
        next_outlet_id: 419_000,
        ..MarketState::default()
    }));
    let base = format!("/v2/campaigns/{CAMPAIGN}");

    let routes = [
        ("POST", format!("{base}/offer-prices/updates.json"), Route::SetPrices),
        ("GET", format!("{base}/offer-prices.json"), Route::GetPrices),
        ("POST", format!("{base}/hidden-offers.json"), Route::Hide),
        ("DELETE", format!("{base}/hidden-offers.json"), Route::Unhide),
        ("GET", format!("{base}/hidden-offers.json"), Route::ListHidden),
        ("POST", format!("{base}/outlets.json"), Route::CreateOutlet),
        ("GET", format!("{base}/outlets.json"), Route::ListOutlets),
    ];
    for (verb, route_path, route) in routes {
        Mock::given(method(verb))
            .and(path(route_path))
            .respond_with(FakeMarket {
                state: Arc::clone(&state),
                route,
            })
            .mount(&server)
            .await;
    }

    Mock::given(method("DELETE"))
        .and(path_regex(format!(r"^{base}/outlets/\d+\.json$")))
        .respond_with(FakeMarket {
            state: Arc::clone(&state),
            route: Route::DeleteOutlet,
        })
        .mount(&server)
        .await;

    server
}

fn test_client(base_url: &str) -> MarketClient {
    MarketClient::builder()
        .oauth("test-token", "test-client")
        .api_endpoint(base_url)
        .build()
        .expect("client construction should not fail")
}

fn outlet_named(name: &str) -> PointOfSale {
    serde_json::from_value(json!({
        "name": name,
        "type": "MIXED",
        "visibility": "HIDDEN",
        "address": { "regionId": 213, "street": "Tverskaya", "number": "7" },
        "phones": ["+7 (495) 000-00-00"],
        "workingSchedule": {
            "scheduleItems": [
                { "startDay": "MONDAY", "endDay": "SUNDAY", "startTime": "10:00", "endTime": "22:00" }
            ]
        }
    }))
    .expect("outlet should decode")
}

#[tokio::test]
async fn set_then_get_price_returns_exactly_that_offer() {
    let server = start_fake_market().await;
    let client = test_client(&server.uri());

    let price = Price {
        currency_id: Currency::Rur,
        value: 777.0,
        discount_base: Some(899.0),
    };
    client
        .set_offer_prices(CAMPAIGN, &[Offer::with_price(FEED, "SKU-777", price)])
        .await
        .expect("set prices should succeed");

    let offers = client
        .get_offer_prices(CAMPAIGN, &OfferPricesQuery::new().limit_offset(100, 0))
        .await
        .expect("get prices should succeed");
    let matching: Vec<_> = offers.iter().filter(|o| o.id == "SKU-777").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].feed.id, FEED);
    assert_eq!(matching[0].price.currency_id, Currency::Rur);
    assert!((matching[0].price.value - 777.0).abs() < f64::EPSILON);
    assert_eq!(matching[0].price.discount_base, Some(899.0));

    client
        .set_offer_prices(CAMPAIGN, &[Offer::removal(FEED, "SKU-777")])
        .await
        .expect("price removal should succeed");
    let offers = client
        .get_offer_prices(CAMPAIGN, &OfferPricesQuery::new())
        .await
        .expect("get prices should succeed");
    assert!(offers.iter().all(|o| o.id != "SKU-777"));
}

#[tokio::test]
async fn hide_then_unhide_moves_total_by_batch_size() {
    let server = start_fake_market().await;
    let client = test_client(&server.uri());
    let query = HiddenOffersQuery::new().page(1, 100);

    let before = client
        .get_hidden_offers(CAMPAIGN, &query)
        .await
        .expect("list hidden offers")
        .total;

    let batch: Vec<HiddenOffer> = ["SKU-1", "SKU-2", "SKU-3"]
        .into_iter()
        .map(|id| HiddenOffer::new(FEED, id).comment("seasonal").ttl_in_hours(24))
        .collect();
    client
        .hide_offers(CAMPAIGN, &batch)
        .await
        .expect("hide should succeed");

    let hidden = client
        .get_hidden_offers(CAMPAIGN, &query)
        .await
        .expect("list hidden offers");
    assert_eq!(hidden.total, before + 3);
    assert!(hidden
        .hidden_offers
        .iter()
        .any(|o| o.offer_id == "SKU-2" && o.comment.as_deref() == Some("seasonal")));

    let to_unhide: Vec<OfferToUnhide> = batch.iter().map(OfferToUnhide::from).collect();
    client
        .unhide_offers(CAMPAIGN, &to_unhide)
        .await
        .expect("unhide should succeed");

    let after = client
        .get_hidden_offers(CAMPAIGN, &query)
        .await
        .expect("list hidden offers")
        .total;
    assert_eq!(after, before);
}

#[tokio::test]
async fn create_then_delete_outlet_restores_listing() {
    let server = start_fake_market().await;
    let client = test_client(&server.uri());
    let query = PointsOfSaleQuery::new();

    let before = client
        .list_points_of_sale(CAMPAIGN, &query)
        .await
        .expect("list outlets")
        .outlets
        .len();

    let created = client
        .create_point_of_sale(CAMPAIGN, &outlet_named("Tverskaya pickup"))
        .await
        .expect("create should succeed");

    let page = client
        .list_points_of_sale(CAMPAIGN, &query)
        .await
        .expect("list outlets");
    assert_eq!(page.outlets.len(), before + 1);
    let listed = page
        .outlets
        .iter()
        .find(|o| o.id == Some(created.id))
        .expect("created outlet should be listed");
    assert_eq!(listed.name, "Tverskaya pickup");

    client
        .delete_point_of_sale(CAMPAIGN, created.id)
        .await
        .expect("delete should succeed");

    let after = client
        .list_points_of_sale(CAMPAIGN, &query)
        .await
        .expect("list outlets")
        .outlets
        .len();
    assert_eq!(after, before);

    let err = client
        .delete_point_of_sale(CAMPAIGN, created.id)
        .await
        .unwrap_err();
    assert_eq!(err.api_errors().map(|e| e[0].code.as_str()), Some("NOT_FOUND"));
}
