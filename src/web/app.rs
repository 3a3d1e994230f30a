use actix_web::{web, App, HttpResponse, HttpServer, Result};
use actix_web::middleware::Logger;
use log::info;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

use crate::domain::{Bid, BidController, BidObserver};
use crate::money::Amount;
use super::types::{ApiError, AppState, BidItem, PlaceBidRequest};

/// Display log of accepted bids, one rendered line per bid.
/// Subscribed as an observer so every acceptance appends exactly once.
#[derive(Clone, Default)]
pub struct BidLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BidLog {
    pub fn new() -> Self {
        BidLog::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl BidObserver for BidLog {
    fn on_bid_placed(&self, bid: &Bid) {
        self.lines.lock().unwrap().push(bid.to_string());
    }
}

// Initialize application state with the display log subscribed
pub fn init_app_state() -> (AppState, BidLog) {
    let bid_log = BidLog::new();
    let mut controller = BidController::new();
    controller.add_observer(Box::new(bid_log.clone()));
    (Arc::new(Mutex::new(controller)), bid_log)
}

// Get all accepted bids
async fn get_bids(data: web::Data<AppState>) -> Result<HttpResponse> {
    let controller = data.lock().unwrap();
    let bids: Vec<BidItem> = controller.all_bids().iter().map(BidItem::from).collect();

    Ok(HttpResponse::Ok().json(bids))
}

// Get the display log
async fn get_bid_log(log: web::Data<BidLog>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(log.lines()))
}

// Place a bid
async fn place_bid(
    bid_req: web::Json<PlaceBidRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    // The amount arrives as raw form text; parse failures stop here and
    // never reach the controller.
    let amount = match Amount::from_str(&bid_req.amount) {
        Ok(amount) => amount,
        Err(_) => {
            let error = ApiError {
                message: "Please enter a valid amount.".to_string(),
            };
            return Ok(HttpResponse::BadRequest().json(error));
        }
    };

    let now = OffsetDateTime::now_utc();
    let mut controller = data.lock().unwrap();

    match controller.place_bid(&bid_req.bidder, amount, now) {
        Ok(bid) => Ok(HttpResponse::Ok().json(BidItem::from(&bid))),
        Err(err) => {
            let error = ApiError {
                message: format!("{}", err),
            };
            Ok(HttpResponse::BadRequest().json(error))
        }
    }
}

// Configure routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/bids", web::get().to(get_bids))
            .route("/bids", web::post().to(place_bid))
            .route("/bid-log", web::get().to(get_bid_log))
    );
}

// Main application
pub async fn run_app(port: u16) -> std::io::Result<()> {
    std::env::set_var("RUST_LOG", "actix_web=info");
    env_logger::init();

    let (app_state, bid_log) = init_app_state();

    info!("Starting server on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(bid_log.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
