use std::{error::Error, sync::Arc};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use time::macros::date;
use tokio::{fs, net};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use honeyraes_api::{
    http,
    store::{NewTicket, Store},
    Config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fs::read_to_string("config.toml").await?;
    let config = toml::from_str::<Config>(&config)?;

    let store = Arc::new(Store::new());
    seed(&store).await;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE]);
    for origin in &config.http.cors.allowed_origins {
        cors = cors.allow_origin(origin.parse::<HeaderValue>()?);
    }

    let app = http::router(store).layer(cors);

    let listener = net::TcpListener::bind(config.http.server.addr).await?;
    tracing::info!("listening on {}", config.http.server.addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Demo dataset loaded at startup. Customers and employees have no
/// creation endpoints, so everything the API serves references these.
async fn seed(store: &Store) {
    let taylor = store.add_customer("Taylor", "123 River Dr").await;
    let ross = store.add_customer("Ross", "123 Lake Dr").await;
    let derek = store.add_customer("Derek", "123 City Dr").await;

    let andrew = store.add_employee("Andrew", "Orthopedics").await;
    let odie = store.add_employee("Odie", "Coding").await;

    store
        .add_ticket(NewTicket {
            customer_id: taylor.id,
            employee_id: None,
            description: "Broken Leg".into(),
            emergency: false,
            date_completed: Some(date!(2024 - 07 - 01)),
        })
        .await;
    store
        .add_ticket(NewTicket {
            customer_id: ross.id,
            employee_id: Some(odie.id),
            description: "Broken Code".into(),
            emergency: true,
            date_completed: None,
        })
        .await;
    store
        .add_ticket(NewTicket {
            customer_id: derek.id,
            employee_id: None,
            description: "Neck Pain".into(),
            emergency: false,
            date_completed: Some(date!(2023 - 07 - 03)),
        })
        .await;
    store
        .add_ticket(NewTicket {
            customer_id: taylor.id,
            employee_id: Some(odie.id),
            description: "API Calls".into(),
            emergency: false,
            date_completed: None,
        })
        .await;
    store
        .add_ticket(NewTicket {
            customer_id: ross.id,
            employee_id: Some(andrew.id),
            description: "Blah Blah Blah".into(),
            emergency: false,
            date_completed: Some(date!(2024 - 07 - 02)),
        })
        .await;
}
