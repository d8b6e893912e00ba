use std::sync::Arc;

use honeyraes_api::{api, http, store::Store};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// In-process instance of the API bound to an ephemeral port. Each test
/// spawns its own, so stores never conflict across tests.
pub struct TestApp {
    base_url: String,
    client: reqwest::Client,
    pub store: Arc<Store>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(Store::new());
        let app = http::router(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind an ephemeral port");
        let addr = listener.local_addr().expect("failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("server stopped unexpectedly");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            store,
        }
    }

    /// Spawns an app with the demo customers and employees already present.
    pub async fn spawn_seeded() -> Self {
        let app = Self::spawn().await;
        app.store.add_customer("Taylor", "123 River Dr").await;
        app.store.add_customer("Ross", "123 Lake Dr").await;
        app.store.add_customer("Derek", "123 City Dr").await;
        app.store.add_employee("Andrew", "Orthopedics").await;
        app.store.add_employee("Odie", "Coding").await;
        app
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, StatusCode> {
        Ok(self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("failed to send a request")
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))?
            .json::<T>()
            .await
            .expect("failed to get a response"))
    }

    pub async fn get_tickets(&self) -> Vec<api::Ticket> {
        self.get_json("/api/servicetickets")
            .await
            .expect("failed to list tickets")
    }

    pub async fn get_ticket(
        &self,
        id: u32,
    ) -> Result<api::ticket::Detailed, StatusCode> {
        self.get_json(&format!("/api/servicetickets/{id}")).await
    }

    pub async fn add_ticket(
        &self,
        body: &Value,
    ) -> Result<api::Ticket, StatusCode> {
        Ok(self
            .client
            .post(format!("{}/api/servicetickets", self.base_url))
            .json(body)
            .send()
            .await
            .expect("failed to send a request")
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))?
            .json::<api::Ticket>()
            .await
            .expect("failed to get a response"))
    }

    pub async fn update_ticket(&self, id: u32, body: &Value) -> StatusCode {
        self.client
            .put(format!("{}/api/servicetickets/{id}", self.base_url))
            .json(body)
            .send()
            .await
            .expect("failed to send a request")
            .status()
    }

    pub async fn delete_ticket(&self, id: u32) -> StatusCode {
        self.client
            .delete(format!("{}/api/servicetickets/{id}", self.base_url))
            .send()
            .await
            .expect("failed to send a request")
            .status()
    }

    pub async fn complete_ticket(&self, id: u32) -> StatusCode {
        self.client
            .post(format!(
                "{}/api/servicetickets/{id}/complete",
                self.base_url
            ))
            .send()
            .await
            .expect("failed to send a request")
            .status()
    }

    pub async fn assign_ticket(
        &self,
        id: u32,
        employee_id: u32,
    ) -> Result<String, StatusCode> {
        Ok(self
            .client
            .patch(format!("{}/api/servicetickets/{id}/assign", self.base_url))
            .json(&serde_json::json!({ "employeeId": employee_id }))
            .send()
            .await
            .expect("failed to send a request")
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))?
            .text()
            .await
            .expect("failed to get a response"))
    }

    pub async fn get_customer(
        &self,
        id: u32,
    ) -> Result<api::customer::Detailed, StatusCode> {
        self.get_json(&format!("/api/customers/{id}")).await
    }

    pub async fn get_employee(
        &self,
        id: u32,
    ) -> Result<api::employee::Detailed, StatusCode> {
        self.get_json(&format!("/api/employees/{id}")).await
    }
}
