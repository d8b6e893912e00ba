use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use super::{next_id, ServiceTicket, Store};

#[derive(Clone, Debug)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub address: String,
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
pub struct Id(u32);

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Store {
    pub async fn customers(&self) -> Vec<Customer> {
        self.0.read().await.customers.clone()
    }

    pub async fn customer(&self, id: Id) -> Option<Customer> {
        self.0
            .read()
            .await
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Looks up a customer together with the tickets referencing it,
    /// in store order.
    pub async fn customer_with_tickets(
        &self,
        id: Id,
    ) -> Option<(Customer, Vec<ServiceTicket>)> {
        let data = self.0.read().await;
        let customer = data.customers.iter().find(|c| c.id == id)?.clone();
        let tickets = data
            .tickets
            .iter()
            .filter(|t| t.customer_id == id)
            .cloned()
            .collect();
        Some((customer, tickets))
    }

    pub async fn add_customer(
        &self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Customer {
        let mut data = self.0.write().await;
        let customer = Customer {
            id: Id(next_id(data.customers.iter().map(|c| c.id.0))),
            name: name.into(),
            address: address.into(),
        };
        data.customers.push(customer.clone());
        customer
    }

    /// Customers with no ticket completed within the last 365 days.
    /// A customer with no tickets at all counts as inactive.
    pub async fn inactive_customers(&self, today: Date) -> Vec<Customer> {
        let data = self.0.read().await;
        let threshold = today - Duration::days(365);
        data.customers
            .iter()
            .filter(|c| {
                !data.tickets.iter().any(|t| {
                    t.customer_id == c.id
                        && t.date_completed.is_some_and(|d| d > threshold)
                })
            })
            .cloned()
            .collect()
    }
}
