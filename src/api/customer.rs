use serde::{Deserialize, Serialize};

use crate::{api, store};

pub use crate::store::customer::Id;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub address: String,
}

impl From<store::Customer> for Customer {
    fn from(customer: store::Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            address: customer.address,
        }
    }
}

/// Customer with the tickets referencing it attached. The tickets carry no
/// customer of their own, so the projection cannot form a cycle.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detailed {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub service_tickets: Vec<api::Ticket>,
}

impl Detailed {
    pub fn new(
        customer: store::Customer,
        tickets: Vec<store::ServiceTicket>,
    ) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            address: customer.address,
            service_tickets: tickets.into_iter().map(Into::into).collect(),
        }
    }
}
