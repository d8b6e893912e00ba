use serde::{Deserialize, Serialize};

use crate::{api, store};

pub use crate::store::employee::Id;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub specialty: String,
}

impl From<store::Employee> for Employee {
    fn from(employee: store::Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            specialty: employee.specialty,
        }
    }
}

/// Employee with the tickets assigned to it attached.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detailed {
    pub id: Id,
    pub name: String,
    pub specialty: String,
    pub service_tickets: Vec<api::Ticket>,
}

impl Detailed {
    pub fn new(
        employee: store::Employee,
        tickets: Vec<store::ServiceTicket>,
    ) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            specialty: employee.specialty,
            service_tickets: tickets.into_iter().map(Into::into).collect(),
        }
    }
}
