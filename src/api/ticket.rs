use serde::{Deserialize, Serialize};
use time::Date;

use crate::{api, store};

pub use crate::store::ticket::Id;

time::serde::format_description!(completed_date, Date, "[year]-[month]-[day]");

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    pub customer_id: api::customer::Id,
    #[serde(default)]
    pub employee_id: Option<api::employee::Id>,
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, with = "completed_date::option")]
    pub date_completed: Option<Date>,
}

impl From<store::ServiceTicket> for Ticket {
    fn from(ticket: store::ServiceTicket) -> Self {
        Self {
            id: ticket.id,
            customer_id: ticket.customer_id,
            employee_id: ticket.employee_id,
            description: ticket.description,
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
        }
    }
}

impl From<Ticket> for store::ServiceTicket {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            customer_id: ticket.customer_id,
            employee_id: ticket.employee_id,
            description: ticket.description,
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
        }
    }
}

/// Ticket with its customer and employee attached for a single response.
/// The attached records carry no ticket lists, which keeps the projection
/// acyclic when serialized.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detailed {
    pub id: Id,
    pub customer_id: api::customer::Id,
    pub employee_id: Option<api::employee::Id>,
    pub description: String,
    pub emergency: bool,
    #[serde(default, with = "completed_date::option")]
    pub date_completed: Option<Date>,
    pub customer: Option<api::Customer>,
    pub employee: Option<api::Employee>,
}

impl
    From<(
        store::ServiceTicket,
        Option<store::Customer>,
        Option<store::Employee>,
    )> for Detailed
{
    fn from(
        (ticket, customer, employee): (
            store::ServiceTicket,
            Option<store::Customer>,
            Option<store::Employee>,
        ),
    ) -> Self {
        Self {
            id: ticket.id,
            customer_id: ticket.customer_id,
            employee_id: ticket.employee_id,
            description: ticket.description,
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
            customer: customer.map(Into::into),
            employee: employee.map(Into::into),
        }
    }
}

/// Creation body. Any client-supplied id is ignored by the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub customer_id: api::customer::Id,
    #[serde(default)]
    pub employee_id: Option<api::employee::Id>,
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, with = "completed_date::option")]
    pub date_completed: Option<Date>,
}

impl From<Create> for store::NewTicket {
    fn from(create: Create) -> Self {
        Self {
            customer_id: create.customer_id,
            employee_id: create.employee_id,
            description: create.description,
            emergency: create.emergency,
            date_completed: create.date_completed,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assign {
    pub employee_id: api::employee::Id,
}
