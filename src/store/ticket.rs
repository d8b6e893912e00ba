use std::cmp::Reverse;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use time::Date;

use super::{customer, employee, next_id, Collections, Customer, Employee, Store};

/// Canonical ticket record. Related customer/employee records are never
/// stored on it; responses that need them use a separate projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceTicket {
    pub id: Id,
    pub customer_id: customer::Id,
    pub employee_id: Option<employee::Id>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<Date>,
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

/// Ticket fields supplied by the caller; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewTicket {
    pub customer_id: customer::Id,
    pub employee_id: Option<employee::Id>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<Date>,
}

impl Store {
    pub async fn tickets(&self) -> Vec<ServiceTicket> {
        self.0.read().await.tickets.clone()
    }

    pub async fn ticket(&self, id: Id) -> Option<ServiceTicket> {
        self.0
            .read()
            .await
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Looks up a ticket together with its customer and, when assigned,
    /// its employee. Dangling references resolve to `None`.
    pub async fn ticket_with_relations(
        &self,
        id: Id,
    ) -> Option<(ServiceTicket, Option<Customer>, Option<Employee>)> {
        let data = self.0.read().await;
        let ticket = data.tickets.iter().find(|t| t.id == id)?.clone();
        Some(relate(&data, ticket))
    }

    pub async fn add_ticket(&self, new: NewTicket) -> ServiceTicket {
        let mut data = self.0.write().await;
        let ticket = ServiceTicket {
            id: Id(next_id(data.tickets.iter().map(|t| t.id.0))),
            customer_id: new.customer_id,
            employee_id: new.employee_id,
            description: new.description,
            emergency: new.emergency,
            date_completed: new.date_completed,
        };
        data.tickets.push(ticket.clone());
        ticket
    }

    /// Swaps the stored ticket with the same id, keeping its position.
    /// Returns `false` when no such ticket exists.
    pub async fn replace_ticket(&self, ticket: ServiceTicket) -> bool {
        let mut data = self.0.write().await;
        match data.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(slot) => {
                *slot = ticket;
                true
            }
            None => false,
        }
    }

    pub async fn remove_ticket(&self, id: Id) -> bool {
        let mut data = self.0.write().await;
        let before = data.tickets.len();
        data.tickets.retain(|t| t.id != id);
        data.tickets.len() < before
    }

    /// Sets the assignee, overwriting any existing assignment.
    /// Returns `false` when the ticket does not exist.
    pub async fn assign_ticket(
        &self,
        id: Id,
        employee_id: employee::Id,
    ) -> bool {
        let mut data = self.0.write().await;
        match data.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.employee_id = Some(employee_id);
                true
            }
            None => false,
        }
    }

    /// Stamps the completion date, re-stamping if already completed.
    /// Returns `false` when the ticket does not exist.
    pub async fn complete_ticket(&self, id: Id, date: Date) -> bool {
        let mut data = self.0.write().await;
        match data.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.date_completed = Some(date);
                true
            }
            None => false,
        }
    }

    /// Open tickets flagged as emergencies.
    pub async fn emergencies(&self) -> Vec<ServiceTicket> {
        self.0
            .read()
            .await
            .tickets
            .iter()
            .filter(|t| t.emergency && t.date_completed.is_none())
            .cloned()
            .collect()
    }

    pub async fn unassigned_tickets(&self) -> Vec<ServiceTicket> {
        self.0
            .read()
            .await
            .tickets
            .iter()
            .filter(|t| t.employee_id.is_none())
            .cloned()
            .collect()
    }

    /// Completed tickets ascending by completion date, with their
    /// customer and employee attached.
    pub async fn ticket_review(
        &self,
    ) -> Vec<(ServiceTicket, Option<Customer>, Option<Employee>)> {
        let data = self.0.read().await;
        let mut completed = data
            .tickets
            .iter()
            .filter(|t| t.date_completed.is_some())
            .cloned()
            .collect::<Vec<_>>();
        completed.sort_by_key(|t| t.date_completed);
        completed
            .into_iter()
            .map(|t| relate(&data, t))
            .collect()
    }

    /// Open tickets, emergencies first, assigned before unassigned within
    /// the same emergency tier, with their customer and employee attached.
    pub async fn prioritized_tickets(
        &self,
    ) -> Vec<(ServiceTicket, Option<Customer>, Option<Employee>)> {
        let data = self.0.read().await;
        let mut open = data
            .tickets
            .iter()
            .filter(|t| t.date_completed.is_none())
            .cloned()
            .collect::<Vec<_>>();
        open.sort_by_key(|t| (Reverse(t.emergency), t.employee_id.is_none()));
        open.into_iter().map(|t| relate(&data, t)).collect()
    }
}

fn relate(
    data: &Collections,
    ticket: ServiceTicket,
) -> (ServiceTicket, Option<Customer>, Option<Employee>) {
    let customer = data
        .customers
        .iter()
        .find(|c| c.id == ticket.customer_id)
        .cloned();
    let employee = ticket
        .employee_id
        .and_then(|id| data.employees.iter().find(|e| e.id == id).cloned());
    (ticket, customer, employee)
}
