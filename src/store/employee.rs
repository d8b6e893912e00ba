use std::cmp::Reverse;

use derive_more::Display;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use time::Date;

use super::{next_id, ServiceTicket, Store};

#[derive(Clone, Debug)]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub specialty: String,
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
pub struct Id(u32);

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Store {
    pub async fn employees(&self) -> Vec<Employee> {
        self.0.read().await.employees.clone()
    }

    pub async fn employee(&self, id: Id) -> Option<Employee> {
        self.0
            .read()
            .await
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    pub async fn employee_with_tickets(
        &self,
        id: Id,
    ) -> Option<(Employee, Vec<ServiceTicket>)> {
        let data = self.0.read().await;
        let employee = data.employees.iter().find(|e| e.id == id)?.clone();
        let tickets = data
            .tickets
            .iter()
            .filter(|t| t.employee_id == Some(id))
            .cloned()
            .collect();
        Some((employee, tickets))
    }

    pub async fn add_employee(
        &self,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Employee {
        let mut data = self.0.write().await;
        let employee = Employee {
            id: Id(next_id(data.employees.iter().map(|e| e.id.0))),
            name: name.into(),
            specialty: specialty.into(),
        };
        data.employees.push(employee.clone());
        employee
    }

    /// Employees whose id never appears on any completed ticket.
    ///
    /// NOTE: open tickets are deliberately not considered, so this names
    /// employees "available" by absence from finished work, not absence
    /// from the current workload.
    pub async fn available_employees(&self) -> Vec<Employee> {
        let data = self.0.read().await;
        let on_completed = data
            .tickets
            .iter()
            .filter(|t| t.date_completed.is_some())
            .filter_map(|t| t.employee_id)
            .unique()
            .collect::<Vec<_>>();
        data.employees
            .iter()
            .filter(|e| !on_completed.contains(&e.id))
            .cloned()
            .collect()
    }

    /// The employee with the most tickets completed in the calendar month
    /// before `today`, matched by month number only. Ties keep collection
    /// order; `None` only when there are no employees at all.
    pub async fn employee_of_the_month(
        &self,
        today: Date,
    ) -> Option<Employee> {
        let data = self.0.read().await;
        let month = today.month().previous();
        data.employees
            .iter()
            .min_by_key(|e| {
                Reverse(
                    data.tickets
                        .iter()
                        .filter(|t| {
                            t.employee_id == Some(e.id)
                                && t.date_completed
                                    .is_some_and(|d| d.month() == month)
                        })
                        .count(),
                )
            })
            .cloned()
    }
}
