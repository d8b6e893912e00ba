pub mod customer;
pub mod employee;
pub mod ticket;

use tokio::sync::RwLock;

pub use self::{
    customer::Customer,
    employee::Employee,
    ticket::{NewTicket, ServiceTicket},
};

/// In-memory store for the three shop collections.
///
/// A single lock guards all of them, so id assignment and every other
/// mutation is serialized.
#[derive(Default)]
pub struct Store(RwLock<Collections>);

#[derive(Default)]
struct Collections {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    tickets: Vec<ServiceTicket>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
