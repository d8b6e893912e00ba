pub mod customer;
pub mod employee;
pub mod ticket;

pub use self::{customer::Customer, employee::Employee, ticket::Ticket};
