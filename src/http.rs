use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use time::OffsetDateTime;

use crate::{api, store::Store};

pub type SharedStore = Arc<Store>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/servicetickets", get(list_tickets).post(create_ticket))
        .route("/api/servicetickets/emergencies", get(emergencies))
        .route("/api/servicetickets/unassigned", get(unassigned_tickets))
        .route(
            "/api/servicetickets/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route("/api/servicetickets/:id/complete", post(complete_ticket))
        .route("/api/servicetickets/:id/assign", patch(assign_ticket))
        .route("/api/ticketreview", get(ticket_review))
        .route("/api/prioritizedtickets", get(prioritized_tickets))
        .route("/api/employeeofthemonth", get(employee_of_the_month))
        .route("/api/employees", get(list_employees))
        .route("/api/employees/available", get(available_employees))
        .route("/api/employees/:id", get(get_employee))
        .route("/api/customers", get(list_customers))
        .route("/api/customers/inactive", get(inactive_customers))
        .route("/api/customers/:id", get(get_customer))
        .with_state(store)
}

async fn list_tickets(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Ticket>> {
    Json(store.tickets().await.into_iter().map(Into::into).collect())
}

async fn get_ticket(
    State(store): State<SharedStore>,
    Path(id): Path<api::ticket::Id>,
) -> Result<Json<api::ticket::Detailed>, GetTicketError> {
    use GetTicketError as E;

    let related = store
        .ticket_with_relations(id)
        .await
        .ok_or(E::TicketNotFound)?;

    Ok(Json(related.into()))
}

#[derive(Debug)]
pub enum GetTicketError {
    TicketNotFound,
}

impl IntoResponse for GetTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound => StatusCode::NOT_FOUND,
        }
        .into_response()
    }
}

async fn create_ticket(
    State(store): State<SharedStore>,
    Json(input): Json<api::ticket::Create>,
) -> Result<Json<api::Ticket>, CreateTicketError> {
    use CreateTicketError as E;

    store
        .customer(input.customer_id)
        .await
        .ok_or(E::CustomerNotFound(input.customer_id))?;

    let ticket = store.add_ticket(input.into()).await;

    Ok(Json(ticket.into()))
}

#[derive(Debug)]
pub enum CreateTicketError {
    CustomerNotFound(api::customer::Id),
}

impl IntoResponse for CreateTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::CustomerNotFound(id) => (
                StatusCode::BAD_REQUEST,
                format!("Customer with ID {id} does not exist."),
            ),
        }
        .into_response()
    }
}

async fn update_ticket(
    State(store): State<SharedStore>,
    Path(id): Path<api::ticket::Id>,
    Json(ticket): Json<api::Ticket>,
) -> Result<(), UpdateTicketError> {
    use UpdateTicketError as E;

    store.ticket(id).await.ok_or(E::TicketNotFound)?;
    if ticket.id != id {
        return Err(E::IdMismatch);
    }

    store.replace_ticket(ticket.into()).await;

    Ok(())
}

#[derive(Debug)]
pub enum UpdateTicketError {
    IdMismatch,
    TicketNotFound,
}

impl IntoResponse for UpdateTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::IdMismatch => StatusCode::BAD_REQUEST,
            Self::TicketNotFound => StatusCode::NOT_FOUND,
        }
        .into_response()
    }
}

async fn delete_ticket(
    State(store): State<SharedStore>,
    Path(id): Path<api::ticket::Id>,
) {
    if !store.remove_ticket(id).await {
        tracing::debug!("delete requested for unknown service ticket {id}");
    }
}

async fn complete_ticket(
    State(store): State<SharedStore>,
    Path(id): Path<api::ticket::Id>,
) {
    let today = OffsetDateTime::now_utc().date();
    if !store.complete_ticket(id, today).await {
        tracing::debug!("complete requested for unknown service ticket {id}");
    }
}

async fn assign_ticket(
    State(store): State<SharedStore>,
    Path(id): Path<api::ticket::Id>,
    Json(api::ticket::Assign { employee_id }): Json<api::ticket::Assign>,
) -> Result<String, AssignTicketError> {
    use AssignTicketError as E;

    if !store.assign_ticket(id, employee_id).await {
        return Err(E::TicketNotFound(id));
    }

    Ok(format!(
        "Employee {employee_id} assigned to service ticket {id} successfully."
    ))
}

#[derive(Debug)]
pub enum AssignTicketError {
    TicketNotFound(api::ticket::Id),
}

impl IntoResponse for AssignTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Service ticket with ID {id} not found."),
            ),
        }
        .into_response()
    }
}

async fn emergencies(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Ticket>> {
    Json(
        store
            .emergencies()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

async fn unassigned_tickets(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Ticket>> {
    Json(
        store
            .unassigned_tickets()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

async fn ticket_review(
    State(store): State<SharedStore>,
) -> Json<Vec<api::ticket::Detailed>> {
    Json(
        store
            .ticket_review()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

async fn prioritized_tickets(
    State(store): State<SharedStore>,
) -> Json<Vec<api::ticket::Detailed>> {
    Json(
        store
            .prioritized_tickets()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

async fn employee_of_the_month(
    State(store): State<SharedStore>,
) -> Json<Option<api::Employee>> {
    let today = OffsetDateTime::now_utc().date();
    Json(store.employee_of_the_month(today).await.map(Into::into))
}

async fn list_employees(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Employee>> {
    Json(store.employees().await.into_iter().map(Into::into).collect())
}

async fn get_employee(
    State(store): State<SharedStore>,
    Path(id): Path<api::employee::Id>,
) -> Result<Json<api::employee::Detailed>, GetEmployeeError> {
    use GetEmployeeError as E;

    let (employee, tickets) = store
        .employee_with_tickets(id)
        .await
        .ok_or(E::EmployeeNotFound)?;

    Ok(Json(api::employee::Detailed::new(employee, tickets)))
}

#[derive(Debug)]
pub enum GetEmployeeError {
    EmployeeNotFound,
}

impl IntoResponse for GetEmployeeError {
    fn into_response(self) -> Response {
        match self {
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,
        }
        .into_response()
    }
}

async fn available_employees(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Employee>> {
    Json(
        store
            .available_employees()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}

async fn list_customers(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Customer>> {
    Json(store.customers().await.into_iter().map(Into::into).collect())
}

async fn get_customer(
    State(store): State<SharedStore>,
    Path(id): Path<api::customer::Id>,
) -> Result<Json<api::customer::Detailed>, GetCustomerError> {
    use GetCustomerError as E;

    let (customer, tickets) = store
        .customer_with_tickets(id)
        .await
        .ok_or(E::CustomerNotFound)?;

    Ok(Json(api::customer::Detailed::new(customer, tickets)))
}

#[derive(Debug)]
pub enum GetCustomerError {
    CustomerNotFound,
}

impl IntoResponse for GetCustomerError {
    fn into_response(self) -> Response {
        match self {
            Self::CustomerNotFound => StatusCode::NOT_FOUND,
        }
        .into_response()
    }
}

async fn inactive_customers(
    State(store): State<SharedStore>,
) -> Json<Vec<api::Customer>> {
    let today = OffsetDateTime::now_utc().date();
    Json(
        store
            .inactive_customers(today)
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}
