use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use uuid::Uuid;
use crate::actions::ActionOutcome;
use crate::models::InvoiceForm;
use crate::services::INVOICES_PATH;
use crate::state::AppState;

// Failed actions go back to the form as JSON; successful ones move the browser on.
fn outcome_response(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Navigate(path) => Redirect::to(path).into_response(),
        // Re-requesting the list serves the freshly revalidated view.
        ActionOutcome::Refreshed => Redirect::to(INVOICES_PATH).into_response(),
        ActionOutcome::Failed(state) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response()
        }
    }
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    outcome_response(state.actions.create(&form).await)
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    outcome_response(state.actions.update(id, &form).await)
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    outcome_response(state.actions.delete(id).await)
}
