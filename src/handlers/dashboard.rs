use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use tower_sessions::Session;
use uuid::Uuid;
use crate::errors::{AppError, AppResult};
use crate::middleware::USER_SESSION_KEY;
use crate::models::{Invoice, InvoiceStatus};
use crate::render::{escape_html, format_cents, load_template};
use crate::services::INVOICES_PATH;
use crate::state::AppState;

pub async fn serve_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    let email = session
        .get::<String>(USER_SESSION_KEY)
        .await
        .map_err(|e| AppError::Auth(format!("Session error: {}", e)))?
        .ok_or_else(|| AppError::Auth("Not authenticated".into()))?;

    tracing::info!("Accessing dashboard for {}", email);

    let invoices = state.invoices.list_invoices().await.map_err(|e| {
        tracing::error!("Failed to fetch invoices: {}", e);
        AppError::Store(e)
    })?;

    let html = load_template("dashboard.html")
        .await?
        .replace("{{email}}", &escape_html(&email))
        .replace("{{invoice_count}}", &invoices.len().to_string())
        .replace("{{pending_total}}", &format_cents(status_total(&invoices, InvoiceStatus::Pending)))
        .replace("{{paid_total}}", &format_cents(status_total(&invoices, InvoiceStatus::Paid)));

    Ok(Html(html).into_response())
}

// Summed wide: each amount fits i64 cents, their total may not.
fn status_total(invoices: &[Invoice], status: InvoiceStatus) -> i128 {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .map(|i| i128::from(i.amount))
        .sum()
}

/// The invoice list, served from the view cache when a rendered copy exists.
pub async fn serve_invoice_list(State(state): State<AppState>) -> AppResult<Response> {
    // Read before the store query; a write revalidating meanwhile orphans our page.
    let generation = match state.views.generation(INVOICES_PATH).await {
        Ok(generation) => Some(generation),
        Err(e) => {
            tracing::warn!("View cache read failed, rendering from store: {}", e);
            None
        }
    };

    if let Some(generation) = generation {
        match state.views.get(INVOICES_PATH, generation).await {
            Ok(Some(html)) => {
                tracing::debug!("Serving cached {} (generation {})", INVOICES_PATH, generation);
                return Ok(Html(html).into_response());
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("View cache read failed, rendering from store: {}", e),
        }
    }

    let invoices = state.invoices.list_invoices().await.map_err(|e| {
        tracing::error!("Failed to fetch invoices: {}", e);
        AppError::Store(e)
    })?;

    let rows = invoices.iter().map(invoice_row).collect::<Vec<_>>().join("\n");
    let html = load_template("invoices.html")
        .await?
        .replace("{{invoice_rows}}", &rows)
        .replace("{{invoice_count}}", &invoices.len().to_string());

    if let Some(generation) = generation {
        if let Err(e) = state.views.put(INVOICES_PATH, generation, &html).await {
            tracing::warn!("Failed to cache {}: {}", INVOICES_PATH, e);
        }
    }

    Ok(Html(html).into_response())
}

fn invoice_row(invoice: &Invoice) -> String {
    format!(
        r#"<tr>
                <td>{customer}</td>
                <td>${amount}</td>
                <td>{date}</td>
                <td class="status status-{status}">{status}</td>
                <td class="action-cell">
                    <a href="/dashboard/invoices/{id}/edit" class="edit-btn">Edit</a>
                    <form method="post" action="/dashboard/invoices/{id}/delete">
                        <button type="submit" class="delete-btn">Delete</button>
                    </form>
                </td>
            </tr>"#,
        customer = escape_html(&invoice.customer_id),
        amount = format_cents(invoice.amount.into()),
        date = invoice.date.format("%Y-%m-%d"),
        status = invoice.status,
        id = invoice.id,
    )
}

pub async fn serve_edit_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let invoice = state
        .invoices
        .get_invoice(id)
        .await?
        .ok_or(AppError::InvoiceNotFound(id))?;

    let selected = |status: InvoiceStatus| {
        if invoice.status == status { "checked" } else { "" }
    };

    let html = load_template("edit_invoice.html")
        .await?
        .replace("{{id}}", &invoice.id.to_string())
        .replace("{{customer_id}}", &escape_html(&invoice.customer_id))
        .replace("{{amount}}", &format_cents(invoice.amount.into()))
        .replace("{{pending_checked}}", selected(InvoiceStatus::Pending))
        .replace("{{paid_checked}}", selected(InvoiceStatus::Paid));

    Ok(Html(html).into_response())
}
