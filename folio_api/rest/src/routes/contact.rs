use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use folio_models::{contact::SubmissionResult, email_address::EmailAddress};
use tracing::warn;

use crate::extractors::contact_form::{ContactFormBody, ContactFormRejection};

struct ContactState<S> {
    service: Arc<S>,
    /// Offered to visitors whose request could not be read.
    fallback: Arc<EmailAddress>,
}

impl<S> Clone for ContactState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

pub fn router(service: Arc<impl ContactFeatureService>, fallback: EmailAddress) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(ContactState {
            service,
            fallback: fallback.into(),
        })
}

async fn submit<S: ContactFeatureService>(
    State(state): State<ContactState<S>>,
    body: Result<ContactFormBody, ContactFormRejection>,
) -> Response {
    let form = match body {
        Ok(ContactFormBody(form)) => form,
        Err(rejection) => {
            warn!("Rejected contact request: {rejection}");
            let result = SubmissionResult::failure(format!(
                "Sorry, your message could not be read. Please try again later or contact me \
                 directly at {}",
                state.fallback
            ));
            return (rejection.status(), Json(result)).into_response();
        }
    };

    let result = state.service.submit(form).await;

    let code = if result.is_success() {
        StatusCode::OK
    } else if result.field_errors().is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(result)).into_response()
}
