use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_models::contact::ContactForm;
use thiserror::Error;

use crate::models::contact::ApiContactForm;

/// JSON body of a contact submission.
///
/// Unlike [`axum::Json`] this does not insist on a content type, and its
/// rejection is turned into a `SubmissionResult` by the contact route.
pub struct ContactFormBody(pub ContactForm);

#[derive(Debug, Error)]
pub enum ContactFormRejection {
    #[error("Failed to read request body: {0}")]
    Body(#[from] axum::extract::rejection::BytesRejection),
    #[error("Failed to parse contact form: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactFormRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(err) => err.status(),
            Self::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ContactFormRejection {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for ContactFormBody {
    type Rejection = ContactFormRejection;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state).await?;
        let form = serde_json::from_slice::<ApiContactForm>(&body)?;
        Ok(Self(form.into()))
    }
}
