use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError<D> {
    pub detail: D,
}
