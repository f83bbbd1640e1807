use std::convert::Infallible;

use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

const MAX_FORM_BYTES: usize = 64 * 1024;

/// Form body that decoded cleanly. `None` when the body is missing, is not
/// `application/x-www-form-urlencoded`, repeats a field, or percent-encodes
/// bytes that are not UTF-8; handlers turn that into their own message.
pub struct FormFields<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let Ok(bytes) = to_bytes(body, MAX_FORM_BYTES).await else {
            return Ok(Self(None));
        };
        if !decodes_to_utf8(&bytes) {
            return Ok(Self(None));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let fields = Form::<T>::from_request(req, state)
            .await
            .ok()
            .map(|Form(fields)| fields);
        Ok(Self(fields))
    }
}

/// Axum's form decoder substitutes U+FFFD for invalid sequences; refuse them
/// instead so names are stored exactly as typed.
fn decodes_to_utf8(body: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(body) else {
        return false;
    };
    text.split('&')
        .flat_map(|pair| pair.split('='))
        .all(|piece| urlencoding::decode(&piece.replace('+', " ")).is_ok())
}
