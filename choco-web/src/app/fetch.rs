use choco_catalog::{CatalogDocument, LoadError};

use crate::dom;

/// Fetch and parse the catalog. Single attempt, no retry, no timeout.
///
/// # Errors
/// Returns a [`LoadError`] when the request fails, the server answers with a
/// non-success status, the body cannot be read, or it is not a catalog.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load(url: &str) -> Result<CatalogDocument, LoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| LoadError::Network {
            url: url.to_string(),
            message: dom::js_error_message(&err),
        })?;
    check_status(url, response.status())?;
    let body = dom::response_text(&response)
        .await
        .map_err(|err| LoadError::Body(dom::js_error_message(&err)))?;
    parse_body(&body)
}

/// Accept 2xx statuses only.
///
/// # Errors
/// Returns [`LoadError::Status`] for any other status.
pub fn check_status(url: &str, status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Parse a response body into a catalog.
///
/// # Errors
/// Returns [`LoadError::Parse`] when the body is not a catalog document.
pub fn parse_body(body: &str) -> Result<CatalogDocument, LoadError> {
    Ok(CatalogDocument::from_json(body)?)
}
