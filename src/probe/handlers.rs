//! Content handlers shaping the JSON payload of a probe response

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use super::finite::ensure_finite;
use super::response::ProbeResponse;
use crate::checks::BoxError;

/// Future returned by a content handler
pub type HandlerFuture = BoxFuture<'static, Result<Value, BoxError>>;

/// Pluggable function turning a [`ProbeResponse`] into the JSON body
pub type ContentHandler = Arc<dyn Fn(ProbeResponse) -> HandlerFuture + Send + Sync>;

/// Wrap an async function returning any serializable value as a content handler
///
/// Payloads holding `NaN` or infinite floats are rejected as handler errors.
pub fn handler<F, Fut, T, E>(func: F) -> ContentHandler
where
    F: Fn(ProbeResponse) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Serialize,
    E: Into<BoxError>,
{
    Arc::new(move |response: ProbeResponse| {
        let fut = func(response);
        async move {
            let payload = fut.await.map_err(Into::<BoxError>::into)?;
            ensure_finite(&payload)?;
            Ok::<Value, BoxError>(serde_json::to_value(payload)?)
        }
        .boxed()
    })
}

/// Handler used when none is configured: yields JSON `null`
pub fn default_handler() -> ContentHandler {
    Arc::new(|_response: ProbeResponse| async { Ok::<Value, BoxError>(Value::Null) }.boxed())
}

/// Handler echoing the serialized report
pub fn report_handler() -> ContentHandler {
    Arc::new(|response: ProbeResponse| {
        async move { Ok::<Value, BoxError>(Value::Object(response.data)) }.boxed()
    })
}
