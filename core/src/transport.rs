//! The seam between the sans-IO core and the host's network stack.

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round trip on behalf of the core.
///
/// Implementations return any HTTP status as data; only failures to obtain
/// a response at all are reported as `TransportError`. The core never
/// retries, times out, or cancels a request.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
