// src/presentation/http/middleware/catch_async.rs
//! Funnels handler failures, including panics, into the error pipeline.

use crate::application::error::ApplicationError;
use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use futures::{FutureExt, future::BoxFuture};
use std::{
    future::Future,
    panic::{self, AssertUnwindSafe},
};

/// Runs `invoke` and awaits its future. A panic while building the future or
/// while polling it comes back as an `Err` like any other failure.
pub async fn settle<F, Fut, T, E>(invoke: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<ApplicationError>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(invoke)) {
        Ok(future) => future,
        Err(payload) => return Err(ApplicationError::from_panic(payload).into()),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(ApplicationError::from_panic(payload).into()),
    }
}

/// Like [`settle`], but hands a failure to `next` and yields whatever `next`
/// produced. `next` runs at most once, and only on failure.
pub async fn forward_rejection<F, Fut, T, E, N, R>(invoke: F, next: N) -> Result<T, R>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<ApplicationError>,
    N: FnOnce(E) -> R,
{
    settle(invoke).await.map_err(next)
}

/// Wraps a request handler so every failure becomes an error response for
/// `normalize_errors` to finish.
pub fn catch_async<H, Fut, T, E>(
    handler: H,
) -> impl Fn(Request) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static
where
    H: Fn(Request) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: IntoResponse + Send + 'static,
    E: IntoResponse + From<ApplicationError> + Send + 'static,
{
    move |request: Request| {
        let handler = handler.clone();
        async move {
            match forward_rejection(move || handler(request), E::into_response).await {
                Ok(value) => value.into_response(),
                Err(rejected) => rejected,
            }
        }
        .boxed()
    }
}
