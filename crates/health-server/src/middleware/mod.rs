//! Tower middleware applied to every request:
//! - `RequestIdLayer`: generates/propagates `x-request-id`
//! - `LoggingLayer`: structured request logging

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};
