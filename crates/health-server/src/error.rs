//! Startup error types.
//!
//! Requests never fail at the application level, so every variant here
//! describes something that prevents the server from reaching the
//! listening state (or keeps it from staying there).

use std::io;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

/// Result alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration sources could not be read or deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Host and port do not form a socket address.
    #[error("invalid listen address '{host}:{port}'")]
    InvalidAddress {
        host: String,
        port: u16,
        #[source]
        source: AddrParseError,
    },

    /// The listener could not be bound (port in use, permission denied, ...).
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error")]
    Serve(#[source] io::Error),
}

impl ServerError {
    /// Returns true if the error happened while binding the listener.
    pub fn is_bind_error(&self) -> bool {
        matches!(self, Self::Bind { .. })
    }
}
