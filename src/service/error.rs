use std::net::SocketAddr;

use thiserror::Error;

use crate::publisher::TransportError;
use crate::vrfy::VrfyError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid listen address {addr}: {source}")]
    ListenAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Vrfy(#[from] VrfyError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
