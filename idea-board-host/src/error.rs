use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {var} {value:?}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
