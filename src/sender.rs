use std::io;

use anyhow::{Context, Result};
use tokio::net::UdpSocket;
use tracing::debug;

/// Owns the UDP socket used to forward datagrams.
///
/// The socket is bound once at startup to an ephemeral local port with
/// broadcast permission enabled, so broadcast destinations work without any
/// per-send configuration. [`UdpSender::release`] closes the socket and is
/// safe to call more than once; the shutdown coordinator guarantees it is
/// never reached while a send is outstanding.
#[derive(Debug)]
pub struct UdpSender {
    socket: Option<UdpSocket>,
}

impl UdpSender {
    /// Bind the forwarding socket. Happens before the first line is read.
    pub async fn bind() -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .context("failed to bind forwarding socket")?;
        socket
            .set_broadcast(true)
            .context("failed to enable broadcast on forwarding socket")?;
        Ok(Self {
            socket: Some(socket),
        })
    }

    /// Send one datagram to `host:port`.
    ///
    /// The destination is resolved per send by the OS resolver, and the
    /// returned future's resolution is the completion signal. Failures come
    /// back through it rather than being raised eagerly; the caller decides
    /// whether they are fatal.
    pub async fn send(&self, payload: &[u8], host: &str, port: u16) -> io::Result<usize> {
        match &self.socket {
            Some(socket) => socket.send_to(payload, (host, port)).await,
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "forwarding socket already released",
            )),
        }
    }

    /// Close the socket. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(socket) = self.socket.take() {
            drop(socket);
            debug!("forwarding socket released");
        }
    }

    pub fn is_released(&self) -> bool {
        self.socket.is_none()
    }
}
