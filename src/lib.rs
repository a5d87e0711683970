//! Forward piped log lines to a remote listener as UDP datagrams.
//!
//! `logcast` sits at the end of a shell pipe (`server | logcast -p 43567`)
//! and ships every line of its standard input to a UDP listener, tagged
//! with a stream id so one receiver can tell concurrent senders apart.
//! Delivery is fire-and-forget: no buffering, no retries, no
//! acknowledgments. Each module focuses on a concrete responsibility:
//!
//! - [`cli`] parses the command-line interface.
//! - [`message`] frames a raw line plus a stream id into the JSON datagram
//!   body.
//! - [`sender`] owns the broadcast-capable UDP socket and transmits
//!   payloads.
//! - [`shutdown`] tracks when the input stream has ended and whether a
//!   send is still in flight, and decides exactly when the socket may be
//!   closed.
//! - [`forward`] drives the whole pipeline: read a line, echo it, frame
//!   it, send it.
//!
//! Integration tests drive the pump with in-memory streams and a local
//! UDP receiver; the end-to-end test runs the built binary.

pub mod cli;
pub mod forward;
pub mod message;
pub mod sender;
pub mod shutdown;
