use std::io;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::{message::WireMessage, sender::UdpSender, shutdown::SendState};

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Startup-resolved configuration consumed by the forwarding pump.
#[derive(Debug, Clone)]
pub struct ForwardConfig {
    /// Destination host, resolved per send.
    pub host: String,
    /// Destination port.
    pub port: u16,
    /// Stream id carried unchanged in every message.
    pub id: String,
    /// Pipe each input line through to the echo sink.
    pub echo: bool,
}

/// Forward stdin to the configured destination until the stream ends.
pub async fn run(config: ForwardConfig) -> Result<()> {
    let mut sender = UdpSender::bind().await?;
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    pump_lines(&mut stdin, &mut stdout, &mut sender, &config).await
}

/// Read lines until end of stream, forwarding each one as a datagram.
///
/// Per line: echo it verbatim unless muted, mark a send in flight, frame
/// it, transmit, then clear the in-flight mark. The coordinator decides at
/// each transition whether the socket may be released, so input ending and
/// send completion can be observed in either order without leaking the
/// socket or closing it early. Generic over the input and echo sink so
/// tests can drive the pump with in-memory streams.
pub async fn pump_lines<R, W>(
    reader: &mut R,
    echo: &mut W,
    sender: &mut UdpSender,
    config: &ForwardConfig,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = SendState::new();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .await
            .context("failed to read from input stream")?;
        if bytes == 0 {
            if state.input_ended() {
                sender.release();
            }
            break;
        }

        let raw = line.trim_end_matches(LINE_ENDINGS);
        if config.echo {
            echo_line(echo, raw).await.context("failed to echo line")?;
        }

        state.line_read();
        let payload = WireMessage::frame(&config.id, raw).to_bytes();
        if let Err(error) = sender.send(&payload, &config.host, config.port).await {
            // Delivery is best-effort, but the in-flight mark must still be
            // cleared below or shutdown would wait forever on a failed send.
            warn!(?error, host = %config.host, port = config.port, "failed to send datagram");
        }
        if state.send_completed() {
            sender.release();
        }
    }

    debug!("input stream ended");
    Ok(())
}

async fn echo_line<W>(echo: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    echo.write_all(line.as_bytes()).await?;
    echo.write_all(b"\n").await?;
    echo.flush().await
}
