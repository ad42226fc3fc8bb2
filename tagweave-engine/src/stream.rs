//! Async reader/writer plumbing around the sequencer
//!
//! These helpers pump an async byte source through a [`Sequencer`] in
//! fixed-size read chunks. The next read is not issued until the previous
//! chunk's segments have all been resolved, so the producer is throttled to
//! the speed of the slowest resolver call.

use crate::error::Result;
use crate::resolver::Resolver;
use crate::sequencer::Sequencer;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Default read chunk size for stream plumbing.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Read `reader` to end, resolving tags as chunks arrive, and return the
/// complete resolved output.
pub async fn resolve_reader<R, S>(mut reader: R, resolver: S, chunk_size: usize) -> Result<String>
where
    R: AsyncRead + Unpin,
    S: Resolver,
{
    let mut sequencer = Sequencer::new(resolver);
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut output = String::new();

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        log::trace!("read {n} byte(s)");
        output.push_str(&sequencer.write_bytes(&buf[..n]).await?);
    }
    output.push_str(&sequencer.finish().await?);
    Ok(output)
}

/// Pump `reader` through the resolver and write resolved output to `writer`
/// as each chunk completes. Returns the number of bytes written.
pub async fn resolve_to_writer<R, W, S>(
    mut reader: R,
    mut writer: W,
    resolver: S,
    chunk_size: usize,
) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Resolver,
{
    let mut sequencer = Sequencer::new(resolver);
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut written = 0u64;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let resolved = sequencer.write_bytes(&buf[..n]).await?;
        if !resolved.is_empty() {
            writer.write_all(resolved.as_bytes()).await?;
            written += resolved.len() as u64;
        }
    }
    let resolved = sequencer.finish().await?;
    if !resolved.is_empty() {
        writer.write_all(resolved.as_bytes()).await?;
        written += resolved.len() as u64;
    }
    writer.flush().await?;
    Ok(written)
}
