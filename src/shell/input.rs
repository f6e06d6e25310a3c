use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads one form submission. `None` means end of input.
///
/// Bytes that are not UTF-8 are replaced instead of failing, so a bad line never ends the session.
pub async fn next_submission<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line).await? == 0 {
        return Ok(None);
    }
    let text = String::from_utf8_lossy(&line);
    Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
}
