//! Line-draining stream reader.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read every line from `reader` and concatenate them with no separator.
///
/// Line terminators (`\n`, including a preceding `\r`) are stripped; a final
/// unterminated line is still appended. The reader is consumed, so it is
/// released when the call returns on both the success and the error path.
pub async fn read_to_text<R>(reader: R) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut text = String::new();
    while let Some(line) = lines.next_line().await? {
        text.push_str(&line);
    }
    Ok(text)
}
