use std::io::{self, BufRead};

use kanal::AsyncReceiver;

/// Read stdin on a dedicated thread and hand out trimmed, non-empty lines.
///
/// The thread blocks on stdin, so it is detached rather than run on the tokio
/// blocking pool, where it would hold up runtime shutdown. The channel closes
/// at EOF.
pub fn spawn_stdin_reader(capacity: usize) -> io::Result<AsyncReceiver<String>> {
    let (tx, rx) = kanal::bounded::<String>(capacity);

    std::thread::Builder::new()
        .name("wordbook-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!("Failed to read stdin: {e}");
                        break;
                    }
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if tx.send(line.to_string()).is_err() {
                    break;
                }
            }
            tracing::debug!("stdin closed");
        })?;

    Ok(rx.to_async())
}
