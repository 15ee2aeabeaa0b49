use crate::ipc::protocol::{decode_line, Dispatch};
use crate::{log_debug, log_debug_content};
use crossbeam_channel::Sender;
use std::io::BufRead;
use std::thread;

/// Start the background listener over the inbound channel.
///
/// Runs for the life of the process in attached mode: reads one line at a
/// time, decodes it, and hands the resulting [`Dispatch`] to the
/// orchestration loop. The thread exits only when the reader reaches EOF (or
/// fails) or the receiving side is gone; per-message faults are logged and
/// the loop continues.
pub fn spawn_listener<R>(reader: R, tx: Sender<Dispatch>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || listen(reader, tx))
}

fn listen<R: BufRead>(reader: R, tx: Sender<Dispatch>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log_debug(&format!("Channel read failed: {err}"));
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        log_debug_content(&format!("Channel line: {trimmed}"));

        match decode_line(trimmed) {
            Ok(dispatch) => {
                tracing::info!(command = dispatch.command.as_str(), "host command");
                if tx.send(dispatch).is_err() {
                    // Orchestration loop has exited.
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(%err, "dropped host message");
                log_debug(&err.to_string());
            }
        }
    }

    log_debug("Listener thread exiting");
}
