use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::session::FormEvent;
use crate::ui::{parse_line, Input};

/// Reads form commands line by line and forwards them to the session.
///
/// The task ends on EOF, on `quit`, or once the session stops listening. Dropping the sender
/// is what tells the session that input is finished.
pub fn spawn_input_reader<R>(reader: R, sender: mpsc::Sender<FormEvent>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    spawn(async move {
        //NOTE: Lines are split as raw bytes so a single undecodable line is skipped rather than ending input.
        let mut lines = BufReader::new(reader).split(b'\n');

        loop {
            let raw = match lines.next_segment().await {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(error) => {
                    error!("Failed to read form input: {error}");
                    break;
                }
            };

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(error) => {
                    warn!("Skipping form input that is not valid UTF-8: {error}");
                    eprintln!("Input ignored, it is not valid UTF-8");
                    continue;
                }
            };
            let line = line.strip_suffix('\r').unwrap_or(&line);

            match parse_line(line) {
                Ok(Some(Input::Event(event))) => {
                    if sender.send(event).await.is_err() {
                        break;
                    }
                }
                Ok(Some(Input::Quit)) => break,
                Ok(None) => {}
                Err(error) => {
                    warn!("{error}");
                    eprintln!("{error}");
                }
            }
        }

        debug!("Form input closed");
    })
}
