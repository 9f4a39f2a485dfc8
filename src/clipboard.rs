use std::{
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Mutex,
    },
    thread,
    time::{Duration, Instant},
};

use log::{debug, warn};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// The system clipboard, or something that behaves like it.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

impl ClipboardBackend for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::set_text(self, text)?;
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        Ok(arboard::Clipboard::get_text(self)?)
    }
}

struct CopyRequest {
    text: Zeroizing<String>,
    reply: Sender<Result<()>>,
}

/// Owns a clipboard for the lifetime of the program in a background thread.
///
/// Copied text is removed again after `timeout`, unless something else was put on the
/// clipboard in the meantime. A new copy restarts the timer. A zero timeout never clears.
pub struct Clipboard {
    tx: Mutex<Sender<CopyRequest>>,
    timeout: Duration,
}

impl Clipboard {
    /// The system clipboard.
    pub fn system(timeout: Duration) -> Self {
        Self::with_backend(timeout, || Ok(arboard::Clipboard::new()?))
    }

    /// `make_backend` runs on the clipboard thread, so the backend never crosses threads.
    pub fn with_backend<B, F>(timeout: Duration, make_backend: F) -> Self
    where
        B: ClipboardBackend + 'static,
        F: FnOnce() -> Result<B> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || match make_backend() {
            Ok(backend) => run(backend, &rx, timeout),
            Err(err) => refuse_all(&err, &rx),
        });

        Self {
            tx: Mutex::new(tx),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Puts `text` on the clipboard, blocks until the clipboard thread has done so.
    pub fn copy(&self, text: &str) -> Result<()> {
        let (reply, response) = mpsc::channel();
        let request = CopyRequest {
            text: Zeroizing::new(text.to_owned()),
            reply,
        };

        self.tx
            .lock()
            .map_err(|_| Error::Generic("thread error"))?
            .send(request)
            .map_err(|_| Error::Generic("clipboard thread stopped"))?;

        response
            .recv()
            .map_err(|_| Error::Generic("clipboard thread stopped"))?
    }
}

fn run<B: ClipboardBackend>(mut backend: B, rx: &Receiver<CopyRequest>, timeout: Duration) {
    let mut pending: Option<(Instant, Zeroizing<String>)> = None;

    loop {
        let request = match &pending {
            Some((deadline, _)) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(request) => Some(request),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(request) => Some(request),
                Err(_) => break,
            },
        };

        match request {
            Some(CopyRequest { text, reply }) => {
                let res = backend.set_text(&text);
                if res.is_ok() {
                    pending = if timeout.is_zero() {
                        None
                    } else {
                        Some((Instant::now() + timeout, text))
                    };
                }
                // the caller might have given up waiting
                let _ = reply.send(res);
            }
            None => {
                if let Some((_, text)) = pending.take() {
                    clear_if_unchanged(&mut backend, &text);
                }
            }
        }
    }

    if let Some((_, text)) = pending.take() {
        clear_if_unchanged(&mut backend, &text);
    }
}

fn clear_if_unchanged<B: ClipboardBackend>(backend: &mut B, copied: &str) {
    match backend.get_text() {
        Ok(current) if current == copied => match backend.set_text("") {
            Ok(()) => debug!("clipboard cleared"),
            Err(err) => warn!("failed to clear the clipboard: {err}"),
        },
        Ok(_) => debug!("clipboard changed since the copy, leaving it alone"),
        Err(err) => warn!("failed to read the clipboard: {err}"),
    }
}

fn refuse_all(err: &Error, rx: &Receiver<CopyRequest>) {
    warn!("clipboard unavailable: {err}");
    for request in rx {
        let _ = request
            .reply
            .send(Err(Error::GenericDyn(format!("clipboard unavailable: {err}"))));
    }
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod clipboard;
