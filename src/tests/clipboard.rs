use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct MockClipboard {
    contents: Arc<Mutex<String>>,
}

impl MockClipboard {
    fn contents(&self) -> String {
        self.contents.lock().unwrap().clone()
    }

    fn overwrite(&self, text: &str) {
        *self.contents.lock().unwrap() = text.to_owned();
    }
}

impl ClipboardBackend for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.overwrite(text);
        Ok(())
    }

    fn get_text(&mut self) -> Result<String> {
        Ok(self.contents())
    }
}

fn mock_clipboard(timeout: Duration) -> (Clipboard, MockClipboard) {
    let mock = MockClipboard::default();
    let backend = mock.clone();
    let clipboard = Clipboard::with_backend(timeout, move || Ok(backend));

    (clipboard, mock)
}

#[test]
fn copy_sets_the_contents() {
    let (clipboard, mock) = mock_clipboard(Duration::from_secs(60));

    clipboard.copy("hunter22").unwrap();

    assert_eq!("hunter22", mock.contents());
    assert_eq!(Duration::from_secs(60), clipboard.timeout());
}

#[test]
fn contents_are_cleared_after_the_timeout() {
    let (clipboard, mock) = mock_clipboard(Duration::from_millis(50));

    clipboard.copy("hunter22").unwrap();
    thread::sleep(Duration::from_millis(500));

    assert_eq!("", mock.contents());
}

#[test]
fn zero_timeout_never_clears() {
    let (clipboard, mock) = mock_clipboard(Duration::ZERO);

    clipboard.copy("hunter22").unwrap();
    thread::sleep(Duration::from_millis(200));

    assert_eq!("hunter22", mock.contents());
}

#[test]
fn a_new_copy_restarts_the_timer() {
    let (clipboard, mock) = mock_clipboard(Duration::from_millis(600));

    clipboard.copy("first").unwrap();
    thread::sleep(Duration::from_millis(300));
    clipboard.copy("second").unwrap();

    // past the deadline of the first copy, well before the one of the second
    thread::sleep(Duration::from_millis(450));
    assert_eq!("second", mock.contents());

    thread::sleep(Duration::from_millis(700));
    assert_eq!("", mock.contents());
}

#[test]
fn contents_changed_by_someone_else_are_kept() {
    let (clipboard, mock) = mock_clipboard(Duration::from_millis(50));

    clipboard.copy("hunter22").unwrap();
    mock.overwrite("copied from another program");
    thread::sleep(Duration::from_millis(500));

    assert_eq!("copied from another program", mock.contents());
}

#[test]
fn unavailable_clipboard_reports_an_error() {
    let clipboard = Clipboard::with_backend(Duration::from_secs(1), || {
        Err::<MockClipboard, _>(Error::Generic("no display"))
    });

    let res = clipboard.copy("hunter22");

    assert!(matches!(res, Err(Error::GenericDyn(msg)) if msg.contains("no display")));
}
