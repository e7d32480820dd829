use std::io::ErrorKind;
use std::path::Path;

use crate::events::EventSink;

/// Deletes a stale output file, if any.
///
/// A missing file is not an error: the absence is reported to `sink` and nothing else happens.
///
/// # Errors
///
/// Returns the underlying [`std::io::Error`] if the file exists but cannot be removed.
pub fn remove_stale(path: &Path, sink: &dyn EventSink) -> std::io::Result<()> {
    if !path.is_file() {
        sink.info(&format!("This file does not exist {}", path.display()));
        return Ok(());
    }

    sink.info(&format!("Try to remove {}", path.display()));
    match std::fs::remove_file(path) {
        Ok(()) => {
            sink.info(&format!("Removed {}", path.display()));
            Ok(())
        }
        // Gone in the meantime, which is all we wanted.
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::events::recording::RecordingSink;

    #[test]
    fn remove_stale_deletes_an_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("order_prices.csv");
        std::fs::write(&path, "id,euros\n").unwrap();
        let sink = RecordingSink::default();

        assert2::let_assert!(Ok(()) = remove_stale(&path, &sink));
        assert!(!path.exists());
        assert_eq!(
            vec![
                format!("Try to remove {}", path.display()),
                format!("Removed {}", path.display()),
            ],
            sink.events()
        );
    }

    #[test]
    fn remove_stale_on_missing_file_only_reports_it() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("order_prices.csv");
        let sink = RecordingSink::default();

        assert2::let_assert!(Ok(()) = remove_stale(&path, &sink));
        assert_eq!(vec![format!("This file does not exist {}", path.display())], sink.events());
    }
}
