use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Asks the user for a string or a file path on the terminal.
///
/// Returns `Ok(None)` if the user cancels the prompt (Ctrl+C or Escape).
pub fn prompt_text(message: &str) -> Result<Option<String>> {
    cancellable(inquire::Text::new(message).prompt())
}

fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => {
            eprintln!();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellable_ok() {
        let result = cancellable(Ok("hello".to_string())).unwrap();
        assert_eq!(result.as_deref(), Some("hello"));
    }

    #[test]
    fn test_cancellable_operation_canceled() {
        let result = cancellable::<String>(Err(InquireError::OperationCanceled)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_cancellable_operation_interrupted() {
        let result = cancellable::<String>(Err(InquireError::OperationInterrupted)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_cancellable_other_error() {
        let result = cancellable::<String>(Err(InquireError::Custom("boom".into())));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
