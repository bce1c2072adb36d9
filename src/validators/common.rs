//! Common validation utilities and helpers.

use validator::ValidationErrors;

/// Flatten validator errors into their messages.
///
/// The messages are sorted so responses are stable across requests.
///
/// # Example
/// ```ignore
/// if let Err(e) = params.validate() {
///     errors.extend(validation_messages(&e));
/// }
/// ```
pub fn validation_messages(e: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    messages.sort();
    messages
}
