use console::{StyledObject, style};

/// # `MessageType`
/// Trait for message types.
trait MessageType {
    /// The glyph prefix for each message type (e.g., "✓")
    const PREFIX: &'static str;

    /// Whether to output to stderr (true) or stdout (false)
    const TO_STDERR: bool = false;

    /// The prefix with its terminal styling.
    fn styled_prefix() -> StyledObject<&'static str>;
}

// Define the message types
struct Error;
struct Warning;
struct Success;
struct Failure;
struct Info;

// Implement the MessageType trait for each type
impl MessageType for Error {
    const PREFIX: &'static str = "✗ ERROR";
    const TO_STDERR: bool = true;

    fn styled_prefix() -> StyledObject<&'static str> {
        style(Self::PREFIX).red().bold()
    }
}

impl MessageType for Warning {
    const PREFIX: &'static str = "⚠ WARNING";

    fn styled_prefix() -> StyledObject<&'static str> {
        style(Self::PREFIX).yellow()
    }
}

impl MessageType for Success {
    const PREFIX: &'static str = "✓";

    fn styled_prefix() -> StyledObject<&'static str> {
        style(Self::PREFIX).green()
    }
}

impl MessageType for Failure {
    const PREFIX: &'static str = "✗";
    const TO_STDERR: bool = true;

    fn styled_prefix() -> StyledObject<&'static str> {
        style(Self::PREFIX).red()
    }
}

impl MessageType for Info {
    const PREFIX: &'static str = "ℹ";

    fn styled_prefix() -> StyledObject<&'static str> {
        style(Self::PREFIX).cyan()
    }
}

/// # `format_message`
/// Formats a one-line message: prefix, title and optional details.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message, omitted when empty.
///
/// ## Returns
/// * String - The formatted message.
fn format_message<T: MessageType>(title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {title}", T::styled_prefix())
    } else {
        format!("{} {title}: {details}", T::styled_prefix())
    }
}

/// # `format_message_with_suggestion`
/// Formats a message with suggestion on its own line.
///
/// ## Arguments
/// * `title` - The title of the message.
/// * `details` - The details of the message.
/// * `suggestion` - The suggestion for the message.
///
/// ## Returns
/// * String - The formatted message.
fn format_message_with_suggestion<T: MessageType>(
    title: &str,
    details: &str,
    suggestion: &str,
) -> String {
    format!("{}\n{suggestion}", format_message::<T>(title, details))
}

fn emit<T: MessageType>(message: &str) {
    if T::TO_STDERR {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

/// # `print_error`
/// Prints an error message with a consistent format for user-friendly display.
///
/// ## Arguments
/// - `title`: The title of the error message.
/// - `details`: The details of the error message.
/// - `suggestion`: The suggestion for resolving the error.
pub fn print_error(title: &str, details: &str, suggestion: &str) {
    if suggestion.is_empty() {
        emit::<Error>(&format_message::<Error>(title, details));
    } else {
        emit::<Error>(&format_message_with_suggestion::<Error>(
            title, details, suggestion,
        ));
    }
}

/// # `print_warning`
/// Prints a warning message with a consistent format for user-friendly display.
pub fn print_warning(title: &str, details: &str) {
    emit::<Warning>(&format_message::<Warning>(title, details));
}

/// # `print_success`
/// Prints a success line prefixed with `✓`.
pub fn print_success(title: &str, details: &str) {
    emit::<Success>(&format_message::<Success>(title, details));
}

/// # `print_failure`
/// Prints a failed step prefixed with `✗`.
pub fn print_failure(title: &str, details: &str) {
    emit::<Failure>(&format_message::<Failure>(title, details));
}

/// # `print_info`
/// Prints an informational message.
pub fn print_info(title: &str, details: &str) {
    emit::<Info>(&format_message::<Info>(title, details));
}

/// # `print_banner`
/// Prints a section banner such as `=== Auto Commit ===`.
pub fn print_banner(title: &str) {
    println!("{}", style(format!("=== {title} ===")).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_without_details() {
        console::set_colors_enabled(false);
        assert_eq!(format_message::<Success>("Git repository detected", ""), "✓ Git repository detected");
    }

    #[test]
    fn test_format_message_with_details() {
        console::set_colors_enabled(false);
        assert_eq!(
            format_message::<Failure>("Error making commit 2", "nothing to commit"),
            "✗ Error making commit 2: nothing to commit"
        );
    }

    #[test]
    fn test_format_message_with_suggestion() {
        console::set_colors_enabled(false);
        assert_eq!(
            format_message_with_suggestion::<Error>(
                "Git repository not found",
                "git status failed",
                "Run from within a git repository."
            ),
            "✗ ERROR Git repository not found: git status failed\nRun from within a git repository."
        );
    }
}
