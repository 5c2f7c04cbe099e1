//! Traits used at the boundary between commands and the outside world

/// A line-oriented user interface
pub trait LineUi {
    /// Display some text to the user
    fn show_to_user(&mut self, text: &str);
    /// Block until the user has entered a line, and return it (without its line terminator).
    /// This returns an empty string if no more input is available.
    fn get_user_input(&mut self) -> String;
}
