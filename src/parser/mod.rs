//! Parsing of user input

pub mod date;
pub use date::parse_date;
pub mod grammar;
pub use grammar::{parse_assignment, parse_event};

/// Uppercase the first character of the trimmed string, and leave the rest unchanged
pub fn capitalize(s: &str) -> String {
    let s = s.trim();
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Split a line into its lowercased command word and the (trimmed) rest of the line
pub fn split_command_word(input: &str) -> (String, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_lowercase(), rest.trim()),
        None => (input.to_lowercase(), ""),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lab 3"), "Lab 3");
        assert_eq!(capitalize("  submit ZIP "), "Submit ZIP");
        assert_eq!(capitalize("CS2113"), "CS2113");
        assert_eq!(capitalize("électricité"), "Électricité");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_split_command_word() {
        assert_eq!(split_command_word("Edit 3"), ("edit".to_string(), "3"));
        assert_eq!(split_command_word("  EVENT   n/x l/y  "), ("event".to_string(), "n/x l/y"));
        assert_eq!(split_command_word("list"), ("list".to_string(), ""));
        assert_eq!(split_command_word(""), ("".to_string(), ""));
    }
}
