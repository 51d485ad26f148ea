//! Menu choice parsing for the console loop.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Please only choose 1, 2, 3, or 4")]
    Invalid(String),
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(MenuChoice::Register),
            "2" => Ok(MenuChoice::Show),
            "3" => Ok(MenuChoice::Save),
            "4" => Ok(MenuChoice::Exit),
            other => Err(MenuError::Invalid(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_choices() {
        assert_eq!("1".parse(), Ok(MenuChoice::Register));
        assert_eq!(" 2\n".parse(), Ok(MenuChoice::Show));
        assert_eq!("3".parse(), Ok(MenuChoice::Save));
        assert_eq!("4".parse(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["0", "5", "one", "", "12"] {
            let err = input.parse::<MenuChoice>().expect_err("invalid choice");
            assert_eq!(err.to_string(), "Please only choose 1, 2, 3, or 4");
        }
    }
}
