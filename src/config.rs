//! Slug configuration: separator choice, case handling, transliteration switch.
//!
//! `Config` is a plain `Copy` value. `Slugify` owns one and hands a borrowed
//! view of it to every stage through [`Context`](crate::context::Context).
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a separator cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeparatorError {
    #[error("invalid separator character `{0}`: expected `-` or `_`")]
    InvalidChar(char),

    #[error("invalid separator `{0}`: expected `-`, `_`, `hyphen` or `underscore`")]
    InvalidName(String),
}

/// The character joining words in a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    #[default]
    Hyphen,
    Underscore,
}

impl Separator {
    #[inline(always)]
    pub const fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
        }
    }

    /// The separator that is *not* configured.
    ///
    /// Literal occurrences of it in the input survive untouched: they are
    /// neither collapsed nor trimmed.
    #[inline(always)]
    pub const fn other(self) -> Separator {
        match self {
            Separator::Hyphen => Separator::Underscore,
            Separator::Underscore => Separator::Hyphen,
        }
    }

    #[inline(always)]
    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Separator {
    type Error = SeparatorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '-' => Ok(Separator::Hyphen),
            '_' => Ok(Separator::Underscore),
            other => Err(SeparatorError::InvalidChar(other)),
        }
    }
}

impl FromStr for Separator {
    type Err = SeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "-" | "hyphen" | "dash" => Ok(Separator::Hyphen),
            "_" | "underscore" => Ok(Separator::Underscore),
            _ => Err(SeparatorError::InvalidName(s.to_owned())),
        }
    }
}

/// Settings shared by every `slugify` call of one [`Slugify`](crate::Slugify).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Fold the final slug to lowercase.
    pub lower_case: bool,
    pub separator: Separator,
    /// Run the external [`Transliterator`](crate::Transliterator) before the
    /// built-in character map.
    pub use_transliterator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lower_case: true,
            separator: Separator::Hyphen,
            use_transliterator: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.lower_case);
        assert_eq!(config.separator, Separator::Hyphen);
        assert!(!config.use_transliterator);
    }

    #[test]
    fn other_separator_is_symmetric() {
        assert_eq!(Separator::Hyphen.other(), Separator::Underscore);
        assert_eq!(Separator::Underscore.other(), Separator::Hyphen);
        assert_eq!(Separator::Hyphen.other().other(), Separator::Hyphen);
    }

    #[test]
    fn separator_from_char() {
        assert_eq!(Separator::try_from('-'), Ok(Separator::Hyphen));
        assert_eq!(Separator::try_from('_'), Ok(Separator::Underscore));
        assert_eq!(
            Separator::try_from('.'),
            Err(SeparatorError::InvalidChar('.'))
        );
    }

    #[test]
    fn separator_from_str() {
        assert_eq!("underscore".parse::<Separator>(), Ok(Separator::Underscore));
        assert_eq!(" Hyphen ".parse::<Separator>(), Ok(Separator::Hyphen));
        assert_eq!("_".parse::<Separator>(), Ok(Separator::Underscore));
        let err = "space".parse::<Separator>().unwrap_err();
        assert_eq!(err, SeparatorError::InvalidName("space".to_owned()));
        assert!(err.to_string().contains("`space`"));
    }

    #[test]
    fn display_is_the_character() {
        assert_eq!(Separator::Hyphen.to_string(), "-");
        assert_eq!(Separator::Underscore.to_string(), "_");
        assert_eq!(Separator::Underscore.as_byte(), b'_');
    }
}
