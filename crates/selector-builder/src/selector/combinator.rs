use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;

/// Combinator joining two selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The token written between the two operands.
    pub fn token(self) -> char {
        match self {
            Combinator::Descendant => ' ',
            Combinator::Child => '>',
            Combinator::AdjacentSibling => '+',
            Combinator::GeneralSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Combinator::Descendant),
            '>' => Ok(Combinator::Child),
            '+' => Ok(Combinator::AdjacentSibling),
            '~' => Ok(Combinator::GeneralSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Parses a single-character token. Surrounding whitespace is not trimmed,
    /// since `" "` is itself the descendant token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Combinator::try_from(c),
            _ => Err(SelectorError::UnknownCombinator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_tokens() {
        assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
        assert_eq!(">".parse::<Combinator>().unwrap(), Combinator::Child);
        assert_eq!("+".parse::<Combinator>().unwrap(), Combinator::AdjacentSibling);
        assert_eq!("~".parse::<Combinator>().unwrap(), Combinator::GeneralSibling);
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["", "  ", " > ", "|", ">>"] {
            assert_eq!(
                token.parse::<Combinator>(),
                Err(SelectorError::UnknownCombinator(token.to_string()))
            );
        }
    }

    #[test]
    fn display_is_token() {
        assert_eq!(Combinator::GeneralSibling.to_string(), "~");
        assert_eq!(Combinator::Descendant.to_string(), " ");
    }
}
