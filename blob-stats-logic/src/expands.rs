use crate::error::ParseError;
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Expand {
    Block,
    Transaction,
}

/// Related entities to include into a blob lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expands {
    pub block: bool,
    pub transaction: bool,
}

impl Expands {
    pub fn all() -> Self {
        Self {
            block: true,
            transaction: true,
        }
    }

    pub fn with(mut self, expand: Expand) -> Self {
        match expand {
            Expand::Block => self.block = true,
            Expand::Transaction => self.transaction = true,
        }
        self
    }
}

impl FromIterator<Expand> for Expands {
    fn from_iter<I: IntoIterator<Item = Expand>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

impl FromStr for Expands {
    type Err = ParseError;

    /// Comma-separated list, e.g. `block,transaction`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Expand::from_str(name).map_err(|_| ParseError::Expand(name.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", Expands::default())]
    #[case("block", Expands { block: true, transaction: false })]
    #[case("transaction", Expands { block: false, transaction: true })]
    #[case("block,transaction", Expands::all())]
    #[case(" transaction , block ,", Expands::all())]
    #[case("block,block", Expands { block: true, transaction: false })]
    fn parses_expands(#[case] raw: &str, #[case] expected: Expands) {
        assert_eq!(Ok(expected), raw.parse::<Expands>());
    }

    #[test]
    fn rejects_unknown_expands() {
        assert_eq!(Err(ParseError::Expand("blob".to_string())), "block,blob".parse::<Expands>());
    }
}
