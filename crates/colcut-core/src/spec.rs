//! Column specification parsing and resolution.
//!
//! A specification is a comma-separated list of tokens. Each token is a
//! column number, a column name, or a `start-end` range where either end
//! may be left out. Ranges split on the *last* dash so names that contain
//! dashes still work on the left side.

use std::str::FromStr;

use tracing::debug;

use crate::error::{CutError, Result};
use crate::options::IndexBase;

/// One end of a range, or a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// All ASCII digits.
    Position(String),
    /// Anything else, matched exactly against the header.
    Name(String),
}

impl Selector {
    fn classify(text: &str) -> Self {
        if text.bytes().all(|b| b.is_ascii_digit()) {
            Self::Position(text.to_string())
        } else {
            Self::Name(text.to_string())
        }
    }

    /// Resolves to a zero-based index into `header`.
    pub fn resolve(&self, base: IndexBase, header: &[&[u8]]) -> Result<usize> {
        match self {
            Self::Position(digits) => resolve_position(digits, base, header.len()),
            Self::Name(name) => header
                .iter()
                .position(|field| *field == name.as_bytes())
                .ok_or_else(|| CutError::ColumnNotFound { name: name.clone() }),
        }
    }
}

fn resolve_position(digits: &str, base: IndexBase, field_count: usize) -> Result<usize> {
    let value = digits
        .parse::<usize>()
        .map_err(|_| CutError::InvalidColumn {
            position: digits.to_string(),
        })?;
    let invalid = || CutError::InvalidColumn {
        position: value.to_string(),
    };

    if value < base.minimum() {
        return Err(invalid());
    }
    let index = value - base.minimum();
    if index >= field_count {
        return Err(invalid());
    }
    Ok(index)
}

/// A parsed specification token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecToken {
    Single(Selector),
    /// `None` on either side means the boundary of the field list.
    Range {
        start: Option<Selector>,
        end: Option<Selector>,
    },
}

impl SpecToken {
    fn parse(token: &str) -> Self {
        match token.rfind('-') {
            Some(dash) => {
                let (left, right) = (&token[..dash], &token[dash + 1..]);
                Self::Range {
                    start: (!left.is_empty()).then(|| Selector::classify(left)),
                    end: (!right.is_empty()).then(|| Selector::classify(right)),
                }
            }
            None => Self::Single(Selector::classify(token)),
        }
    }

    fn resolve_into(
        &self,
        base: IndexBase,
        header: &[&[u8]],
        indices: &mut Vec<usize>,
    ) -> Result<()> {
        match self {
            Self::Single(selector) => indices.push(selector.resolve(base, header)?),
            Self::Range { start, end } => {
                let first = match start {
                    Some(selector) => selector.resolve(base, header)?,
                    None => 0,
                };
                let last = match end {
                    Some(selector) => selector.resolve(base, header)?,
                    None => header.len().saturating_sub(1),
                };
                if first <= last {
                    indices.extend(first..=last);
                } else {
                    indices.extend((last..=first).rev());
                }
            }
        }
        Ok(())
    }
}

/// A column specification, parsed but not yet tied to a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    tokens: Vec<SpecToken>,
}

impl ColumnSpec {
    /// Parses a comma-separated specification.
    ///
    /// Empty tokens are skipped; a specification with no tokens at all is
    /// [`CutError::MissingSpecification`].
    pub fn parse(spec: &str) -> Result<Self> {
        let tokens: Vec<SpecToken> = spec
            .split(',')
            .filter(|token| !token.is_empty())
            .map(SpecToken::parse)
            .collect();
        if tokens.is_empty() {
            return Err(CutError::MissingSpecification);
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[SpecToken] {
        &self.tokens
    }

    /// Resolves every token against the first line's fields.
    ///
    /// Indices keep specification order; repeats are kept.
    pub fn resolve(&self, base: IndexBase, header: &[&[u8]]) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            token.resolve_into(base, header, &mut indices)?;
        }
        debug!(
            tokens = self.tokens.len(),
            header_fields = header.len(),
            columns = indices.len(),
            "resolved column specification"
        );
        Ok(indices)
    }
}

impl FromStr for ColumnSpec {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
