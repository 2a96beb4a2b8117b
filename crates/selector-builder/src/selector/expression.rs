use std::fmt;

use crate::error::{Result, SelectorError};
use crate::selector::combinator::Combinator;
use crate::selector::part::{Part, PartKind, Singletons};

/// Observable position of an expression in the builder grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorState {
    /// Nothing added yet.
    Empty,
    /// The last thing added was a simple part of this kind.
    After(PartKind),
    /// The last thing added was a combination with another expression.
    Combined,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Fragment {
    Simple(Part),
    Combined {
        combinator: Combinator,
        right: Box<SelectorExpression>,
    },
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Simple(part) => write!(f, "{}", part),
            // The spaces are written even for the descendant token.
            Fragment::Combined { combinator, right } => {
                write!(f, " {} {}", combinator.token(), right)
            }
        }
    }
}

/// A selector under construction.
///
/// Parts must be added in grammar order (element, id, class, attribute,
/// pseudo-class, pseudo-element). Element, id and pseudo-element may each
/// appear once; the others repeat freely.
///
/// ```rust
/// use selector_builder::element;
///
/// let sel = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), selector_builder::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorExpression {
    fragments: Vec<Fragment>,
    /// Highest-ranked part recorded so far.
    last_rank: Option<PartKind>,
    singletons: Singletons,
}

impl SelectorExpression {
    /// Create an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an expression from a single part. A fresh expression accepts any
    /// first part, so this cannot fail.
    pub(crate) fn starting_with(kind: PartKind, value: impl Into<String>) -> Self {
        let mut expr = Self::new();
        expr.record(kind, value.into());
        expr
    }

    /// Add a type selector. At most once.
    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Element, value)
    }

    /// Add `#value`. At most once.
    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Id, value)
    }

    /// Add `.value`.
    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Class, value)
    }

    /// Add `[value]`. The value is the raw attribute expression, e.g.
    /// `href$=".png"`, and is not inspected.
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Attribute, value)
    }

    /// Add `:value`.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::PseudoClass, value)
    }

    /// Add `::value`. At most once.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::PseudoElement, value)
    }

    /// Append ` {combinator} {other}`.
    ///
    /// Rank and singleton bookkeeping are left untouched, so parts may still
    /// be chained afterwards; they are appended after the right operand.
    pub fn combine(mut self, combinator: Combinator, other: SelectorExpression) -> Self {
        log::trace!("combine `{}` {:?} `{}`", self, combinator, other);
        self.fragments.push(Fragment::Combined {
            combinator,
            right: Box::new(other),
        });
        self
    }

    /// Render the selector text.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Highest-ranked part recorded so far, ignoring combined operands.
    pub fn last_rank(&self) -> Option<PartKind> {
        self.last_rank
    }

    pub fn state(&self) -> SelectorState {
        match self.fragments.last() {
            None => SelectorState::Empty,
            Some(Fragment::Simple(part)) => SelectorState::After(part.kind),
            Some(Fragment::Combined { .. }) => SelectorState::Combined,
        }
    }

    fn push(mut self, kind: PartKind, value: impl Into<String>) -> Result<Self> {
        self.check(kind)?;
        self.record(kind, value.into());
        Ok(self)
    }

    /// Duplicates are reported before ordering so that a repeated element is
    /// always a duplicate, wherever it appears.
    fn check(&self, kind: PartKind) -> Result<()> {
        if let Some(flag) = kind.singleton_flag() {
            if self.singletons.contains(flag) {
                log::debug!("rejected duplicate {} on `{}`", kind, self);
                return Err(SelectorError::duplicate(kind, self.to_string()));
            }
        }

        match self.last_rank {
            Some(last) if last > kind => {
                log::debug!("rejected {} after {} on `{}`", kind, last, self);
                Err(SelectorError::order(kind, last, self.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn record(&mut self, kind: PartKind, value: String) {
        log::trace!("add {} {:?}", kind, value);
        if let Some(flag) = kind.singleton_flag() {
            self.singletons.insert(flag);
        }
        self.last_rank = Some(self.last_rank.map_or(kind, |last| last.max(kind)));
        self.fragments.push(Fragment::Simple(Part { kind, value }));
    }
}

impl fmt::Display for SelectorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}

impl From<SelectorExpression> for String {
    fn from(expr: SelectorExpression) -> Self {
        expr.to_string()
    }
}
