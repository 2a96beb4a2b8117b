//! The six kinds of simple-selector parts and their grammar ranks.

use std::fmt;

use bitflags::bitflags;

/// A kind of simple-selector part.
///
/// Variants are declared in grammar order, so the derived `Ord` is the rank
/// order: `Element < Id < Class < Attribute < PseudoClass < PseudoElement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    /// Type selector (`div`).
    Element,
    /// ID selector (`#main`).
    Id,
    /// Class selector (`.primary`).
    Class,
    /// Attribute selector (`[href$=".png"]`).
    Attribute,
    /// Pseudo-class (`:hover`).
    PseudoClass,
    /// Pseudo-element (`::before`).
    PseudoElement,
}

impl PartKind {
    /// All kinds in grammar order.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Grammar rank, 0 for element through 5 for pseudo-element.
    pub fn rank(self) -> u8 {
        match self {
            PartKind::Element => 0,
            PartKind::Id => 1,
            PartKind::Class => 2,
            PartKind::Attribute => 3,
            PartKind::PseudoClass => 4,
            PartKind::PseudoElement => 5,
        }
    }

    /// Text written before the value.
    pub fn prefix(self) -> &'static str {
        match self {
            PartKind::Element => "",
            PartKind::Id => "#",
            PartKind::Class => ".",
            PartKind::Attribute => "[",
            PartKind::PseudoClass => ":",
            PartKind::PseudoElement => "::",
        }
    }

    /// Text written after the value.
    pub fn suffix(self) -> &'static str {
        match self {
            PartKind::Attribute => "]",
            _ => "",
        }
    }

    /// Whether this part may occur at most once per simple selector.
    pub fn is_singleton(self) -> bool {
        self.singleton_flag().is_some()
    }

    pub(crate) fn singleton_flag(self) -> Option<Singletons> {
        match self {
            PartKind::Element => Some(Singletons::ELEMENT),
            PartKind::Id => Some(Singletons::ID),
            PartKind::PseudoElement => Some(Singletons::PSEUDO_ELEMENT),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => None,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Singleton parts already present on an expression.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(crate) struct Singletons: u8 {
        const ELEMENT        = 0b0001;
        const ID             = 0b0010;
        const PSEUDO_ELEMENT = 0b0100;
    }
}

/// A rendered-on-demand simple selector fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Part {
    pub kind: PartKind,
    pub value: String,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.value, self.kind.suffix())
    }
}
