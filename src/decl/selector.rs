use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashSet;

use crate::decl::error::ConfigError;

/// A named rule extracting one comparable value from an instance.
///
/// Either a reference to a named attribute accessor, or the special
/// type-identity pseudo-selector that resolves to the instance's
/// runtime [`TypeTag`](crate::order::value::TypeTag) instead of a
/// stored attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A named read accessor on the declaring type.
    Attr(&'static str),
    /// The instance's runtime type, compared for discrimination only.
    TypeIdentity,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Attr(name) => f.write_str(name),
            Selector::TypeIdentity => f.write_str("type-identity"),
        }
    }
}

/// The ordered selector list a type registers for comparison.
///
/// Invariants:
///
/// * Fixed per type at definition time and never mutated afterwards,
///   so unrestricted concurrent reads are safe.
/// * Insertion order is significant: it defines tie-break precedence,
///   with earlier selectors taking priority.
///
/// Declarations written out in code live in a `static` via
/// [`Declaration::from_static`]; declarations assembled at run time
/// own their selector list via [`Declaration::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    selectors: Cow<'static, [Selector]>,
}

impl Declaration {
    /// Wraps a static selector list without allocating.
    pub const fn from_static(selectors: &'static [Selector]) -> Self {
        Declaration {
            selectors: Cow::Borrowed(selectors),
        }
    }

    /// Builds a declaration from an owned selector list.
    ///
    /// A duplicate selector can never break a tie its first occurrence
    /// left equal, so repeating one is always a declaration mistake.
    pub fn new(selectors: Vec<Selector>) -> Self {
        debug_assert!(
            {
                let mut seen = FxHashSet::default();
                selectors.iter().all(|selector| seen.insert(selector))
            },
            "declaration contains duplicate selectors"
        );

        Declaration {
            selectors: Cow::Owned(selectors),
        }
    }

    /// The declared selectors, in tie-break order.
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// Number of declared selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Returns true when nothing was declared. Two instances of such a
    /// type always compare equal.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Whether the declaration opts in to discrimination by runtime
    /// type.
    pub fn includes_type_identity(&self) -> bool {
        self.selectors.contains(&Selector::TypeIdentity)
    }

    /// Verifies that `self` and `other` declare the same selector
    /// sequence in the same order.
    ///
    /// Comparing operands whose declarations differ has no meaningful
    /// positional interpretation, so the divergence is reported as a
    /// [`ConfigError`] instead of being truncated or padded over.
    pub fn ensure_matches(&self, other: &Self) -> Result<(), ConfigError> {
        if self.len() != other.len() {
            return Err(ConfigError::MismatchedLength {
                left: self.len(),
                right: other.len(),
            });
        }

        for (position, (left, right)) in self
            .selectors()
            .iter()
            .zip(other.selectors())
            .enumerate()
        {
            if left != right {
                return Err(ConfigError::MismatchedSelector {
                    position,
                    left: left.to_string(),
                    right: right.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_keep_declaration_order() {
        let declaration = Declaration::new(vec![
            Selector::TypeIdentity,
            Selector::Attr("last_name"),
            Selector::Attr("first_name"),
        ]);

        assert_eq!(declaration.len(), 3);
        assert_eq!(
            declaration.selectors(),
            &[
                Selector::TypeIdentity,
                Selector::Attr("last_name"),
                Selector::Attr("first_name"),
            ]
        );
    }

    #[test]
    fn static_and_owned_declarations_compare_equal() {
        static SELECTORS: [Selector; 2] =
            [Selector::Attr("last_name"), Selector::Attr("first_name")];

        let fixed = Declaration::from_static(&SELECTORS);
        let owned = Declaration::new(SELECTORS.to_vec());

        assert_eq!(fixed, owned);
        assert!(fixed.ensure_matches(&owned).is_ok());
    }

    #[test]
    fn empty_declaration_is_empty() {
        let declaration = Declaration::new(Vec::new());
        assert!(declaration.is_empty());
        assert_eq!(declaration.len(), 0);
    }

    #[test]
    fn includes_type_identity_only_when_declared() {
        let plain = Declaration::new(vec![Selector::Attr("an_attribute")]);
        let tagged = Declaration::new(vec![
            Selector::TypeIdentity,
            Selector::Attr("an_attribute"),
        ]);

        assert!(!plain.includes_type_identity());
        assert!(tagged.includes_type_identity());
    }

    #[test]
    fn ensure_matches_reports_length_divergence() {
        let short = Declaration::new(vec![Selector::Attr("last_name")]);
        let long = Declaration::new(vec![
            Selector::Attr("last_name"),
            Selector::Attr("first_name"),
        ]);

        assert_eq!(
            short.ensure_matches(&long),
            Err(ConfigError::MismatchedLength { left: 1, right: 2 })
        );
    }

    #[test]
    fn ensure_matches_reports_first_divergent_position() {
        let left = Declaration::new(vec![
            Selector::Attr("last_name"),
            Selector::Attr("first_name"),
        ]);
        let right = Declaration::new(vec![
            Selector::Attr("last_name"),
            Selector::TypeIdentity,
        ]);

        assert_eq!(
            left.ensure_matches(&right),
            Err(ConfigError::MismatchedSelector {
                position: 1,
                left: "first_name".to_owned(),
                right: "type-identity".to_owned(),
            })
        );
    }

    #[test]
    fn selector_display_names() {
        assert_eq!(Selector::Attr("last_name").to_string(), "last_name");
        assert_eq!(Selector::TypeIdentity.to_string(), "type-identity");
    }
}
