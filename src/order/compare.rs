use std::cmp::Ordering;

use crate::decl::error::ConfigError;
use crate::decl::extract::extract;
use crate::decl::ordered::AttrOrdered;
use crate::order::value::AttrValue;

/// Reduces two positionally aligned value sequences to one three-way
/// result.
///
/// The walk visits pairs in order and stops at the first pair that
/// differs; pairs that are both absent count as equal at their
/// position. Two empty sequences are equal. Sequences of different
/// lengths, or sequences whose kinds disagree at a position, come from
/// mismatched declarations and are reported as a [`ConfigError`]
/// rather than truncated or padded.
pub fn compare_keys<K: Ord>(
    left: &[AttrValue<K>],
    right: &[AttrValue<K>],
) -> Result<Ordering, ConfigError> {
    if left.len() != right.len() {
        return Err(ConfigError::MismatchedLength {
            left: left.len(),
            right: right.len(),
        });
    }

    for (position, (a, b)) in left.iter().zip(right).enumerate() {
        match a.partial_cmp(b) {
            Some(Ordering::Equal) => {}
            Some(order) => return Ok(order),
            None => {
                return Err(ConfigError::MismatchedSelector {
                    position,
                    left: a.kind().to_owned(),
                    right: b.kind().to_owned(),
                })
            }
        }
    }

    Ok(Ordering::Equal)
}

/// Walk over sequences already known to be aligned in length and kind.
///
/// Callers must have verified alignment beforehand (matching
/// declarations, or [`sort`](crate::order::sort)'s up-front shape
/// check); with that invariant the walk cannot fail.
pub(crate) fn cmp_aligned<K: Ord>(left: &[AttrValue<K>], right: &[AttrValue<K>]) -> Ordering {
    debug_assert_eq!(left.len(), right.len());

    for (a, b) in left.iter().zip(right) {
        match a.partial_cmp(b) {
            Some(Ordering::Equal) => {}
            Some(order) => return order,
            None => {
                debug_assert!(false, "selector kinds diverged after alignment check");
                return Ordering::Equal;
            }
        }
    }

    Ordering::Equal
}

/// Three-way comparison of two declared-comparable instances.
///
/// The operands may be of different types as long as they share a key
/// type and declare the same selector sequence; equivalence is
/// structural by design, and nominal type identity participates only
/// when the declarations include the type-identity selector.
/// Divergent declarations are a configuration defect, surfaced
/// immediately.
pub fn compare<L, R>(left: &L, right: &R) -> Result<Ordering, ConfigError>
where
    L: AttrOrdered + 'static,
    R: AttrOrdered<Key = L::Key> + 'static,
{
    left.declaration().ensure_matches(right.declaration())?;

    let left_keys = extract(left)?;
    let right_keys = extract(right)?;

    compare_keys(&left_keys, &right_keys)
}

/// The six relational predicates, each derived mechanically from the
/// single three-way result of [`attr_cmp`](Self::attr_cmp).
///
/// Deriving them from one reduction (instead of computing any of them
/// independently) makes them internally consistent by construction:
/// exactly one of `attr_lt`, `attr_eq`, `attr_gt` holds for any pair
/// of successfully compared operands.
///
/// Blanket-implemented for every [`AttrOrdered`] type.
pub trait AttrOrderedExt: AttrOrdered + Sized + 'static {
    /// Three-way comparison against any implementor sharing this key
    /// type.
    fn attr_cmp<R>(&self, other: &R) -> Result<Ordering, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        compare(self, other)
    }

    /// `self` and `other` compare equal.
    fn attr_eq<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? == Ordering::Equal)
    }

    /// `self` and `other` compare unequal.
    fn attr_ne<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? != Ordering::Equal)
    }

    /// `self` compares strictly less than `other`.
    fn attr_lt<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? == Ordering::Less)
    }

    /// `self` compares less than or equal to `other`.
    fn attr_le<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? != Ordering::Greater)
    }

    /// `self` compares strictly greater than `other`.
    fn attr_gt<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? == Ordering::Greater)
    }

    /// `self` compares greater than or equal to `other`.
    fn attr_ge<R>(&self, other: &R) -> Result<bool, ConfigError>
    where
        R: AttrOrdered<Key = Self::Key> + 'static,
    {
        Ok(self.attr_cmp(other)? != Ordering::Less)
    }
}

impl<T: AttrOrdered + 'static> AttrOrderedExt for T {}
