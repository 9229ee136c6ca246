use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque runtime type identity, resolved by the type-identity
/// selector.
///
/// Equality is the only relation with meaning: two tags are equal
/// exactly when they denote the same Rust type. An [`Ord`] instance is
/// still provided so that declarations including type identity keep a
/// total order, but the order is deterministic-yet-opaque (it follows
/// [`TypeId`] and is stable only within a process); callers must not
/// read meaning into which type sorts first.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag of a concrete type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeTag {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Diagnostic name of the tagged type. Not part of the tag's
    /// identity.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

/// The value one selector produced for one instance.
///
/// Values are only ever compared positionally: the i-th value of the
/// left operand against the i-th value of the right. The [`PartialOrd`]
/// instance is the single-position comparison kernel every derived
/// operator reduces through:
///
/// * `Absent` vs `Absent` is equal,
/// * `Absent` sorts strictly before any `Present` value,
/// * two `Present` values delegate to `K`'s own total order,
/// * two `Type` tags compare by their opaque tag order,
/// * a `Type` value against an attribute value is **incomparable**
///   (`None`): the operands were declared with different selector
///   kinds at this position, which the engine reports as a
///   configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue<K> {
    /// The selector produced no value. Ordered before every present
    /// value.
    Absent,
    /// The selector produced a comparable value.
    Present(K),
    /// The type-identity selector's result.
    Type(TypeTag),
}

impl<K> AttrValue<K> {
    /// Kind label used in mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Absent => "absent",
            AttrValue::Present(_) => "value",
            AttrValue::Type(_) => "type-identity",
        }
    }
}

impl<K> From<Option<K>> for AttrValue<K> {
    fn from(value: Option<K>) -> Self {
        match value {
            Some(value) => AttrValue::Present(value),
            None => AttrValue::Absent,
        }
    }
}

impl<K: Ord> PartialOrd for AttrValue<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use AttrValue::*;

        match (self, other) {
            (Absent, Absent) => Some(Ordering::Equal),
            (Absent, Present(_)) => Some(Ordering::Less),
            (Present(_), Absent) => Some(Ordering::Greater),
            (Present(a), Present(b)) => Some(a.cmp(b)),
            (Type(a), Type(b)) => Some(a.cmp(b)),
            (Type(_), _) | (_, Type(_)) => None,
        }
    }
}
