use crate::decl::error::ConfigError;
use crate::decl::selector::Declaration;
use crate::order::value::TypeTag;

/// Comparison semantics declared as an ordered attribute list.
///
/// Implementing this trait gives a type a deterministic three-way
/// comparison against any other implementor sharing the same `Key`
/// type, provided both sides declare the same selector sequence.
/// Equivalence is defined purely by declared attribute content, never
/// by nominal type, unless the declaration includes
/// [`Selector::TypeIdentity`](crate::decl::selector::Selector).
///
/// # Contract
///
/// For the derived order to be lawful, implementations must satisfy:
///
/// * **Fixed declaration**: [`declaration`](Self::declaration) returns
///   the same selector sequence for every instance of the type, for
///   the lifetime of the process.
/// * **Pure accessors**: [`attr`](Self::attr) reads instance state and
///   nothing else; calling it must not observe or cause side effects.
/// * **Resolvable selectors**: every `Selector::Attr(name)` in the
///   declaration is answered with `Ok`; `Err` is reserved for selector
///   names the type does not recognize.
///
/// The [`attr_ordered!`](crate::attr_ordered) macro generates an
/// implementation meeting all three obligations from a single selector
/// list, along with the `PartialEq`/`Eq`/`PartialOrd`/`Ord` operator
/// impls for same-type comparison.
pub trait AttrOrdered {
    /// Common comparable type for all declared attribute values.
    ///
    /// Types whose declared attributes are heterogeneous use an enum
    /// with a derived [`Ord`] here.
    type Key: Ord;

    /// The selector sequence this type registered, in tie-break order.
    fn declaration(&self) -> &Declaration;

    /// Resolves one named attribute accessor against this instance.
    ///
    /// `Ok(None)` is the explicit absence marker: a valid, ordered
    /// state that sorts before every present value. `Err` means the
    /// name is not an accessor of this type, which is a declaration
    /// defect rather than a comparison outcome.
    fn attr(&self, name: &str) -> Result<Option<Self::Key>, ConfigError>;

    /// The runtime identity resolved by the type-identity selector.
    fn type_tag(&self) -> TypeTag
    where
        Self: Sized + 'static,
    {
        TypeTag::of::<Self>()
    }
}

/// Adapts a stored field to the accessor contract: a present value or
/// an explicit absence marker.
///
/// Blanket implementations cover the two common field shapes, so
/// `String` feeds a `Key = String` declaration directly and
/// `Option<String>` feeds it absence-aware. Fields needing a
/// conversion into the declaring type's `Key` implement this trait
/// themselves.
pub trait ReadAttr<K> {
    /// Reads the attribute value, `None` marking absence.
    fn read(&self) -> Option<K>;
}

impl<K: Clone> ReadAttr<K> for K {
    #[inline]
    fn read(&self) -> Option<K> {
        Some(self.clone())
    }
}

impl<K: Clone> ReadAttr<K> for Option<K> {
    #[inline]
    fn read(&self) -> Option<K> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::selector::Selector;

    struct Employee {
        last_name: Option<String>,
        first_name: Option<String>,
    }

    impl AttrOrdered for Employee {
        type Key = String;

        fn declaration(&self) -> &Declaration {
            static DECLARATION: Declaration = Declaration::from_static(&[
                Selector::Attr("last_name"),
                Selector::Attr("first_name"),
            ]);
            &DECLARATION
        }

        fn attr(&self, name: &str) -> Result<Option<String>, ConfigError> {
            match name {
                "last_name" => Ok(self.last_name.read()),
                "first_name" => Ok(self.first_name.read()),
                _ => Err(ConfigError::UnknownSelector {
                    selector: name.to_owned(),
                    type_name: std::any::type_name::<Self>(),
                }),
            }
        }
    }

    #[test]
    fn present_field_reads_as_some() {
        let employee = Employee {
            last_name: Some("Jones".to_owned()),
            first_name: None,
        };

        assert_eq!(
            employee.attr("last_name"),
            Ok(Some("Jones".to_owned()))
        );
        assert_eq!(employee.attr("first_name"), Ok(None));
    }

    #[test]
    fn unknown_selector_is_a_config_error() {
        let employee = Employee {
            last_name: None,
            first_name: None,
        };

        let result = employee.attr("middle_name");
        assert!(matches!(
            result,
            Err(ConfigError::UnknownSelector { ref selector, .. }) if selector == "middle_name"
        ));
    }

    #[test]
    fn type_tag_is_shared_by_instances_of_one_type() {
        let a = Employee {
            last_name: None,
            first_name: None,
        };
        let b = Employee {
            last_name: Some("Kelley".to_owned()),
            first_name: Some("C".to_owned()),
        };

        assert_eq!(a.type_tag(), b.type_tag());
        assert_eq!(a.type_tag(), TypeTag::of::<Employee>());
    }

    #[test]
    fn read_attr_on_plain_value_is_always_present() {
        let name = "Jones".to_owned();
        let read: Option<String> = name.read();
        assert_eq!(read, Some("Jones".to_owned()));
    }

    #[test]
    fn read_attr_on_option_preserves_absence() {
        let present: Option<String> = Some("Jones".to_owned());
        let absent: Option<String> = None;

        let read_present: Option<String> = present.read();
        let read_absent: Option<String> = absent.read();

        assert_eq!(read_present, Some("Jones".to_owned()));
        assert_eq!(read_absent, None);
    }
}
