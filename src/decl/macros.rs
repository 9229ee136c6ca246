/// Registers a type's comparison declaration from one selector list.
///
/// Expands to the [`AttrOrdered`](crate::decl::ordered::AttrOrdered)
/// implementation (static declaration plus exhaustive accessor
/// dispatch) and to `PartialEq`/`Eq`/`PartialOrd`/`Ord` impls whose
/// operators all reduce through the same per-selector comparison, in
/// declaration order with nil-first semantics. Because every piece
/// expands from the same list, an unresolvable selector or a shape
/// mismatch is impossible for same-type comparison.
///
/// Selectors are field names, each of a type readable as the declared
/// `Key` via [`ReadAttr`](crate::decl::ordered::ReadAttr); the `type`
/// keyword declares the type-identity selector. The target type must
/// not derive or implement the comparison traits itself.
///
/// ```
/// use attrord::attr_ordered;
///
/// struct Version {
///     major: u32,
///     minor: Option<u32>,
/// }
///
/// attr_ordered! {
///     impl Version {
///         type Key = u32;
///         order = [major, minor];
///     }
/// }
///
/// let released = Version { major: 1, minor: Some(2) };
/// let draft = Version { major: 1, minor: None };
/// assert!(draft < released);
/// ```
#[macro_export]
macro_rules! attr_ordered {
    (impl $ty:ty {
        type Key = $key:ty;
        order = [$($sel:tt),+ $(,)?];
    }) => {
        impl $crate::decl::ordered::AttrOrdered for $ty {
            type Key = $key;

            fn declaration(&self) -> &$crate::decl::selector::Declaration {
                static DECLARATION: $crate::decl::selector::Declaration =
                    $crate::decl::selector::Declaration::from_static(&[
                        $($crate::__attr_selector!($sel)),+
                    ]);
                &DECLARATION
            }

            fn attr(
                &self,
                name: &str,
            ) -> ::core::result::Result<
                ::core::option::Option<Self::Key>,
                $crate::decl::error::ConfigError,
            > {
                $($crate::__attr_lookup!(self, name, $key, $sel);)+
                ::core::result::Result::Err(
                    $crate::decl::error::ConfigError::UnknownSelector {
                        selector: ::std::borrow::ToOwned::to_owned(name),
                        type_name: ::core::any::type_name::<Self>(),
                    },
                )
            }
        }

        impl ::core::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $(
                    let left = $crate::__attr_key!($key, self, $sel);
                    let right = $crate::__attr_key!($key, other, $sel);
                    match ::core::cmp::PartialOrd::partial_cmp(&left, &right) {
                        ::core::option::Option::Some(::core::cmp::Ordering::Equal) => {}
                        ::core::option::Option::Some(order) => return order,
                        // Both sides resolved the same selector, so the
                        // kinds always line up.
                        ::core::option::Option::None => ::core::unreachable!(),
                    }
                )+
                ::core::cmp::Ordering::Equal
            }
        }

        impl ::core::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                ::core::cmp::Ord::cmp(self, other) == ::core::cmp::Ordering::Equal
            }
        }

        impl ::core::cmp::Eq for $ty {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_selector {
    (type) => {
        $crate::decl::selector::Selector::TypeIdentity
    };
    ($field:ident) => {
        $crate::decl::selector::Selector::Attr(::core::stringify!($field))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_lookup {
    ($this:expr, $name:expr, $key:ty, type) => {};
    ($this:expr, $name:expr, $key:ty, $field:ident) => {
        if $name == ::core::stringify!($field) {
            return ::core::result::Result::Ok($crate::decl::ordered::ReadAttr::<$key>::read(
                &$this.$field,
            ));
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attr_key {
    ($key:ty, $this:expr, type) => {
        $crate::order::value::AttrValue::<$key>::Type(
            $crate::decl::ordered::AttrOrdered::type_tag($this),
        )
    };
    ($key:ty, $this:expr, $field:ident) => {
        match $crate::decl::ordered::ReadAttr::<$key>::read(&$this.$field) {
            ::core::option::Option::Some(value) => $crate::order::value::AttrValue::Present(value),
            ::core::option::Option::None => $crate::order::value::AttrValue::<$key>::Absent,
        }
    };
}
