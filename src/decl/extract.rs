use crate::decl::error::ConfigError;
use crate::decl::ordered::AttrOrdered;
use crate::decl::selector::Selector;
use crate::order::value::AttrValue;

/// Resolves each declared selector against `instance`, in declaration
/// order, into the value sequence the comparator engine consumes.
///
/// One entry is produced per selector: the type-identity selector
/// yields the instance's runtime tag, attribute selectors yield the
/// accessor's value or the absence marker. Extraction is pure with
/// respect to instance state; the sequence is transient and discarded
/// once reduced.
pub fn extract<T>(instance: &T) -> Result<Vec<AttrValue<T::Key>>, ConfigError>
where
    T: AttrOrdered + 'static,
{
    let declaration = instance.declaration();
    let mut keys = Vec::with_capacity(declaration.len());

    for selector in declaration.selectors() {
        keys.push(match *selector {
            Selector::TypeIdentity => AttrValue::Type(instance.type_tag()),
            Selector::Attr(name) => match instance.attr(name)? {
                Some(value) => AttrValue::Present(value),
                None => AttrValue::Absent,
            },
        });
    }

    Ok(keys)
}
