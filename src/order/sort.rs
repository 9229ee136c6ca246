use rayon::slice::ParallelSliceMut;

use crate::decl::error::ConfigError;
use crate::decl::extract::extract;
use crate::decl::ordered::AttrOrdered;
use crate::order::compare::cmp_aligned;
use crate::order::value::AttrValue;

type Keys<T> = Vec<AttrValue<<T as AttrOrdered>::Key>>;

/// Extracts every item's key sequence once, then verifies all
/// sequences align. After this, the in-sort comparator cannot fail, so
/// no configuration defect can be folded into a default ordering
/// mid-sort.
fn decorate<T>(items: Vec<T>) -> Result<Vec<(Keys<T>, T)>, ConfigError>
where
    T: AttrOrdered + 'static,
{
    let mut decorated = Vec::with_capacity(items.len());
    for item in items {
        let keys = extract(&item)?;
        decorated.push((keys, item));
    }

    ensure_aligned(decorated.iter().map(|(keys, _)| keys.as_slice()))?;
    Ok(decorated)
}

/// Every row must match the first row in length and selector kind at
/// each position. Kinds partition into type tags and attribute values,
/// so agreement with one row implies pairwise agreement.
fn ensure_aligned<'a, K: Ord + 'a>(
    mut rows: impl Iterator<Item = &'a [AttrValue<K>]>,
) -> Result<(), ConfigError> {
    let Some(first) = rows.next() else {
        return Ok(());
    };

    for row in rows {
        if row.len() != first.len() {
            return Err(ConfigError::MismatchedLength {
                left: first.len(),
                right: row.len(),
            });
        }

        for (position, (a, b)) in first.iter().zip(row).enumerate() {
            if a.partial_cmp(b).is_none() {
                return Err(ConfigError::MismatchedSelector {
                    position,
                    left: a.kind().to_owned(),
                    right: b.kind().to_owned(),
                });
            }
        }
    }

    Ok(())
}

/// Stable sort by declared attribute order.
///
/// Items with equal declared attributes keep their input order, even
/// when they differ in undeclared state.
pub fn sorted<T>(items: Vec<T>) -> Result<Vec<T>, ConfigError>
where
    T: AttrOrdered + 'static,
{
    let mut decorated = decorate(items)?;
    decorated.sort_by(|(a, _), (b, _)| cmp_aligned(a, b));
    Ok(decorated.into_iter().map(|(_, item)| item).collect())
}

/// Parallel twin of [`sorted`] with identical semantics, including
/// stability.
pub fn par_sorted<T>(items: Vec<T>) -> Result<Vec<T>, ConfigError>
where
    T: AttrOrdered + Send + 'static,
    T::Key: Send,
{
    let mut decorated = decorate(items)?;
    decorated.par_sort_by(|(a, _), (b, _)| cmp_aligned(a, b));
    Ok(decorated.into_iter().map(|(_, item)| item).collect())
}
