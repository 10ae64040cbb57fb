/// Returns `true` if every item produced by `source` is equal to the first.
///
/// The source is pulled one item at a time and abandoned at the first item
/// that differs from the first, so an infinite source is fine as long as it
/// eventually changes. An infinite source that never changes will never
/// return. An empty source is uniform.
pub fn all_the_same<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut items = source.into_iter();
    items
        .next()
        .map(|head| items.all(|x| x == head))
        .unwrap_or(true)
}

/// Like [`all_the_same`], for sources whose items may fail.
///
/// The first error pulled before the answer is known is returned as-is.
pub fn try_all_the_same<I, T, E>(source: I) -> Result<bool, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    T: PartialEq,
{
    let mut items = source.into_iter();
    let head = match items.next() {
        Some(head) => head?,
        None => return Ok(true),
    };

    for item in items {
        if item? != head {
            return Ok(false);
        }
    }

    Ok(true)
}

pub trait IsUniform {
    fn is_uniform(self) -> bool;
}

impl<T: IntoIterator> IsUniform for T
where
    T::Item: PartialEq,
{
    fn is_uniform(self) -> bool {
        all_the_same(self)
    }
}

pub trait TryIsUniform<E> {
    fn try_is_uniform(self) -> Result<bool, E>;
}

impl<I, T, E> TryIsUniform<E> for I
where
    I: IntoIterator<Item = Result<T, E>>,
    T: PartialEq,
{
    fn try_is_uniform(self) -> Result<bool, E> {
        try_all_the_same(self)
    }
}
