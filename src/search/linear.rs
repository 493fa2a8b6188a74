/// Scan left to right and return the index of the first element equal
/// to `key`.
///
/// Duplicates resolve to the smallest matching index.
pub fn linear_search<T: PartialEq>(sequence: &[T], key: &T) -> Option<usize> {
    sequence.iter().position(|item| item == key)
}
