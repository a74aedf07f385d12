/// Maps a key to a non-negative integer. The table reduces the result modulo its
/// capacity to pick a bucket, so a strategy never needs to know the table size.
///
/// Any `Fn(&str) -> usize` is a strategy, so plain functions such as
/// [`hash_function_1`] and closures can be passed directly.
pub trait HashStrategy {
    fn hash(&self, key: &str) -> usize;
}

impl<F> HashStrategy for F
where
    F: Fn(&str) -> usize,
{
    #[inline]
    fn hash(&self, key: &str) -> usize {
        self(key)
    }
}

/// Sum of the character codes of `key`.
pub fn hash_function_1(key: &str) -> usize {
    key.chars()
        .fold(0usize, |hash, letter| hash.wrapping_add(letter as usize))
}

/// Sum of the character codes of `key`, each weighted by its one-based position.
pub fn hash_function_2(key: &str) -> usize {
    key.chars().enumerate().fold(0usize, |hash, (index, letter)| {
        hash.wrapping_add((index + 1).wrapping_mul(letter as usize))
    })
}
