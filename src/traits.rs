/// A bounded, sorted collection of primes.
///
/// Implementors must guarantee that every prime not larger than `bound()` is
/// in the collection, and that iteration yields them in ascending order.
pub trait PrimeBuffer<'a> {
    type PrimeIter: Iterator<Item = &'a u64>;

    /// Directly return an iterator of existing primes
    fn iter(&'a self) -> Self::PrimeIter;

    /// The upper bound of the domain covered by this buffer (inclusive)
    fn bound(&self) -> u64;

    /// Test if the number is in the buffer. Numbers above `bound()` are never contained.
    fn contains(&self, num: u64) -> bool;
}
