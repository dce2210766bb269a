use std::collections::VecDeque;

/// Returns a new vector with the elements of `items` in reverse order.
///
/// The input is left untouched. The result has the same length as `items`
/// and satisfies `reverse(xs)[i] == xs[xs.len() - 1 - i]` for every valid
/// `i`. Every slice, including the empty one, is valid input.
///
/// # Example
///
/// ```rust
/// use seqrev::reverse;
///
/// let words = ["world", "hello"];
/// assert_eq!(reverse(&words), vec!["hello", "world"]);
/// ```
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    debug!("reversing a sequence of {} elements", items.len());
    let mut rev = items.to_vec();
    reverse_in_place(&mut rev);
    rev
}

/// Reverses the order of `items` in place.
///
/// Element `i` is swapped with element `len - 1 - i`, so a slice of odd
/// length keeps its middle element where it is.
pub fn reverse_in_place<T>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len / 2 {
        items.swap(i, len - 1 - i);
    }
}

/// Sequences that can produce a reversed copy of themselves.
///
/// Implementations must leave `self` unchanged and return an independently
/// owned container, exactly like [`reverse`].
pub trait Reversed {
    /// The container type of the reversed copy.
    type Output;

    /// Returns a reversed copy of `self`.
    fn reversed(&self) -> Self::Output;
}

impl<T: Clone> Reversed for [T] {
    type Output = Vec<T>;

    fn reversed(&self) -> Vec<T> {
        reverse(self)
    }
}

impl<T: Clone> Reversed for Vec<T> {
    type Output = Vec<T>;

    fn reversed(&self) -> Vec<T> {
        reverse(self)
    }
}

impl<T: Clone> Reversed for VecDeque<T> {
    type Output = VecDeque<T>;

    fn reversed(&self) -> VecDeque<T> {
        debug!("reversing a deque of {} elements", self.len());
        self.iter().rev().cloned().collect()
    }
}
