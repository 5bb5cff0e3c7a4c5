//! Ordering predicates
//!
//! A queue is bound to one [`LessThan`] value for its whole life. The queue
//! never inspects its elements except through that predicate, so element
//! types do not need to implement `Ord` or `PartialOrd` themselves.
//!
//! The predicate must be a strict weak ordering: irreflexive, transitive and
//! stable across calls. A predicate that breaks this contract cannot corrupt
//! memory, but the order in which elements come out becomes meaningless.
//!
//! # Example
//!
//! ```rust
//! use classic_collections::order::{LessThan, NaturalOrder, Reverse};
//!
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(by_len.less_than(&"ab", &"abc"));
//!
//! assert!(NaturalOrder.less_than(&1, &2));
//! assert!(Reverse(NaturalOrder).less_than(&2, &1));
//! ```

/// A strict "less than" predicate over `T`
pub trait LessThan<T: ?Sized> {
    /// Returns true if `a` ranks strictly before `b`
    fn less_than(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> LessThan<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders elements by their own `PartialOrd` implementation
///
/// This is the default predicate for [`Queue`](crate::queue::Queue) and
/// [`BoundedQueue`](crate::bounded::BoundedQueue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> LessThan<T> for NaturalOrder {
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Flips the wrapped predicate
///
/// `Reverse(NaturalOrder)` turns a min-queue into a max-queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: LessThan<T>> LessThan<T> for Reverse<C> {
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.0.less_than(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_predicate() {
        let less = |a: &i32, b: &i32| a < b;
        assert!(less.less_than(&1, &2));
        assert!(!less.less_than(&2, &1));
        assert!(!less.less_than(&2, &2));
    }

    #[test]
    fn test_natural_order_strings() {
        assert!(NaturalOrder.less_than("apple", "banana"));
        assert!(!NaturalOrder.less_than("banana", "apple"));
        assert!(!NaturalOrder.less_than("apple", "apple"));
    }

    #[test]
    fn test_reverse_is_irreflexive() {
        let rev = Reverse(NaturalOrder);
        assert!(rev.less_than(&5, &3));
        assert!(!rev.less_than(&3, &5));
        assert!(!rev.less_than(&4, &4));
    }

    #[test]
    fn test_reverse_of_closure() {
        let by_len = |a: &String, b: &String| a.len() < b.len();
        let longest_first = Reverse(by_len);
        assert!(longest_first.less_than(&"abcd".to_string(), &"ab".to_string()));
    }
}
