/*!
Non-mutating reversal of ordered sequences.

The core of this crate is [`reverse`], which copies a slice into a fresh
`Vec` and reverses the copy. The input is only ever borrowed, so it is
guaranteed to be unchanged afterwards.

```rust
use seqrev::reverse;

let xs = vec![1, 2, 3];
assert_eq!(reverse(&xs), vec![3, 2, 1]);
assert_eq!(xs, vec![1, 2, 3]);
```

The [`Reversed`] trait offers the same operation as a method on slices,
vectors and deques. The [`record`] module holds a small sample dataset
that demonstrates the operation end to end.
*/

pub use crate::record::{pop_name, reversed_last_name, sample, Record};
pub use crate::reverse::{reverse, reverse_in_place, Reversed};

#[cfg(feature = "use_logging")]
macro_rules! debug {
    ($($tt:tt)*) => {
        log::debug!($($tt)*)
    };
}

#[cfg(not(feature = "use_logging"))]
macro_rules! debug {
    ($($_ignore:tt)*) => {
        ()
    };
}

pub mod record;
mod reverse;

/// Initializes `env_logger`, configured by `RUST_LOG`.
///
/// It is safe to call this more than once. Failures to initialize, which
/// imply that a logger is already installed, are ignored. When the
/// `use_logging` feature is disabled, this does nothing.
pub fn init_logging() {
    #[cfg(feature = "use_logging")]
    {
        let _ = env_logger::try_init();
    }
}
