//! Access disciplines for `RingBuffer`.
//!
//! The two disciplines read the `head` index differently, so a buffer is
//! tagged with exactly one of them for its whole lifetime.

/// Tagging trait for providing an access discipline to `RingBuffer`.
///
/// This trait is sealed: `Fifo` and `Lifo` are the only implementors.
pub trait Discipline: private::Sealed {
    #[doc(hidden)]
    /// Physical index of the first slot of the occupied window.
    fn window_start(head: usize, count: usize, capacity: usize) -> usize;
}

/// Discipline for `RingBuffer` that specifies first-in-first-out semantics.
///
/// ### Indices:
///
/// `head` points at the **oldest** element and `tail` at the next free slot.
/// Both **wrap** around the end of the storage.
///
/// ### Pushing to a full buffer:
///
/// `push` exits early **without performing any mutation**. `force_push`
/// **overwrites** the oldest element instead.
pub struct Fifo;

impl Discipline for Fifo {
    #[inline]
    fn window_start(head: usize, _count: usize, _capacity: usize) -> usize {
        head
    }
}

/// Discipline for `RingBuffer` that specifies last-in-first-out semantics.
///
/// ### Indices:
///
/// `head` is the **stack top**: the number of occupied slots counted from
/// slot 0. It **never wraps**, and `tail` is unused.
///
/// ### Pushing to a full buffer:
///
/// `push` exits early **without performing any mutation**. There is no
/// overwriting push.
pub struct Lifo;

impl Discipline for Lifo {
    #[inline]
    fn window_start(head: usize, count: usize, _capacity: usize) -> usize {
        debug_assert_eq!(head, count);
        0
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Fifo {}
    impl Sealed for super::Lifo {}
}
