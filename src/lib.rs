//! A fixed capacity ring buffer that works as either a queue or a stack.
//!
//! It can be stored directly on the stack, in a field or in a `static`, and
//! never allocates. There is no internal locking: every mutation takes
//! `&mut self`, so sharing a buffer across threads needs an outer lock.
//!
//! A buffer is tagged with one access discipline for its whole lifetime:
//!
//! - `Fifo`: first in, first out. `head` is the oldest element and both
//!   indices wrap around. `force_push` overwrites the oldest element when
//!   the buffer is full.
//! - `Lifo`: last in, first out. `head` is the stack top and never wraps.
//!
//! Mixing the two on one buffer does not compile.
//!
//! This crate is inspired by [**goandylok/arraydeque**]
//! [**goandylok/arraydeque**]: https://github.com/goandylok/arraydeque
//!
//! # Feature Flags
//! The **tinyring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for the error types
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for RingBuffer storage.
//!
//!
//! - `tracing`
//!   - Optional
//!   - Emit `trace` level events through the tracing crate when a push is
//!     rejected, a pop or peek finds the buffer empty, `force_push` evicts
//!     an element, or the buffer is flushed.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tinyring = "0.1"
//! ```
//!
//! To use tinyring in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! tinyring = { version = "0.1", default-features = false }
//! ```
//!
//! # Errors
//!
//! `push` on a full buffer fails with `OverflowError`, which hands the
//! rejected element back. `pop` and `peek` on an empty buffer fail with
//! `UnderflowError`. A failed operation never mutates the buffer.
//!
//! # Queue
//! ```
//! use tinyring::{OverflowError, Queue, UnderflowError};
//!
//! let mut queue: Queue<char, 3> = Queue::new();
//!
//! queue.push('A').unwrap();
//! queue.push('B').unwrap();
//! queue.push('C').unwrap();
//! assert_eq!(queue.push('D'), Err(OverflowError::new('D')));
//!
//! // overwrite the oldest element
//! assert_eq!(queue.force_push('E'), Some('A'));
//!
//! assert_eq!(queue.pop(), Ok('B'));
//! assert_eq!(queue.pop(), Ok('C'));
//! assert_eq!(queue.pop(), Ok('E'));
//! assert_eq!(queue.pop(), Err(UnderflowError));
//! ```
//!
//! # Stack
//! ```
//! use tinyring::{Stack, UnderflowError};
//!
//! let mut stack: Stack<char, 3> = Stack::new();
//!
//! stack.push('A').unwrap();
//! stack.push('B').unwrap();
//! stack.push('C').unwrap();
//! assert!(stack.push('D').is_err());
//!
//! assert_eq!(stack.peek(), Ok(&'C'));
//! assert_eq!(stack.pop(), Ok('C'));
//! assert_eq!(stack.pop(), Ok('B'));
//! assert_eq!(stack.pop(), Ok('A'));
//! assert_eq!(stack.pop(), Err(UnderflowError));
//! ```
//!
//! # Static storage
//! ```
//! use std::sync::Mutex;
//! use tinyring::Queue;
//!
//! static SAMPLES: Mutex<Queue<u32, 8>> = Mutex::new(Queue::new());
//!
//! SAMPLES.lock().unwrap().force_push(42);
//! assert_eq!(SAMPLES.lock().unwrap().size(), 1);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

#[macro_use]
mod utils;

mod array;
mod discipline;
pub mod error;
mod ringbuffer;

pub use crate::array::Array;
pub use crate::discipline::{Discipline, Fifo, Lifo};
pub use crate::error::{ErrorKind, OverflowError, UnderflowError};
pub use crate::ringbuffer::RingBuffer;

/// A first-in-first-out `RingBuffer` backed by `[T; N]`.
pub type Queue<T, const N: usize> = RingBuffer<[T; N], Fifo>;

/// A last-in-first-out `RingBuffer` backed by `[T; N]`.
pub type Stack<T, const N: usize> = RingBuffer<[T; N], Lifo>;


#[cfg(test)]
#[cfg(feature = "tracing")]
mod test_tracing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    use super::*;

    struct CountEvents(Arc<AtomicUsize>);

    impl Subscriber for CountEvents {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, _: &Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn events<F: FnOnce()>(f: F) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(CountEvents(count.clone()), f);
        count.load(Ordering::SeqCst)
    }

    // one test body: callsite interest is global, keep subscribers sequential
    #[test]
    fn events_only_on_refused_or_lossy_transitions() {
        // successful push/pop and dropping are silent
        assert_eq!(
            events(|| {
                let mut queue: Queue<u8, 2> = Queue::new();
                queue.push(1).unwrap();
                assert_eq!(queue.peek(), Ok(&1));
                assert_eq!(queue.pop(), Ok(1));
                assert_eq!(queue.force_push(2), None);
                assert_eq!(queue.pop(), Ok(2));
                drop(queue);

                let mut stack: Stack<u8, 2> = Stack::new();
                stack.push(1).unwrap();
                stack.push(2).unwrap();
                assert_eq!(stack.peek(), Ok(&2));
                drop(stack);
            }),
            0
        );

        // flushing an empty buffer is silent
        assert_eq!(
            events(|| {
                let mut queue: Queue<u8, 2> = Queue::new();
                queue.flush();
            }),
            0
        );

        macro_rules! test {
            ($alias:ident) => {{
                let mut full: $alias<u8, 1> = $alias::new();
                full.push(1).unwrap();
                assert_eq!(events(|| assert!(full.push(2).is_err())), 1);
                assert_eq!(events(|| full.flush()), 1);

                let mut empty: $alias<u8, 1> = $alias::new();
                assert_eq!(events(|| assert!(empty.pop().is_err())), 1);
                assert_eq!(events(|| assert!(empty.peek().is_err())), 1);
            }};
        }

        test!(Queue);
        test!(Stack);

        let mut queue: Queue<u8, 1> = Queue::new();
        queue.push(1).unwrap();
        assert_eq!(events(|| assert_eq!(queue.force_push(2), Some(1))), 1);
    }
}
