use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr;

use crate::array::Array;
use crate::discipline::{Discipline, Fifo};
use crate::utils::wrap_add;

mod fifo;
mod lifo;
mod trait_impls;

/// `RingBuffer` is a fixed capacity ring buffer.
///
/// It can be stored directly on the stack, in a struct field or in a
/// `static` if needed; it never allocates.
///
/// The discipline `D` is fixed for the lifetime of the buffer. With `Fifo`
/// (the default) the buffer is a queue: `push` adds the newest element,
/// `pop` and `peek` see the oldest one and `force_push` overwrites the oldest
/// element when full. With `Lifo` it is a stack growing from slot 0: `pop`
/// and `peek` see the most recently pushed element.
///
/// # Capacity
///
/// The whole backing array is usable: `capacity()` is `backed_array.len()`.
/// A zero-length backing array is rejected at compile time.
///
/// ```compile_fail
/// use tinyring::Queue;
///
/// let buf: Queue<u8, 0> = Queue::new();
/// ```
pub struct RingBuffer<A: Array, D: Discipline = Fifo> {
    xs: MaybeUninit<A>,
    head: usize,
    tail: usize,
    count: usize,
    phantom: PhantomData<D>,
}

impl<A: Array, D: Discipline> RingBuffer<A, D> {
    const NONZERO_CAPACITY: () = assert!(A::CAPACITY > 0, "RingBuffer capacity must be at least 1");

    #[inline]
    fn ptr(&self) -> *const A::Item {
        self.xs.as_ptr() as *const A::Item
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut A::Item {
        self.xs.as_mut_ptr() as *mut A::Item
    }

    /// Physical index of the `offset`-th element of the occupied window.
    #[inline]
    fn slot(&self, offset: usize) -> usize {
        debug_assert!(offset < self.count);
        let start = D::window_start(self.head, self.count, A::CAPACITY);
        wrap_add(start, offset, A::CAPACITY)
    }

    #[inline]
    unsafe fn buffer_ref(&self, index: usize) -> &A::Item {
        debug_assert!(index < A::CAPACITY);
        &*self.ptr().add(index)
    }

    #[inline]
    unsafe fn buffer_read(&mut self, index: usize) -> A::Item {
        debug_assert!(index < A::CAPACITY);
        ptr::read(self.ptr().add(index))
    }

    #[inline]
    unsafe fn buffer_write(&mut self, index: usize, element: A::Item) {
        debug_assert!(index < A::CAPACITY);
        ptr::write(self.ptr_mut().add(index), element);
    }

    #[inline]
    unsafe fn buffer_replace(&mut self, index: usize, element: A::Item) -> A::Item {
        debug_assert!(index < A::CAPACITY);
        ptr::replace(self.ptr_mut().add(index), element)
    }
}

impl<A: Array, D: Discipline> RingBuffer<A, D> {
    /// Creates an empty `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::{Lifo, RingBuffer};
    ///
    /// let queue: RingBuffer<[usize; 3]> = RingBuffer::new();
    /// let stack: RingBuffer<[usize; 3], Lifo> = RingBuffer::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        RingBuffer {
            xs: MaybeUninit::uninit(),
            head: 0,
            tail: 0,
            count: 0,
            phantom: PhantomData,
        }
    }

    /// Return the capacity of the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let buf: Queue<usize, 4> = Queue::new();
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    #[inline]
    pub const fn capacity(&self) -> usize {
        A::CAPACITY
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Stack;
    ///
    /// let mut buf: Stack<_, 4> = Stack::new();
    /// assert_eq!(buf.size(), 0);
    /// buf.push(1).unwrap();
    /// assert_eq!(buf.size(), 1);
    /// ```
    #[inline]
    pub const fn size(&self) -> usize {
        self.count
    }

    /// Same as `size`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns the number of free slots, `capacity() - size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 4> = Queue::new();
    /// buf.push(1).unwrap();
    /// assert_eq!(buf.remaining(), 3);
    /// ```
    #[inline]
    pub const fn remaining(&self) -> usize {
        A::CAPACITY - self.count
    }

    /// Returns true if the buffer contains no elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 4> = Queue::new();
    /// assert!(buf.is_empty());
    /// buf.push(1).unwrap();
    /// assert!(!buf.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 1> = Queue::new();
    /// assert!(!buf.is_full());
    /// buf.push(1).unwrap();
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.count == A::CAPACITY
    }

    /// Empties the buffer, resetting `head`, `tail` and the element count.
    ///
    /// Live elements are dropped in place, but the storage is not zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 3> = Queue::new();
    /// buf.push(1).unwrap();
    /// buf.push(2).unwrap();
    /// buf.flush();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.remaining(), 3);
    /// ```
    pub fn flush(&mut self) {
        if self.count > 0 {
            trace_event!(dropped = self.count, "flushing ring buffer");
        }
        self.drop_window();
    }

    /// Resets the indices and drops the occupied window in place.
    fn drop_window(&mut self) {
        let start = if self.count > 0 { self.slot(0) } else { 0 };
        let len = self.count;

        // indices first: a panicking destructor must not cause a double drop
        self.head = 0;
        self.tail = 0;
        self.count = 0;

        if mem::needs_drop::<A::Item>() {
            for offset in 0..len {
                let index = wrap_add(start, offset, A::CAPACITY);
                unsafe {
                    ptr::drop_in_place(self.ptr_mut().add(index));
                }
            }
        }
    }
}
