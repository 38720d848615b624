use crate::array::Array;
use crate::discipline::Fifo;
use crate::error::{OverflowError, UnderflowError};
use crate::utils::wrap_add;

use super::RingBuffer;

impl<A: Array> RingBuffer<A, Fifo> {
    /// Appends an element to the back of the queue.
    ///
    /// Returns `Err(OverflowError)` holding the element, without mutating
    /// the buffer, if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 2> = Queue::new();
    ///
    /// assert!(buf.push(1).is_ok());
    /// assert!(buf.push(2).is_ok());
    /// assert_eq!(buf.push(3).unwrap_err().element, 3);
    /// ```
    pub fn push(&mut self, element: A::Item) -> Result<(), OverflowError<A::Item>> {
        if self.is_full() {
            trace_event!(capacity = A::CAPACITY, "fifo push rejected: buffer full");
            return Err(OverflowError::new(element));
        }
        unsafe { self.push_unchecked(element) };
        Ok(())
    }

    /// Appends an element to the back of the queue, overwriting the oldest
    /// element if the buffer is full.
    ///
    /// Never fails. Returns the evicted element, or `None` if there was room.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 2> = Queue::new();
    ///
    /// assert_eq!(buf.force_push(1), None);
    /// assert_eq!(buf.force_push(2), None);
    /// assert_eq!(buf.force_push(3), Some(1));
    /// assert_eq!(buf.pop(), Ok(2));
    /// ```
    pub fn force_push(&mut self, element: A::Item) -> Option<A::Item> {
        if !self.is_full() {
            unsafe { self.push_unchecked(element) };
            return None;
        }

        // full: the next free slot is the oldest one
        let tail = self.tail;
        debug_assert_eq!(tail, self.head);
        let evicted = unsafe { self.buffer_replace(tail, element) };
        self.tail = wrap_add(tail, 1, A::CAPACITY);
        self.head = wrap_add(self.head, 1, A::CAPACITY);
        trace_event!(capacity = A::CAPACITY, "fifo force push evicted oldest element");
        Some(evicted)
    }

    /// Removes the oldest element and returns it.
    ///
    /// Returns `Err(UnderflowError)` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::{Queue, UnderflowError};
    ///
    /// let mut buf: Queue<_, 2> = Queue::new();
    /// assert_eq!(buf.pop(), Err(UnderflowError));
    ///
    /// buf.push(1).unwrap();
    /// buf.push(2).unwrap();
    /// assert_eq!(buf.pop(), Ok(1));
    /// assert_eq!(buf.pop(), Ok(2));
    /// ```
    pub fn pop(&mut self) -> Result<A::Item, UnderflowError> {
        if self.is_empty() {
            trace_event!("fifo pop refused: buffer empty");
            return Err(UnderflowError);
        }
        let head = self.head;
        self.head = wrap_add(head, 1, A::CAPACITY);
        self.count -= 1;
        Ok(unsafe { self.buffer_read(head) })
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// Returns `Err(UnderflowError)` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Queue;
    ///
    /// let mut buf: Queue<_, 2> = Queue::new();
    /// buf.push(1).unwrap();
    /// buf.push(2).unwrap();
    /// assert_eq!(buf.peek(), Ok(&1));
    /// assert_eq!(buf.peek(), Ok(&1));
    /// ```
    pub fn peek(&self) -> Result<&A::Item, UnderflowError> {
        if self.is_empty() {
            trace_event!("fifo peek refused: buffer empty");
            return Err(UnderflowError);
        }
        Ok(unsafe { self.buffer_ref(self.head) })
    }

    #[inline]
    unsafe fn push_unchecked(&mut self, element: A::Item) {
        debug_assert!(!self.is_full());
        let tail = self.tail;
        self.buffer_write(tail, element);
        self.tail = wrap_add(tail, 1, A::CAPACITY);
        self.count += 1;
        debug_assert_eq!(self.tail, wrap_add(self.head, self.count % A::CAPACITY, A::CAPACITY));
    }
}
