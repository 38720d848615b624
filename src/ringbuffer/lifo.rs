use crate::array::Array;
use crate::discipline::Lifo;
use crate::error::{OverflowError, UnderflowError};

use super::RingBuffer;

// `head` is the stack top here and never wraps; `tail` stays 0.
impl<A: Array> RingBuffer<A, Lifo> {
    /// Pushes an element on top of the stack.
    ///
    /// Returns `Err(OverflowError)` holding the element, without mutating
    /// the buffer, if it is full. A stack never overwrites.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Stack;
    ///
    /// let mut buf: Stack<_, 2> = Stack::new();
    ///
    /// assert!(buf.push(1).is_ok());
    /// assert!(buf.push(2).is_ok());
    /// assert_eq!(buf.push(3).unwrap_err().element, 3);
    /// ```
    pub fn push(&mut self, element: A::Item) -> Result<(), OverflowError<A::Item>> {
        if self.is_full() {
            trace_event!(capacity = A::CAPACITY, "lifo push rejected: buffer full");
            return Err(OverflowError::new(element));
        }
        let head = self.head;
        unsafe { self.buffer_write(head, element) };
        self.head += 1;
        self.count += 1;
        debug_assert_eq!(self.head, self.count);
        Ok(())
    }

    /// Removes the most recently pushed element and returns it.
    ///
    /// Returns `Err(UnderflowError)` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::{Stack, UnderflowError};
    ///
    /// let mut buf: Stack<_, 2> = Stack::new();
    /// buf.push(1).unwrap();
    /// buf.push(2).unwrap();
    /// assert_eq!(buf.pop(), Ok(2));
    /// assert_eq!(buf.pop(), Ok(1));
    /// assert_eq!(buf.pop(), Err(UnderflowError));
    /// ```
    pub fn pop(&mut self) -> Result<A::Item, UnderflowError> {
        if self.is_empty() {
            trace_event!("lifo pop refused: buffer empty");
            return Err(UnderflowError);
        }
        self.head -= 1;
        self.count -= 1;
        let head = self.head;
        Ok(unsafe { self.buffer_read(head) })
    }

    /// Returns a reference to the top of the stack without removing it.
    ///
    /// Returns `Err(UnderflowError)` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyring::Stack;
    ///
    /// let mut buf: Stack<_, 2> = Stack::new();
    /// buf.push(1).unwrap();
    /// buf.push(2).unwrap();
    /// assert_eq!(buf.peek(), Ok(&2));
    /// ```
    pub fn peek(&self) -> Result<&A::Item, UnderflowError> {
        if self.is_empty() {
            trace_event!("lifo peek refused: buffer empty");
            return Err(UnderflowError);
        }
        Ok(unsafe { self.buffer_ref(self.head - 1) })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{OverflowError, UnderflowError};
    use crate::{Lifo, RingBuffer};

    type Stack3 = RingBuffer<[char; 3], Lifo>;

    #[test]
    fn lifo_scenario() {
        let mut tester = Stack3::new();
        assert_eq!(tester.push('A'), Ok(()));
        assert_eq!(tester.push('B'), Ok(()));
        assert_eq!(tester.push('C'), Ok(()));
        assert_eq!(tester.push('D'), Err(OverflowError::new('D')));

        assert_eq!(tester.pop(), Ok('C'));
        assert_eq!(tester.pop(), Ok('B'));
        assert_eq!(tester.pop(), Ok('A'));
        assert_eq!(tester.pop(), Err(UnderflowError));
    }

    #[test]
    fn lifo_head_tracks_count() {
        let mut tester = Stack3::new();
        for c in "ABC".chars() {
            tester.push(c).unwrap();
            assert_eq!(tester.head, tester.count);
        }
        assert_eq!(tester.head, 3);
        tester.pop().unwrap();
        assert_eq!((tester.head, tester.count), (2, 2));
        tester.push('Z').unwrap();
        assert_eq!(tester.head, 3);
        assert_eq!(tester.tail, 0);
    }

    #[test]
    fn lifo_never_wraps() {
        let mut tester = Stack3::new();
        for round in 0..5 {
            for c in "xyz".chars() {
                tester.push(c).unwrap();
            }
            assert!(tester.push('!').is_err());
            assert_eq!(tester.head, 3, "round {}", round);
            for c in "zyx".chars() {
                assert_eq!(tester.pop(), Ok(c));
            }
            assert_eq!(tester.head, 0);
        }
    }

    #[test]
    fn lifo_overflow_and_underflow_leave_state() {
        let mut tester = Stack3::new();
        assert_eq!(tester.peek(), Err(UnderflowError));
        assert_eq!((tester.head, tester.tail, tester.count), (0, 0, 0));

        for c in "ABC".chars() {
            tester.push(c).unwrap();
        }
        assert!(tester.push('D').is_err());
        assert_eq!((tester.head, tester.tail, tester.count), (3, 0, 3));
        assert_eq!(tester.peek(), Ok(&'C'));
    }

    #[test]
    fn lifo_peek_is_idempotent() {
        let mut tester = Stack3::new();
        tester.push('A').unwrap();
        tester.push('B').unwrap();
        assert_eq!(tester.peek(), Ok(&'B'));
        assert_eq!(tester.peek(), Ok(&'B'));
        assert_eq!(tester.size(), 2);
        assert_eq!(tester.pop(), Ok('B'));
        assert_eq!(tester.peek(), Ok(&'A'));
    }
}
