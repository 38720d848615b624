use std::fmt;

use super::RingBuffer;
use crate::array::Array;
use crate::discipline::Discipline;

impl<A: Array, D: Discipline> Clone for RingBuffer<A, D>
where
    A::Item: Clone,
{
    fn clone(&self) -> Self {
        let mut other = RingBuffer::new();
        for offset in 0..self.count {
            let index = self.slot(offset);
            let element = unsafe { self.buffer_ref(index) }.clone();
            unsafe { other.buffer_write(index, element) };
        }
        // indices last, so a panicking `clone` only leaks
        other.head = self.head;
        other.tail = self.tail;
        other.count = self.count;
        other
    }
}

impl<A: Array, D: Discipline> Drop for RingBuffer<A, D> {
    fn drop(&mut self) {
        self.drop_window();
    }
}

impl<A: Array, D: Discipline> Default for RingBuffer<A, D> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new()
    }
}

/// Compares the occupied windows element by element, oldest (or bottom)
/// first. Physical placement in the storage is not compared.
impl<A: Array, D: Discipline> PartialEq for RingBuffer<A, D>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
            && (0..self.count).all(|offset| unsafe {
                self.buffer_ref(self.slot(offset)) == other.buffer_ref(other.slot(offset))
            })
    }
}

impl<A: Array, D: Discipline> Eq for RingBuffer<A, D> where A::Item: Eq {}

impl<A: Array, D: Discipline> fmt::Debug for RingBuffer<A, D>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries((0..self.count).map(|offset| unsafe { self.buffer_ref(self.slot(offset)) }))
            .finish()
    }
}
