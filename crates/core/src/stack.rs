//! Growable integer stack with explicitly managed capacity

use tracing::{debug, warn};

use crate::error::{Result, StackError};

/// LIFO container for `i64` items backed by one contiguous buffer.
///
/// The buffer does not exist until the first push commits it, and once a
/// push fills the committed capacity the stack stays full until [`grow`]
/// is called with a strictly larger target. Capacity never shrinks; popped
/// slots keep their storage.
///
/// The committed capacity is tracked separately from the underlying `Vec`
/// so its amortized growth never applies: `len() <= capacity()` holds at
/// all times, enforced here rather than by the allocator.
///
/// [`grow`]: DynamicStack::grow
#[derive(Debug)]
pub struct DynamicStack {
    buf: Vec<i64>,
    capacity: usize,
    allocated: bool,
}

/// A value removed from the stack by [`DynamicStack::pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Popped {
    /// The removed value.
    pub item: i64,
    /// Position of the new top slot, `None` when the pop emptied the stack.
    pub new_top: Option<usize>,
}

impl DynamicStack {
    /// Creates an unallocated stack that will commit `initial_capacity`
    /// slots on the first push.
    #[must_use]
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity: initial_capacity,
            allocated: false,
        }
    }

    /// Pushes `item` onto the stack and returns its position.
    ///
    /// The first successful call commits the initial buffer. A full stack
    /// is not grown here: the caller decides whether to [`grow`] and retry.
    ///
    /// # Errors
    ///
    /// [`StackError::AllocationFailed`] if the initial buffer cannot be
    /// committed (the stack stays unallocated), or [`StackError::Overflow`]
    /// if every committed slot is occupied. Neither changes the stack.
    ///
    /// [`grow`]: DynamicStack::grow
    pub fn push(&mut self, item: i64) -> Result<usize> {
        if !self.allocated {
            self.buf.try_reserve_exact(self.capacity).map_err(|err| {
                warn!(capacity = self.capacity, "initial allocation failed");
                err
            })?;
            self.allocated = true;
            debug!(capacity = self.capacity, "buffer committed");
        }

        if self.buf.len() == self.capacity {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }

        self.buf.push(item);
        let position = self.buf.len() - 1;
        debug!(item, position, "pushed");
        Ok(position)
    }

    /// Grows the committed capacity to `new_capacity`, preserving contents
    /// in place.
    ///
    /// Commits the buffer if nothing has been allocated yet. Intended to be
    /// called after a push reported [`StackError::Overflow`] and the user
    /// approved the reallocation.
    ///
    /// # Errors
    ///
    /// [`StackError::InvalidGrowth`] if `new_capacity` does not strictly
    /// exceed the current capacity, [`StackError::AllocationFailed`] if the
    /// reallocation fails. Neither changes the stack.
    pub fn grow(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Err(StackError::InvalidGrowth {
                requested: new_capacity,
                capacity: self.capacity,
            });
        }

        self.buf
            .try_reserve_exact(new_capacity - self.buf.len())
            .map_err(|err| {
                warn!(
                    capacity = self.capacity,
                    requested = new_capacity,
                    "reallocation failed"
                );
                err
            })?;
        let old = self.capacity;
        self.capacity = new_capacity;
        self.allocated = true;
        debug!(old, new = new_capacity, "capacity grown");
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// Capacity is retained; the vacated slot is merely out of reach.
    ///
    /// # Errors
    ///
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Popped> {
        let item = self.buf.pop().ok_or(StackError::Underflow)?;
        let new_top = self.top_index();
        debug!(item, ?new_top, "popped");
        Ok(Popped { item, new_top })
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<i64> {
        self.buf.last().copied()
    }

    /// Position of the top slot, `None` when empty.
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.buf.len().checked_sub(1)
    }

    /// Occupied slots from the top down to position 0.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, i64)> + '_ {
        self.buf.iter().copied().enumerate().rev()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether every committed slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Committed capacity. Before the first push this is the requested
    /// initial size, not yet allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer has been committed yet.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }
}
