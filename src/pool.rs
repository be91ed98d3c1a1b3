//! Scratch buffer pools used by the recursive block/inline scanners.
//!
//! Grounded on `struct render.work` (a `parray` stack) in
//! `ext/markdown.c`: rather than allocating a fresh `Buffer` every time
//! a nested construct needs scratch space, the parser keeps a stack of
//! previously-used buffers and reuses the tail one, only growing the
//! stack when every existing slot is checked out.
//!
//! spec.md mandates two independently tracked pools (`block_pool` and
//! `span_pool`) whose combined `in_use` count is the nesting counter,
//! rather than the single combined stack `ext/markdown.c` uses. This
//! is a deliberate deviation from the grounding C source, recorded in
//! DESIGN.md.

use crate::buffer::Buffer;

/// A stack of reusable scratch buffers.
///
/// `acquire` hands out the next free slot (growing the stack if every
/// slot is checked out) already cleared and ready to be written into.
/// `release` returns the most recently acquired buffer to the pool
/// without dropping its allocation, mirroring `parr_pop`/`parr_push`
/// semantics on `struct render.work`.
#[derive(Debug, Default)]
pub struct Pool {
    slots: Vec<Buffer>,
    in_use: usize,
}

impl Pool {
    pub fn new() -> Pool {
        Pool { slots: Vec::new(), in_use: 0 }
    }

    /// Number of buffers currently checked out. Used by `Context` to
    /// compute the combined nesting counter.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Hands out a cleared scratch buffer, growing the pool if
    /// necessary.
    pub fn acquire(&mut self) -> usize {
        let index = self.in_use;
        if index == self.slots.len() {
            self.slots.push(Buffer::new(64));
        } else {
            self.slots[index].clear();
        }
        self.in_use += 1;
        index
    }

    pub fn get(&mut self, index: usize) -> &mut Buffer {
        &mut self.slots[index]
    }

    /// Returns the most recently acquired buffer(s) to the pool.
    ///
    /// Release must happen in LIFO order relative to acquire, exactly
    /// like the C source's stack discipline; the index is only used
    /// as a sanity check that callers aren't releasing out of order.
    pub fn release(&mut self, index: usize) {
        debug_assert_eq!(index + 1, self.in_use, "scratch pool released out of LIFO order");
        self.in_use = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_release_balances() {
        let mut pool = Pool::new();
        let a = pool.acquire();
        let b = pool.acquire();
        assert_eq!(pool.in_use(), 2);
        pool.release(b);
        pool.release(a);
        assert_eq!(pool.in_use(), 0);
    }

    #[test]
    fn reuses_released_slots() {
        let mut pool = Pool::new();
        let a = pool.acquire();
        pool.get(a).pipe(&Buffer::from("hello"));
        pool.release(a);

        let b = pool.acquire();
        assert_eq!(b, a);
        assert!(pool.get(b).is_empty());
    }
}
