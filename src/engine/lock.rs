//! Locks: monotonic open-gates that keep columns of blocks line-aligned.
//!
//! A lock may be registered as a subordinate of a master lock. The master
//! then acts as a barrier: it only counts as open once its own flag and
//! every subordinate are open. Blocks whose print locks share one master
//! therefore wait for each other before handing their column over to the
//! block below.
//!
//! ```text
//!   ┌────────┐  ┌────────┐
//!   │ Block1 │  │ Block2 │       Block3 and Block4 register their print
//!   └───┬────┘  │        │       locks under one master. Block3 cannot
//!   ┌───┴────┐  └───┬────┘       start while Block2 still prints, even
//!   │ Block3 │~~┌───┴────┐       though Block1 finished earlier.
//!   └────────┘  │ Block4 │
//!               └────────┘
//! ```
//!
//! Openness is evaluated over the whole subordinate tree: a subordinate
//! that has subordinates of its own is only open when all of those are.
//! Registration rejects anything that would make that tree cyclic.
//!
//! Locks live in a [`LockTable`] and are addressed by [`LockId`]. Ids are
//! only meaningful for the table that issued them; passing a foreign id
//! panics on the index.

use crate::error::{Error, Result};

/// Handle of a lock inside a [`LockTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LockId(pub(crate) usize);

impl LockId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct LockState {
    open: bool,
    master: Option<LockId>,
    subordinates: Vec<LockId>,
}

/// Arena of locks.
#[derive(Debug, Clone, Default)]
pub struct LockTable {
    locks: Vec<LockState>,
}

impl LockTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Create a lock with no master.
    pub fn create(&mut self, open: bool) -> LockId {
        let id = LockId(self.locks.len());
        self.locks.push(LockState {
            open,
            ..LockState::default()
        });
        id
    }

    /// Create a lock already registered as a subordinate of `master`.
    pub fn create_under(&mut self, open: bool, master: LockId) -> LockId {
        let id = self.create(open);
        // A fresh lock has no subordinates, so it cannot close a cycle.
        self.attach(id, master);
        id
    }

    /// Open the lock itself. Subordinates are unaffected and nothing ever
    /// closes a lock again.
    pub fn open(&mut self, id: LockId) {
        self.locks[id.0].open = true;
    }

    /// Whether the lock's own flag is set, ignoring subordinates.
    pub fn is_self_open(&self, id: LockId) -> bool {
        self.locks[id.0].open
    }

    /// Whether the lock and its whole subordinate tree are open.
    pub fn is_open(&self, id: LockId) -> bool {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let state = &self.locks[next.0];
            if !state.open {
                return false;
            }
            pending.extend_from_slice(&state.subordinates);
        }
        true
    }

    pub fn master(&self, id: LockId) -> Option<LockId> {
        self.locks[id.0].master
    }

    pub fn subordinates(&self, id: LockId) -> &[LockId] {
        &self.locks[id.0].subordinates
    }

    /// Make `lock` a subordinate of `master`.
    ///
    /// A lock has at most one master; registering it under a new one
    /// detaches it from the previous master first.
    pub fn register_subordinate(&mut self, lock: LockId, master: LockId) -> Result<()> {
        if self.is_ancestor_or_self(lock, master) {
            return Err(Error::LockCycle { lock, master });
        }

        match self.locks[lock.0].master {
            Some(current) if current == master => return Ok(()),
            Some(current) => self.locks[current.0].subordinates.retain(|&s| s != lock),
            None => {}
        }

        self.attach(lock, master);
        Ok(())
    }

    /// New lock with the same open flag, registered under the same master.
    /// Subordinates are not copied.
    pub fn duplicate(&mut self, id: LockId) -> LockId {
        let LockState { open, master, .. } = self.locks[id.0];
        match master {
            Some(master) => self.create_under(open, master),
            None => self.create(open),
        }
    }

    fn attach(&mut self, lock: LockId, master: LockId) {
        self.locks[master.0].subordinates.push(lock);
        self.locks[lock.0].master = Some(master);
    }

    /// Whether `candidate` is `lock` or one of `lock`'s masters, walking up.
    fn is_ancestor_or_self(&self, candidate: LockId, lock: LockId) -> bool {
        let mut current = Some(lock);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.locks[id.0].master;
        }
        false
    }
}
