use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value that records every drop of itself (or any of its clones) in a shared tally, used to
/// check that collections release each element exactly once.
#[derive(Debug, Clone)]
pub struct DropTally(Rc<Cell<usize>>);

impl DropTally {
    pub fn new() -> DropTally {
        DropTally(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
