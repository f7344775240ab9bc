use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;

/// A continuation run on a later turn of the queue
pub type Task = Box<dyn FnOnce(&TaskQueue)>;

/// FIFO queue of deferred continuations
///
/// Each task runs to completion before the next starts. Tasks may defer
/// further tasks; those run after everything already queued.
#[derive(Default)]
pub struct TaskQueue {
    pending: RefCell<VecDeque<Task>>,
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.len())
            .finish()
    }
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&self, task: impl FnOnce(&TaskQueue) + 'static) {
        self.pending.borrow_mut().push_back(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Run the oldest task, returning false if there was none
    pub fn run_next(&self) -> bool {
        // The borrow ends before the task runs so it can defer more work
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(task) => {
                task(self);
                true
            }
            None => false,
        }
    }

    /// Run only the tasks queued at the time of the call
    pub fn run_turn(&self) -> usize {
        let queued = self.len();
        for _ in 0..queued {
            self.run_next();
        }
        queued
    }

    /// Run tasks until the queue is empty, returning how many ran
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}
