//! Timer queue - deadline-ordered delayed tasks for single-threaded hosts
//!
//! The queue owns its own notion of "now". Hosts move it forward with
//! [`TimerQueue::advance_to`], which runs every task whose deadline has
//! passed, in deadline order (ties in scheduling order).

use std::cell::{Cell, RefCell};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

use tracing::trace;

use super::ui::{Scheduler, TaskHandle};

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct TimerQueue {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    deadlines: RefCell<BinaryHeap<Reverse<(Duration, u64)>>>,
    tasks: RefCell<HashMap<u64, Task>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue time
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Deadline of the next live task, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        let mut deadlines = self.deadlines.borrow_mut();
        let tasks = self.tasks.borrow();
        // Cancelled tasks leave their deadline behind
        while let Some(Reverse((deadline, id))) = deadlines.peek() {
            if tasks.contains_key(id) {
                return Some(*deadline);
            }
            deadlines.pop();
        }
        None
    }

    /// Move time forward to `now` and run everything due. Time never goes back.
    ///
    /// Returns the number of tasks run.
    pub fn advance_to(&self, now: Duration) -> usize {
        if now > self.now.get() {
            self.now.set(now);
        }
        let now = self.now.get();

        let mut ran = 0;
        loop {
            let due = {
                let mut deadlines = self.deadlines.borrow_mut();
                match deadlines.peek() {
                    Some(Reverse((deadline, id))) if *deadline <= now => {
                        let id = *id;
                        deadlines.pop();
                        Some(id)
                    }
                    _ => None,
                }
            };
            let Some(id) = due else {
                break;
            };

            // Borrows are released before running: tasks may schedule more work
            let task = self.tasks.borrow_mut().remove(&id);
            if let Some(task) = task {
                trace!(task_id = id, "[timers] Running task");
                task();
                ran += 1;
            }
        }
        ran
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let deadline = self.now.get() + delay;
        self.deadlines.borrow_mut().push(Reverse((deadline, id)));
        self.tasks.borrow_mut().insert(id, task);

        TaskHandle { id, delay }
    }

    fn cancel(&self, handle: TaskHandle) -> bool {
        self.tasks.borrow_mut().remove(&handle.id).is_some()
    }
}
