//! ManualScheduler - virtual clock advanced by hand
//!
//! Tasks run in due order, ties in scheduling order. A task may schedule
//! further tasks; those fire within the same `advance` if they fall due.

use std::cell::{Cell, RefCell};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::{Scheduler, Task};

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        (self.due, self.seq) == (other.due, other.seq)
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<BinaryHeap<Reverse<Pending>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every task due at or before `now() + ms`
    pub fn advance(&self, ms: u64) {
        self.advance_to(self.now.get() + ms);
    }

    pub fn advance_to(&self, target: u64) {
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue.peek().map(|Reverse(p)| p.due);
                if due.is_some_and(|due| due <= target) { queue.pop() } else { None }
            };
            let Some(Reverse(pending)) = next else { break };
            self.now.set(pending.due);
            (pending.task)();
        }
        self.now.set(target.max(self.now.get()));
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due = self.now.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push(Reverse(Pending { due, seq, task }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn tasks_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
            let log = Rc::clone(&log);
            scheduler.after(delay, Box::new(move || log.borrow_mut().push(name)));
        }
        scheduler.advance(150);
        assert_eq!(*log.borrow(), vec!["a", "a2"]);
        assert_eq!(scheduler.now(), 150);
        scheduler.advance(1000);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn nothing_fires_before_advance() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        scheduler.after(0, Box::new(move || flag.set(true)));
        assert!(!fired.get());
        scheduler.advance(0);
        assert!(fired.get());
    }

    #[test]
    fn rescheduled_tasks_use_their_own_fire_time() {
        let scheduler = Rc::new(ManualScheduler::new());
        let times = Rc::new(RefCell::new(Vec::new()));

        fn tick(scheduler: Rc<ManualScheduler>, times: Rc<RefCell<Vec<u64>>>) {
            times.borrow_mut().push(scheduler.now());
            let next = Rc::clone(&scheduler);
            scheduler.after(250, Box::new(move || tick(next, times)));
        }

        tick(Rc::clone(&scheduler), Rc::clone(&times));
        scheduler.advance(1000);
        assert_eq!(*times.borrow(), vec![0, 250, 500, 750, 1000]);
        assert_eq!(scheduler.pending(), 1);
    }
}
