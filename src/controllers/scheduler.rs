/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Delayed-callback service. The browser implementation sits on top of
/// `setTimeout`; tests use [`manual::ManualScheduler`] to drive tasks by hand.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Scheduler, Task};

    /// Queues tasks instead of running them; `run_next` fires the oldest one.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        slots: Rc<RefCell<Vec<Option<(u32, Task)>>>>,
    }

    impl ManualScheduler {
        /// Runs the oldest pending task and returns the delay it was scheduled with.
        pub fn run_next(&self) -> Option<u32> {
            let next = self
                .slots
                .borrow_mut()
                .iter_mut()
                .find_map(|slot| slot.take());
            next.map(|(delay_ms, task)| {
                task();
                delay_ms
            })
        }

        pub fn pending(&self) -> usize {
            self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = usize;

        fn schedule(&self, delay_ms: u32, task: Task) -> usize {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some((delay_ms, task)));
            slots.len() - 1
        }

        fn cancel(&self, handle: usize) {
            if let Some(slot) = self.slots.borrow_mut().get_mut(handle) {
                *slot = None;
            }
        }
    }
}
