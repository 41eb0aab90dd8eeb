//! A manually advanced timer driver backed by a virtual clock.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use dragwise_sensor::{TimerDriver, TimerTask};

/// Implements [`TimerDriver`] against a virtual millisecond clock. Nothing
/// fires until the test calls [`advance`]; due tasks then fire in deadline
/// order, and a fired task may schedule further tasks that are picked up in
/// the same call when already due.
///
/// [`advance`]: ManualTimerDriver::advance
#[derive(Default)]
pub struct ManualTimerDriver {
    now_ms: Cell<u64>,
    queue: RefCell<Vec<(u64, TimerTask)>>,
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Move the clock forward and fire everything that came due.
    pub fn advance(&self, ms: u64) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due_index = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (deadline, _))| *deadline <= now)
                    .min_by_key(|(_, (deadline, _))| *deadline)
                    .map(|(index, _)| index);
                due_index.map(|index| queue.remove(index))
            };
            match next {
                Some((_, task)) => task.fire(),
                None => break,
            }
        }
    }

    /// Scheduled tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|(_, task)| !task.is_cancelled())
            .count()
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        let deadline = self.now_ms.get() + delay.as_millis() as u64;
        self.queue.borrow_mut().push((deadline, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragwise_sensor::ActivationTimer;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fires_only_once_the_deadline_is_reached() {
        let driver = ManualTimerDriver::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let _timer = ActivationTimer::schedule(&driver, Duration::from_millis(100), move || {
            flag.set(true);
        });

        driver.advance(99);
        assert!(!fired.get());
        driver.advance(1);
        assert!(fired.get());
        assert_eq!(driver.pending(), 0);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let driver = ManualTimerDriver::new();
        let timer = ActivationTimer::schedule(&driver, Duration::from_millis(50), || {
            panic!("must not fire");
        });
        timer.cancel();
        assert_eq!(driver.pending(), 0);
        driver.advance(1000);
    }
}
