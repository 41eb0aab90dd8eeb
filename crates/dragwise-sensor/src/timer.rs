//! Cancellable one-shot timers for delayed gesture activation.
//!
//! A sensor never owns a clock; it asks the host for one delayed callback
//! through [`TimerDriver`] and keeps an [`ActivationTimer`] handle that can
//! cancel it. The callback slot is shared between the handle and the task
//! handed to the driver, so cancellation empties the slot synchronously and
//! a fire that races with it finds nothing to run.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

type Callback = Box<dyn FnOnce()>;
type CallbackSlot = Rc<RefCell<Option<Callback>>>;

/// Host-supplied scheduling capability. The host fires the task once the
/// delay has elapsed; firing a cancelled task is a no-op.
pub trait TimerDriver {
    fn schedule(&self, delay: Duration, task: TimerTask);
}

/// The schedulable half of a timer. Consumed by [`TimerTask::fire`], so at
/// most one invocation is structurally possible.
pub struct TimerTask {
    slot: CallbackSlot,
}

impl TimerTask {
    pub fn fire(self) {
        let callback = self.slot.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

/// Handle to a scheduled callback. Dropping the handle does not cancel;
/// only [`ActivationTimer::cancel`] does.
pub struct ActivationTimer {
    slot: CallbackSlot,
}

impl ActivationTimer {
    pub fn schedule(
        driver: &dyn TimerDriver,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let slot: CallbackSlot = Rc::new(RefCell::new(Some(Box::new(callback) as Callback)));
        driver.schedule(
            delay,
            TimerTask {
                slot: Rc::clone(&slot),
            },
        );
        Self { slot }
    }

    /// Prevents the callback from ever running. Safe to call repeatedly,
    /// before the task fires, after it fired, or if the host never fires it.
    pub fn cancel(&self) {
        self.slot.borrow_mut().take();
    }

    /// True while the callback has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// A [`TimerDriver`] for frame-driven hosts: deadlines are recorded at
/// schedule time and due tasks fire when the host calls [`drive`] from its
/// frame loop.
///
/// [`drive`]: PolledTimerDriver::drive
#[derive(Default)]
pub struct PolledTimerDriver {
    queue: RefCell<Vec<(Instant, TimerTask)>>,
}

impl PolledTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every task whose deadline is at or before `now`, in deadline
    /// order. Tasks scheduled from inside a firing callback are picked up
    /// on the next call.
    pub fn drive(&self, now: Instant) {
        let mut due = Vec::new();
        {
            let mut queue = self.queue.borrow_mut();
            let mut index = 0;
            while index < queue.len() {
                if queue[index].0 <= now {
                    due.push(queue.remove(index));
                } else {
                    index += 1;
                }
            }
        }
        due.sort_by_key(|(deadline, _)| *deadline);
        for (_, task) in due {
            task.fire();
        }
    }

    /// Number of scheduled, not-yet-cancelled tasks.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|(_, task)| !task.is_cancelled())
            .count()
    }
}

impl TimerDriver for PolledTimerDriver {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        self.queue.borrow_mut().push((Instant::now() + delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Captures scheduled tasks so tests control exactly when they fire.
    #[derive(Default)]
    struct CapturingDriver {
        tasks: RefCell<Vec<TimerTask>>,
    }

    impl TimerDriver for CapturingDriver {
        fn schedule(&self, _delay: Duration, task: TimerTask) {
            self.tasks.borrow_mut().push(task);
        }
    }

    #[test]
    fn fires_at_most_once() {
        let driver = CapturingDriver::default();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let _timer = ActivationTimer::schedule(&driver, Duration::from_millis(10), move || {
            counter.set(counter.get() + 1);
        });

        let task = driver.tasks.borrow_mut().pop().unwrap();
        task.fire();
        assert_eq!(fired.get(), 1);
        assert!(driver.tasks.borrow().is_empty());
    }

    #[test]
    fn cancel_before_fire_suppresses_callback() {
        let driver = CapturingDriver::default();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let timer = ActivationTimer::schedule(&driver, Duration::from_millis(10), move || {
            flag.set(true);
        });

        timer.cancel();
        timer.cancel();
        assert!(!timer.is_pending());

        let task = driver.tasks.borrow_mut().pop().unwrap();
        assert!(task.is_cancelled());
        task.fire();
        assert!(!fired.get());
    }

    #[test]
    fn cancel_after_fire_is_a_no_op() {
        let driver = CapturingDriver::default();
        let timer = ActivationTimer::schedule(&driver, Duration::from_millis(10), || {});
        driver.tasks.borrow_mut().pop().unwrap().fire();
        assert!(!timer.is_pending());
        timer.cancel();
    }

    #[test]
    fn polled_driver_fires_due_tasks_in_deadline_order() {
        let driver = PolledTimerDriver::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&order);
        let _late = ActivationTimer::schedule(&driver, Duration::from_millis(20), move || {
            log.borrow_mut().push("late");
        });
        let log = Rc::clone(&order);
        let _early = ActivationTimer::schedule(&driver, Duration::from_millis(5), move || {
            log.borrow_mut().push("early");
        });
        assert_eq!(driver.pending(), 2);

        driver.drive(Instant::now() + Duration::from_millis(50));
        assert_eq!(*order.borrow(), vec!["early", "late"]);
        assert_eq!(driver.pending(), 0);
    }

    #[test]
    fn polled_driver_leaves_future_tasks_queued() {
        let driver = PolledTimerDriver::new();
        let _timer = ActivationTimer::schedule(&driver, Duration::from_secs(3600), || {
            panic!("must not fire");
        });
        driver.drive(Instant::now());
        assert_eq!(driver.pending(), 1);
    }
}
