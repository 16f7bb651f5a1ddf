use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use dial_engine::time::Interval;

/// Clonable handle to a repeating timer.
///
/// Register it with [`Application::timer`](crate::app::Application::timer)
/// together with the callback to run. Every clone controls the same
/// schedule, so callbacks (including the timer's own) may start or stop it.
///
/// ```rust,ignore
/// let tick = Timer::new(Duration::from_millis(10));
/// let start = tick.clone();
/// Button::new(Text::new("Start", font, 14.0, Color::BLACK)).on_click(move || start.start());
/// ```
#[derive(Clone)]
pub struct Timer {
    interval: Rc<RefCell<Interval>>,
}

impl Timer {
    /// A stopped timer firing every `period` once started.
    pub fn new(period: Duration) -> Self {
        Self { interval: Rc::new(RefCell::new(Interval::new(period))) }
    }

    pub fn period(&self) -> Duration {
        self.interval.borrow().period()
    }

    /// Starts the timer; the first tick is one period from now. No-op when
    /// already running.
    pub fn start(&self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&self, now: Instant) {
        if self.interval.borrow_mut().start(now) {
            log::trace!("timer {:?} started", self.period());
        }
    }

    pub fn stop(&self) {
        if self.interval.borrow_mut().stop() {
            log::trace!("timer {:?} stopped", self.period());
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_running()
    }

    fn poll(&self, now: Instant) -> bool {
        self.interval.borrow_mut().poll(now)
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.interval.borrow().next_deadline()
    }
}

/// Timers registered with an application and their callbacks.
#[derive(Default)]
pub(crate) struct TimerSet {
    entries: Vec<(Timer, Box<dyn FnMut()>)>,
}

impl TimerSet {
    pub(crate) fn add(&mut self, timer: Timer, callback: Box<dyn FnMut()>) {
        self.entries.push((timer, callback));
    }

    /// Runs the callback of every timer that is due at `now`.
    ///
    /// The interval borrow is released before the callback runs.
    pub(crate) fn poll(&mut self, now: Instant) {
        for (timer, callback) in &mut self.entries {
            if timer.poll(now) {
                callback();
            }
        }
    }

    /// Earliest deadline among running timers.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().filter_map(|(t, _)| t.next_deadline()).min()
    }
}

/// Asks the application to exit after the current frame.
#[derive(Clone, Default)]
pub struct QuitHandle(Rc<Cell<bool>>);

impl QuitHandle {
    pub fn quit(&self) {
        if !self.0.replace(true) {
            log::info!("quit requested");
        }
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn clones_share_one_schedule() {
        let t = Timer::new(ms(10));
        let other = t.clone();
        other.start_at(Instant::now());
        assert!(t.is_running());
        t.stop();
        assert!(!other.is_running());
    }

    #[test]
    fn due_timers_run_their_callback() {
        let t0 = Instant::now();
        let fast = Timer::new(ms(10));
        let slow = Timer::new(ms(1000));
        fast.start_at(t0);
        slow.start_at(t0);

        let hits = Rc::new(Cell::new((0, 0)));
        let (a, b) = (hits.clone(), hits.clone());
        let mut set = TimerSet::default();
        set.add(fast, Box::new(move || a.set((a.get().0 + 1, a.get().1))));
        set.add(slow, Box::new(move || b.set((b.get().0, b.get().1 + 1))));

        assert_eq!(set.next_deadline(), Some(t0 + ms(10)));
        set.poll(t0 + ms(10));
        assert_eq!(hits.get(), (1, 0));
        set.poll(t0 + ms(1000));
        assert_eq!(hits.get(), (2, 1));
    }

    #[test]
    fn callback_may_stop_its_own_timer() {
        let t0 = Instant::now();
        let t = Timer::new(ms(10));
        t.start_at(t0);
        let me = t.clone();
        let mut set = TimerSet::default();
        set.add(t.clone(), Box::new(move || me.stop()));

        set.poll(t0 + ms(10));
        assert!(!t.is_running());
        assert_eq!(set.next_deadline(), None);
    }

    #[test]
    fn stopped_timers_have_no_deadline() {
        let mut set = TimerSet::default();
        set.add(Timer::new(ms(5)), Box::new(|| {}));
        assert_eq!(set.next_deadline(), None);
    }

    #[test]
    fn quit_handle_is_shared() {
        let q = QuitHandle::default();
        let other = q.clone();
        assert!(!q.is_requested());
        other.quit();
        assert!(q.is_requested());
    }
}
