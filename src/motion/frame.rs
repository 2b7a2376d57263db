use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Assumed length of the first frame after an idle period.
const DEFAULT_FRAME_SECS: f64 = 1.0 / 60.0;
/// Longest delta handed to tasks; longer gaps mean the loop was idle.
const MAX_FRAME_SECS: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// Wants another frame even if nothing scrolls.
    Animating,
    /// Up to date until the next scroll or resize.
    Idle,
    /// Will never change again; dropped from the loop.
    Finished,
}

/// Removals requested while the loop may be borrowed, e.g. by a task being
/// dropped in the middle of a frame. Applied at the end of the next `run`.
#[derive(Clone, Debug, Default)]
pub struct RemovalQueue(Rc<RefCell<Vec<TaskId>>>);

impl RemovalQueue {
    pub fn push(&self, id: TaskId) {
        self.0.borrow_mut().push(id);
    }

    fn contains(&self, id: TaskId) -> bool {
        self.0.borrow().contains(&id)
    }

    fn take(&self) -> Vec<TaskId> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Registry of per-frame tasks. Each frame visits every task once, in
/// registration order.
#[derive(Debug)]
pub struct FrameLoop<T> {
    next_id: u64,
    tasks: BTreeMap<TaskId, T>,
    removals: RemovalQueue,
    last_timestamp: Option<f64>,
}

impl<T> Default for FrameLoop<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameLoop<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            tasks: BTreeMap::new(),
            removals: RemovalQueue::default(),
            last_timestamp: None,
        }
    }

    pub fn insert(&mut self, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id, task);
        id
    }

    pub fn remove(&mut self, id: TaskId) -> Option<T> {
        self.tasks.remove(&id)
    }

    /// Handle for removing tasks without borrowing the loop.
    pub fn removals(&self) -> RemovalQueue {
        self.removals.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Seconds since the previous frame, given a frame timestamp in
    /// milliseconds.
    pub fn begin_frame(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last_timestamp {
            Some(last) => {
                let dt = (timestamp_ms - last) / 1000.0;
                if dt <= 0.0 || dt > MAX_FRAME_SECS {
                    DEFAULT_FRAME_SECS
                } else {
                    dt
                }
            }
            None => DEFAULT_FRAME_SECS,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }

    /// Forgets the last frame time so the next frame starts fresh.
    pub fn go_idle(&mut self) {
        self.last_timestamp = None;
    }

    /// Runs `step` on every task. Finished tasks and queued removals are
    /// dropped afterwards; a task queued for removal is not visited. Returns
    /// `true` if any task is still animating.
    pub fn run<F>(&mut self, mut step: F) -> bool
    where
        F: FnMut(TaskId, &mut T) -> TaskStatus,
    {
        let mut animating = false;
        let mut finished = Vec::new();
        for (id, task) in self.tasks.iter_mut() {
            if self.removals.contains(*id) {
                continue;
            }
            match step(*id, task) {
                TaskStatus::Animating => animating = true,
                TaskStatus::Idle => {}
                TaskStatus::Finished => finished.push(*id),
            }
        }
        finished.extend(self.removals.take());
        for id in finished {
            self.tasks.remove(&id);
        }
        animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut frames = FrameLoop::new();
        let a = frames.insert("a");
        let b = frames.insert("b");
        assert_ne!(a, b);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.remove(a), Some("a"));
        assert_eq!(frames.remove(a), None);
        assert_eq!(frames.remove(b), Some("b"));
        assert!(frames.is_empty());
    }

    #[test]
    fn test_run_visits_in_order_and_drops_finished() {
        let mut frames = FrameLoop::new();
        frames.insert(TaskStatus::Idle);
        let done = frames.insert(TaskStatus::Finished);
        frames.insert(TaskStatus::Idle);

        let mut seen = Vec::new();
        let animating = frames.run(|id, status| {
            seen.push(id);
            *status
        });
        assert!(!animating);
        assert_eq!(seen.len(), 3);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.remove(done), None);
    }

    #[test]
    fn test_run_reports_animating() {
        let mut frames = FrameLoop::new();
        frames.insert(TaskStatus::Idle);
        frames.insert(TaskStatus::Animating);
        assert!(frames.run(|_, status| *status));
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_removal_during_run_is_deferred() {
        let mut frames = FrameLoop::new();
        let a = frames.insert(TaskStatus::Idle);
        let b = frames.insert(TaskStatus::Animating);
        let c = frames.insert(TaskStatus::Idle);
        let removals = frames.removals();

        let mut seen = Vec::new();
        let animating = frames.run(|id, status| {
            seen.push(id);
            if id == a {
                // `a` drops itself and a task not yet visited.
                removals.push(a);
                removals.push(b);
            }
            *status
        });
        assert_eq!(seen, vec![a, c]);
        assert!(!animating);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.remove(c), Some(TaskStatus::Idle));
    }

    #[test]
    fn test_queued_removal_applies_on_next_run() {
        let mut frames = FrameLoop::new();
        let a = frames.insert(TaskStatus::Animating);
        frames.removals().push(a);
        assert_eq!(frames.len(), 1);
        let mut visited = false;
        assert!(!frames.run(|_, status| {
            visited = true;
            *status
        }));
        assert!(!visited);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_frame_deltas() {
        let mut frames: FrameLoop<()> = FrameLoop::new();
        assert_eq!(frames.begin_frame(1000.0), DEFAULT_FRAME_SECS);
        assert!((frames.begin_frame(1020.0) - 0.02).abs() < 1e-9);
        // A long gap is treated as a fresh start.
        assert_eq!(frames.begin_frame(6000.0), DEFAULT_FRAME_SECS);
        frames.go_idle();
        assert_eq!(frames.begin_frame(6010.0), DEFAULT_FRAME_SECS);
    }
}
