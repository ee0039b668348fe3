use std::{cmp::Reverse, collections::BinaryHeap};

#[derive(Debug)]
struct Entry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.due_ms, self.seq) == (other.due_ms, other.seq)
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Virtual clock with one-shot timers.
///
/// Timers due at the same instant fire in scheduling order. Time only moves through
/// [`TimerQueue::advance_to`], so runs are fully deterministic.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    seq: u64,
    heap: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            seq: 0,
            heap: BinaryHeap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` when no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Schedule `task` to fire `delay_ms` after now.
    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.heap.push(Reverse(Entry {
            due_ms,
            seq: self.seq,
            task,
        }));
        self.seq += 1;
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(e)| e.due_ms)
    }

    /// Pop the earliest timer due at or before `limit_ms`, moving the clock to its due time.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<T> {
        if self.next_due()? > limit_ms {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Move the clock forward to `t_ms`. Never moves backwards.
    pub fn advance_to(&mut self, t_ms: u64) {
        self.now_ms = self.now_ms.max(t_ms);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/clock.rs"]
mod tests;
