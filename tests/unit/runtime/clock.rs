use super::*;

#[test]
fn timers_fire_in_due_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule(300, "observe");
    q.schedule(100, "a");
    q.schedule(100, "b");
    assert_eq!(q.len(), 3);
    assert_eq!(q.next_due(), Some(100));

    assert_eq!(q.pop_due(1000), Some("a"));
    assert_eq!(q.now_ms(), 100);
    assert_eq!(q.pop_due(1000), Some("b"));
    assert_eq!(q.pop_due(1000), Some("observe"));
    assert_eq!(q.now_ms(), 300);
    assert!(q.is_empty());
}

#[test]
fn pop_due_respects_limit() {
    let mut q = TimerQueue::new();
    q.schedule(50, 1u8);
    assert_eq!(q.pop_due(49), None);
    assert_eq!(q.now_ms(), 0);
    assert_eq!(q.pop_due(50), Some(1));
}

#[test]
fn schedule_is_relative_to_current_time() {
    let mut q = TimerQueue::new();
    q.advance_to(1000);
    q.schedule(0, ());
    assert_eq!(q.next_due(), Some(1000));

    q.advance_to(10);
    assert_eq!(q.now_ms(), 1000);
}
