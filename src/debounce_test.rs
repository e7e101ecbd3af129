#![allow(clippy::float_cmp)]

use super::*;

/// Replays signals through a virtual clock, waking each ticket `quiet_ms`
/// after its signal. Returns the times at which the action fired.
fn replay(quiet_ms: u32, signal_times: &[f64]) -> Vec<f64> {
    let mut debouncer = Debouncer::new(quiet_ms);
    let mut wakeups: Vec<(f64, Ticket)> = Vec::new();
    let mut fired = Vec::new();

    let mut signals = signal_times.iter().copied().peekable();
    loop {
        let next_signal = signals.peek().copied();
        wakeups.sort_by(|a, b| a.0.total_cmp(&b.0));
        let next_wake = wakeups.first().map(|(t, _)| *t);

        match (next_signal, next_wake) {
            (Some(s), Some(w)) if w < s => {
                let (at, ticket) = wakeups.remove(0);
                if debouncer.settle(ticket, at) {
                    fired.push(at);
                }
            }
            (Some(s), _) => {
                signals.next();
                let ticket = debouncer.signal(s);
                wakeups.push((s + f64::from(quiet_ms), ticket));
            }
            (None, Some(_)) => {
                let (at, ticket) = wakeups.remove(0);
                if debouncer.settle(ticket, at) {
                    fired.push(at);
                }
            }
            (None, None) => break,
        }
    }
    fired
}

// =============================================================
// Burst coalescing
// =============================================================

#[test]
fn burst_within_quiet_period_fires_once_after_last_signal() {
    let times: Vec<f64> = (0..10).map(|i| f64::from(i) * 10.0).collect();
    assert_eq!(replay(100, &times), vec![190.0]);
}

#[test]
fn single_signal_fires_after_quiet_period() {
    assert_eq!(replay(100, &[42.0]), vec![142.0]);
}

#[test]
fn separated_bursts_fire_separately() {
    assert_eq!(replay(100, &[0.0, 50.0, 400.0, 450.0]), vec![150.0, 550.0]);
}

#[test]
fn signal_exactly_at_wakeup_supersedes_it() {
    // The second signal arrives at the same instant the first would settle.
    assert_eq!(replay(100, &[0.0, 100.0]), vec![200.0]);
}

// =============================================================
// Ticket semantics
// =============================================================

#[test]
fn stale_ticket_never_settles() {
    let mut d = Debouncer::new(100);
    let first = d.signal(0.0);
    let second = d.signal(30.0);
    assert!(!d.settle(first, 500.0));
    assert!(d.settle(second, 130.0));
}

#[test]
fn early_settle_is_rejected_and_can_retry() {
    let mut d = Debouncer::new(100);
    let ticket = d.signal(0.0);
    assert!(!d.settle(ticket, 99.0));
    assert!(d.is_pending());
    assert!(d.settle(ticket, 100.0));
}

#[test]
fn settle_succeeds_only_once() {
    let mut d = Debouncer::new(100);
    let ticket = d.signal(0.0);
    assert!(d.settle(ticket, 100.0));
    assert!(!d.settle(ticket, 200.0));
    assert!(!d.is_pending());
    assert_eq!(d.due_at(), None);
}

#[test]
fn due_at_tracks_last_signal() {
    let mut d = Debouncer::new(100);
    assert_eq!(d.due_at(), None);
    d.signal(10.0);
    d.signal(70.0);
    assert_eq!(d.due_at(), Some(170.0));
    assert_eq!(d.quiet_ms(), 100);
}

#[test]
fn ticket_carries_its_due_time() {
    let mut d = Debouncer::new(100);
    let ticket = d.signal(25.0);
    assert_eq!(ticket.due_ms(), 125.0);
    assert!(d.settle(ticket, ticket.due_ms()));
}
