use std::time::Duration;

use cc_core::clock::ClockTicker;
use tokio::runtime::Handle;

#[tokio::test(start_paused = true)]
async fn ticks_every_period_while_running() {
    let (tx, rx) = flume::unbounded();
    let ticker = ClockTicker::start(&Handle::current(), Duration::from_secs(1), tx);

    // The first tick is immediate.
    tokio::task::yield_now().await;
    assert_eq!(rx.try_iter().count(), 1);

    for _ in 0..5 {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let ticks = rx.try_iter().count();
        assert!(ticks >= 1, "expected a tick within 1.5s, got {ticks}");
    }
    assert!(ticker.is_running());
}

#[tokio::test(start_paused = true)]
async fn no_ticks_after_drop() {
    let (tx, rx) = flume::unbounded();
    let ticker = ClockTicker::start(&Handle::current(), Duration::from_secs(1), tx);

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert!(rx.try_iter().count() >= 3);

    drop(ticker);
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(rx.try_iter().count(), 0);
    assert!(rx.is_disconnected(), "ticker task should have released its sender");
}

#[tokio::test(start_paused = true)]
async fn stops_when_receiver_is_gone() {
    let (tx, rx) = flume::unbounded();
    let ticker = ClockTicker::start(&Handle::current(), Duration::from_secs(1), tx);
    drop(rx);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(!ticker.is_running());
}
