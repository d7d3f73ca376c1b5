// Search debounce and hero rotation, driven by tokio's paused clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout, Instant};

use termflix::action::Action;
use termflix::api::models::{CatalogItem, MediaKind};
use termflix::app::debounce::{DebounceOutcome, SearchDebounce};
use termflix::app::hero::{spawn_ticker, HeroRotation};

fn items(n: u64) -> Vec<CatalogItem> {
    (0..n).map(|id| CatalogItem::new(id, MediaKind::Movie)).collect()
}

// ── Debounce ─────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_debounce_fires_once_after_last_keystroke() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debounce = SearchDebounce::new(Duration::from_millis(500), tx);
    let start = Instant::now();

    assert_eq!(debounce.input("a"), DebounceOutcome::Scheduled);
    sleep(Duration::from_millis(100)).await;
    debounce.input("ab");
    sleep(Duration::from_millis(100)).await;
    debounce.input("abc");

    // Nothing before the window closes.
    assert!(timeout(Duration::from_millis(490), rx.recv()).await.is_err());

    let action = rx.recv().await.unwrap();
    let elapsed = start.elapsed();
    match action {
        Action::RunSearch { query } => assert_eq!(query, "abc"),
        other => panic!("expected RunSearch, got {:?}", other),
    }
    assert!(
        elapsed >= Duration::from_millis(700) && elapsed < Duration::from_millis(710),
        "fired at {:?}",
        elapsed
    );

    // The superseded timers never fire.
    sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_debounce_trims_query() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debounce = SearchDebounce::new(Duration::from_millis(500), tx);

    debounce.input("  matrix ");
    match rx.recv().await.unwrap() {
        Action::RunSearch { query } => assert_eq!(query, "matrix"),
        other => panic!("expected RunSearch, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_cancels_pending_search() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debounce = SearchDebounce::new(Duration::from_millis(500), tx);

    debounce.input("dune");
    assert!(debounce.is_pending());
    sleep(Duration::from_millis(200)).await;
    assert_eq!(debounce.input("   "), DebounceOutcome::Cleared);
    assert!(!debounce.is_pending());

    sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_debounce_cancels_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let mut debounce = SearchDebounce::new(Duration::from_millis(500), tx);
        debounce.input("alien");
    }
    sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

// ── Hero rotation ────────────────────────────────────────────────────────────

#[test]
fn test_hero_three_advances_over_five_items() {
    let mut hero = HeroRotation::new(5);
    hero.reset(&items(5));
    for _ in 0..3 {
        hero.advance();
    }
    assert_eq!(hero.index(), 3);
    assert_eq!(hero.current().map(|i| i.id), Some(3));
}

#[test]
fn test_hero_wraps_around() {
    let mut hero = HeroRotation::new(5);
    hero.reset(&items(5));
    for _ in 0..5 {
        hero.advance();
    }
    assert_eq!(hero.index(), 0);
}

#[test]
fn test_hero_keeps_at_most_capacity() {
    let mut hero = HeroRotation::new(5);
    hero.reset(&items(20));
    assert_eq!(hero.len(), 5);

    hero.reset(&items(2));
    assert_eq!(hero.len(), 2);
    assert_eq!(hero.index(), 0);
}

#[test]
fn test_hero_reset_restarts_index() {
    let mut hero = HeroRotation::new(5);
    hero.reset(&items(5));
    hero.advance();
    hero.advance();
    hero.reset(&items(5));
    assert_eq!(hero.index(), 0);
}

#[test]
fn test_empty_hero_does_not_advance() {
    let mut hero = HeroRotation::new(5);
    assert!(hero.is_empty());
    assert!(hero.advance().is_none());
    assert!(hero.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_ticker_sends_rotate_every_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();
    let handle = spawn_ticker(tx, Duration::from_secs(8));

    let mut hero = HeroRotation::new(5);
    hero.reset(&items(5));
    for _ in 0..3 {
        match rx.recv().await.unwrap() {
            Action::RotateHero => {
                hero.advance();
            }
            other => panic!("expected RotateHero, got {:?}", other),
        }
    }
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_secs(24) && elapsed < Duration::from_millis(24_050),
        "third tick at {:?}",
        elapsed
    );
    assert_eq!(hero.index(), 3);

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_ticker_first_tick_is_one_period_out() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_ticker(tx, Duration::from_secs(8));

    assert!(timeout(Duration::from_millis(7_900), rx.recv()).await.is_err());
    assert!(matches!(rx.recv().await, Some(Action::RotateHero)));

    handle.abort();
}
