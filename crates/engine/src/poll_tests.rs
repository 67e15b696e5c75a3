// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pw_adapters::{FakeNotifier, FakePageReader, PageCall};
use pw_core::{EventKind, MonitorTarget, Selector, TargetId};

const URL: &str = "https://shop.example/item";

struct Harness {
    step: PollStep<FakeNotifier>,
    notifier: FakeNotifier,
    reader: FakePageReader,
    tracker: Arc<Mutex<ChangeTracker>>,
    events: pw_core::EventStream,
    entry: RegisteredTarget,
}

fn harness(values: &[&str]) -> Harness {
    let notifier = FakeNotifier::new();
    let tracker = Arc::new(Mutex::new(ChangeTracker::new()));
    let sink = EventSink::new();
    let events = sink.subscribe();
    let reader = FakePageReader::new();
    reader.script(URL, values.iter().copied());
    Harness {
        step: PollStep::new(notifier.clone(), tracker.clone(), sink, PollConfig::default()),
        notifier,
        reader,
        tracker,
        events,
        entry: RegisteredTarget {
            id: TargetId(7),
            target: MonitorTarget::new(URL, Selector::id("price")).with_label("Item"),
        },
    }
}

#[tokio::test]
async fn first_value_is_baseline_and_fires_nothing() {
    let mut h = harness(&["5"]);
    let rules = vec![ActionRule::any_change()];

    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Baseline);
    assert_eq!(h.tracker.lock().unwrap().get(TargetId(7)), Some("5"));
    assert!(h.notifier.calls().is_empty());
    assert!(h.events.try_recv().is_err());
}

#[tokio::test]
async fn unchanged_value_skips_rule_evaluation() {
    let mut h = harness(&["5", "5"]);
    let rules = vec![ActionRule::equals("5")];

    h.step.run(&mut h.reader, &h.entry, &rules).await;
    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Unchanged);
    assert!(h.notifier.calls().is_empty());
}

#[tokio::test]
async fn change_publishes_description_and_dispatches_matches() {
    let mut h = harness(&["5", "12"]);
    let rules = vec![ActionRule::greater_than("10"), ActionRule::less_than("10")];

    h.step.run(&mut h.reader, &h.entry, &rules).await;
    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Changed { matched: 1 });
    let event = h.events.try_recv().unwrap();
    assert_eq!(event.kind, EventKind::Change);
    assert_eq!(event.message, "Item changed:\nold: 5\nnew: 12");
    let calls = h.notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message, event.message);
    assert_eq!(h.tracker.lock().unwrap().get(TargetId(7)), Some("12"));
}

#[tokio::test]
async fn fetch_failure_is_reported_and_keeps_stored_value() {
    let mut h = harness(&["5"]);
    h.step.run(&mut h.reader, &h.entry, &[]).await;

    let mut failing = FakePageReader::new();
    failing.push_error(URL, PageError::Timeout(URL.to_string()));
    let outcome = h.step.run(&mut failing, &h.entry, &[]).await;

    assert!(matches!(outcome, PollOutcome::Failed(PageError::Timeout(_))));
    let event = h.events.try_recv().unwrap();
    assert_eq!(event.kind, EventKind::Error);
    assert!(event.message.starts_with("Failed to read Item"));
    assert_eq!(h.tracker.lock().unwrap().get(TargetId(7)), Some("5"));
}

#[tokio::test]
async fn long_values_are_cut_in_descriptions() {
    let long_old = "a".repeat(300);
    let long_new = "b".repeat(300);
    let mut h = harness(&[long_old.as_str(), long_new.as_str()]);

    h.step.run(&mut h.reader, &h.entry, &[]).await;
    h.step.run(&mut h.reader, &h.entry, &[]).await;

    let event = h.events.try_recv().unwrap();
    assert!(event.message.contains(&"a".repeat(100)));
    assert!(!event.message.contains(&"a".repeat(101)));
    // The tracker keeps the full value
    assert_eq!(h.tracker.lock().unwrap().get(TargetId(7)).map(str::len), Some(300));
}

#[tokio::test]
async fn baseline_never_fires_even_when_condition_holds() {
    let mut h = harness(&["In stock"]);
    let rules = vec![ActionRule::contains("In stock")];

    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Baseline);
    assert!(h.notifier.calls().is_empty());
}

fn actions(reader: &FakePageReader) -> Vec<PageCall> {
    reader
        .calls()
        .into_iter()
        .filter(|call| !matches!(call, PageCall::Fetch { .. }))
        .collect()
}

#[tokio::test]
async fn matching_rules_dispatch_in_rule_order() {
    let mut h = harness(&["regular", "on sale"]);
    let rules = vec![
        ActionRule::contains("sale").with_click(Selector::id("a")),
        ActionRule::equals("nothing").with_click(Selector::id("never")),
        ActionRule::any_change().with_click(Selector::id("b")),
    ];

    h.step.run(&mut h.reader, &h.entry, &rules).await;
    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Changed { matched: 2 });
    assert_eq!(
        actions(&h.reader),
        vec![
            PageCall::Click {
                selector: Selector::id("a")
            },
            PageCall::Click {
                selector: Selector::id("b")
            },
        ]
    );
}

#[tokio::test]
async fn failed_action_does_not_stop_later_rules() {
    let mut h = harness(&["1", "2"]);
    h.reader.reject_clicks();
    h.reader.fail_force_clicks();
    let rules = vec![
        ActionRule::any_change()
            .with_notify(false)
            .with_click(Selector::id("a")),
        ActionRule::any_change()
            .with_notify(false)
            .with_click(Selector::id("b")),
    ];

    h.step.run(&mut h.reader, &h.entry, &rules).await;
    let outcome = h.step.run(&mut h.reader, &h.entry, &rules).await;

    assert_eq!(outcome, PollOutcome::Changed { matched: 2 });
    let clicked: Vec<Selector> = actions(&h.reader)
        .into_iter()
        .filter_map(|call| match call {
            PageCall::ForceClick { selector } => Some(selector),
            _ => None,
        })
        .collect();
    assert_eq!(clicked, vec![Selector::id("a"), Selector::id("b")]);

    let kinds: Vec<EventKind> = std::iter::from_fn(|| h.events.try_recv().ok())
        .map(|event| event.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![EventKind::Change, EventKind::Error, EventKind::Error]
    );
}
