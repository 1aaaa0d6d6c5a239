use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use hotlist::{Cascade, FetchStrategy, HotClient, HotError, RawBatch, RawBrowserItem};

#[derive(Clone, Copy)]
enum Outcome {
    Items,
    Empty,
    Unusable,
    Fail,
    Hang,
}

struct Scripted {
    name: &'static str,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    fn boxed(name: &'static str, outcome: Outcome) -> (Box<dyn FetchStrategy>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let s = Scripted {
            name,
            outcome,
            calls: calls.clone(),
        };
        (Box::new(s), calls)
    }
}

fn browser_item(href: &str, title: &str) -> RawBrowserItem {
    RawBrowserItem {
        href: Some(href.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

impl FetchStrategy for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn try_fetch<'a>(
        &'a self,
        _client: &'a HotClient,
    ) -> Pin<Box<dyn Future<Output = Result<RawBatch, HotError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = self.name;
        let outcome = self.outcome;
        Box::pin(async move {
            match outcome {
                Outcome::Items => Ok(RawBatch::Browser(vec![browser_item(
                    &format!("https://www.zhihu.com/question/{}", name.len()),
                    name,
                )])),
                Outcome::Empty => Ok(RawBatch::Browser(Vec::new())),
                // Present but normalizes to nothing.
                Outcome::Unusable => Ok(RawBatch::Browser(vec![RawBrowserItem::default()])),
                Outcome::Fail => Err(HotError::Data(format!("{name} broke"))),
                Outcome::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(RawBatch::Browser(Vec::new()))
                }
            }
        })
    }
}

#[tokio::test]
async fn first_success_stops_the_cascade() {
    let (a, a_calls) = Scripted::boxed("a", Outcome::Items);
    let (b, b_calls) = Scripted::boxed("b", Outcome::Items);

    let items = Cascade::new(vec![a, b])
        .acquire(&HotClient::default())
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "a");
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn error_advances_to_next_strategy() {
    let (a, _) = Scripted::boxed("a", Outcome::Fail);
    let (b, b_calls) = Scripted::boxed("bb", Outcome::Items);

    let items = Cascade::new(vec![a, b])
        .acquire(&HotClient::default())
        .await
        .unwrap();

    assert_eq!(items[0].title, "bb");
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_and_unusable_results_advance() {
    let (a, _) = Scripted::boxed("a", Outcome::Empty);
    let (b, b_calls) = Scripted::boxed("b", Outcome::Unusable);
    let (c, c_calls) = Scripted::boxed("ccc", Outcome::Items);

    let items = Cascade::new(vec![a, b, c])
        .acquire(&HotClient::default())
        .await
        .unwrap();

    assert_eq!(items[0].title, "ccc");
    assert_eq!(items[0].id.as_deref(), Some("3"));
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn last_strategy_error_propagates() {
    let (a, _) = Scripted::boxed("a", Outcome::Empty);
    let (b, _) = Scripted::boxed("b", Outcome::Fail);

    let err = Cascade::new(vec![a, b])
        .acquire(&HotClient::default())
        .await
        .unwrap_err();
    match err {
        HotError::Data(msg) => assert_eq!(msg, "b broke"),
        other => panic!("expected the last strategy's error, got {other:?}"),
    }
}

#[tokio::test]
async fn trailing_empty_result_is_reported_as_empty() {
    let (a, _) = Scripted::boxed("a", Outcome::Fail);
    let (b, _) = Scripted::boxed("b", Outcome::Unusable);

    let err = Cascade::new(vec![a, b])
        .acquire(&HotClient::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HotError::Empty { strategy: "b" }), "got {err:?}");
}

#[tokio::test]
async fn no_strategies_is_a_configuration_error() {
    let err = Cascade::new(Vec::new())
        .acquire(&HotClient::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HotError::Config(_)));
}

#[tokio::test]
async fn deadline_ends_the_cascade_with_timeout() {
    let (a, _) = Scripted::boxed("a", Outcome::Hang);
    let (b, b_calls) = Scripted::boxed("b", Outcome::Items);

    let err = Cascade::new(vec![a, b])
        .with_deadline(Some(Duration::from_millis(50)))
        .acquire(&HotClient::default())
        .await
        .unwrap_err();

    assert!(matches!(err, HotError::Timeout(_)), "got {err:?}");
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn strategy_names_follow_construction_order() {
    let (a, _) = Scripted::boxed("first", Outcome::Empty);
    let (b, _) = Scripted::boxed("second", Outcome::Empty);
    assert_eq!(Cascade::new(vec![a, b]).strategy_names(), ["first", "second"]);
}
