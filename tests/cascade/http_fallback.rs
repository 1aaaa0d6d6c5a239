use crate::common;
use httpmock::Method::GET;
use hotlist::{Cascade, DailyStore, DirectQuery, HotError, RenderedPage};

fn api_then_page() -> Cascade {
    Cascade::new(vec![Box::new(DirectQuery), Box::new(RenderedPage)])
}

#[tokio::test]
async fn api_success_skips_the_page() {
    let server = common::setup_server();
    let api = common::mock_hot_api(&server);
    let page = common::mock_hot_page(&server);

    let client = common::client_for(&server);
    let items = api_then_page().acquire(&client).await.unwrap();

    api.assert();
    page.assert_hits(0);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].href, "https://www.zhihu.com/question/1001");
    assert_eq!(items[0].id.as_deref(), Some("1001"));
    assert_eq!(items[0].image.as_deref(), Some("https://pic1.zhimg.com/1001.jpg"));
    assert_eq!(items[0].hot_score.as_deref(), Some("1495万"));
    assert_eq!(items[1].title, "Second question");
    assert_eq!(items[1].hot_score.as_deref(), Some("12.5亿"));
}

#[tokio::test]
async fn api_failure_falls_back_to_page() {
    let server = common::setup_server();
    let api = common::mock_hot_api_status(&server, 500);
    let page = common::mock_hot_page(&server);

    let client = common::client_for(&server);
    let items = api_then_page().acquire(&client).await.unwrap();

    api.assert();
    page.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].href, "https://www.zhihu.com/question/2001");
}

#[tokio::test]
async fn empty_api_payload_falls_back_to_page() {
    let server = common::setup_server();
    let api = server.mock(|when, then| {
        when.method(GET).path(common::API_PATH);
        then.status(200).body(r#"{"data": []}"#);
    });
    let page = common::mock_hot_page(&server);

    let client = common::client_for(&server);
    let items = api_then_page().acquire(&client).await.unwrap();
    api.assert();
    page.assert();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn both_failing_reports_the_page_error() {
    let server = common::setup_server();
    common::mock_hot_api_status(&server, 500);
    server.mock(|when, then| {
        when.method(GET).path(common::HOT_PATH);
        then.status(404);
    });

    let client = common::client_for(&server);
    let err = api_then_page().acquire(&client).await.unwrap_err();
    assert!(matches!(err, HotError::Status { status: 404, .. }), "got {err:?}");
}

#[tokio::test]
async fn run_persists_snapshot_and_day_file() {
    let server = common::setup_server();
    common::mock_hot_api(&server);
    let dir = tempfile::tempdir().unwrap();
    let store = DailyStore::new(dir.path());

    let client = common::client_for(&server);
    let cascade = api_then_page();

    let first = cascade.run(&client, &store, "2024-05-01").await.unwrap();
    assert_eq!(first.total, 2);
    assert_eq!(first.new_items, 2);
    assert_eq!(first.day_total, 2);

    let second = cascade.run(&client, &store, "2024-05-01").await.unwrap();
    assert_eq!(second.new_items, 0);
    assert_eq!(second.day_total, 2);

    assert!(dir.path().join("hotLinks.json").exists());
    assert_eq!(store.load_day("2024-05-01").unwrap().len(), 2);
}
