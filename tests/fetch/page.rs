use crate::common;
use httpmock::Method::GET;
use hotlist::fetch::fetch_via_page;
use hotlist::pipeline::normalize_batch;
use hotlist::{FetchStrategy, HotError, RawBatch, RenderedPage};

#[tokio::test]
async fn page_state_script_yields_hot_list() {
    let server = common::setup_server();
    let page = server.mock(|when, then| {
        when.method(GET)
            .path(common::HOT_PATH)
            .header("referer", server.url("/"))
            .header("cookie", "z_c0=token");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::fixture("hot_page.html"));
    });

    let client = common::client_builder_for(&server)
        .cookie("z_c0=token")
        .build()
        .unwrap();
    let batch = RenderedPage.try_fetch(&client).await.unwrap();
    page.assert();

    let items = normalize_batch(&batch, client.canonicalizer());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_deref(), Some("2001"));
    assert_eq!(items[0].title, "Page question");
    assert_eq!(items[0].image, None);
    assert_eq!(items[0].hot_score.as_deref(), Some("88万"));
    assert_eq!(items[1].href, "https://www.zhihu.com/question/2002");
    assert_eq!(items[1].title, "Another & more");
}

#[tokio::test]
async fn page_with_global_state_assignment() {
    let server = common::setup_server();
    let html = r#"<html><body><script>
        window.__INITIAL_STATE__ = {"topstory": {"hotList": [
            {"target": {"title": "Legacy {braces}", "url": "https://www.zhihu.com/question/7"}}
        ]}};
    </script></body></html>"#;
    common::mock_hot_page_body(&server, html);

    let client = common::client_for(&server);
    let items = fetch_via_page(&client).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].target.title.as_deref(), Some("Legacy {braces}"));
}

#[tokio::test]
async fn page_without_state_is_empty_not_an_error() {
    let server = common::setup_server();
    common::mock_hot_page_body(&server, "<html><body>Please log in</body></html>");

    let client = common::client_for(&server);
    let batch = RenderedPage.try_fetch(&client).await.unwrap();
    assert!(matches!(&batch, RawBatch::Api(v) if v.is_empty()));
}

#[tokio::test]
async fn page_state_without_list_is_empty() {
    let server = common::setup_server();
    common::mock_hot_page_body(
        &server,
        r#"<script id="js-initialData" type="text/json">{"initialState":{"topstory":{"hotList":[]}}}</script>"#,
    );

    let client = common::client_for(&server);
    assert!(fetch_via_page(&client).await.unwrap().is_empty());
}

#[tokio::test]
async fn page_server_error_is_an_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path(common::HOT_PATH);
        then.status(502);
    });

    let client = common::client_for(&server);
    let err = fetch_via_page(&client).await.unwrap_err();
    assert!(matches!(err, HotError::Status { status: 502, .. }), "got {err:?}");
}
