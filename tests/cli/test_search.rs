//! Tests for the search CLI command
//!
//! - Results in human and JSON output
//! - Gateway rendering via --format-as
//! - Tool failures surfacing as errors

use crate::cli::test_helpers::create_cli_test_services;
use crate::common::FakeTool;
use bookmarks_gateway::cli::commands::search::{execute, RenderFormat, SearchArgs};
use bookmarks_gateway::cli::OutputFormat;
use bookmarks_gateway::core::types::Format;

const RECORDS: &str = r#"[{"url":"http://a","title":"A","category":"C","tags":["x"]},{"url":"http://b","title":"B"}]"#;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        format_as: None,
        limit: None,
    }
}

#[tokio::test]
async fn test_search_human() {
    let tool = FakeTool::suggesting(RECORDS);
    let (services, _assets) = create_cli_test_services(&tool);

    let result = execute(args("a"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_json_with_limit() {
    let tool = FakeTool::suggesting(RECORDS);
    let (services, _assets) = create_cli_test_services(&tool);

    let mut search = args("a");
    search.limit = Some(1);

    let result = execute(search, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_empty_results() {
    let tool = FakeTool::suggesting("[]");
    let (services, _assets) = create_cli_test_services(&tool);

    let result = execute(args("nothing"), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_render_formats() {
    let tool = FakeTool::suggesting(RECORDS);
    let (services, _assets) = create_cli_test_services(&tool);

    for render in [RenderFormat::Json, RenderFormat::Text, RenderFormat::Html] {
        let mut search = args("a");
        search.format_as = Some(render);
        let result = execute(search, &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "{render:?} render failed: {:?}", result.err());
    }
}

#[test]
fn test_render_format_maps_to_gateway_format() {
    assert_eq!(Format::from(RenderFormat::Json), Format::Json);
    assert_eq!(Format::from(RenderFormat::Text), Format::Text);
    assert_eq!(Format::from(RenderFormat::Html), Format::Html);
}

#[tokio::test]
async fn test_search_tool_failure() {
    let tool = FakeTool::script("exit 3\n");
    let (services, _assets) = create_cli_test_services(&tool);

    let result = execute(args("foo"), &services, OutputFormat::Human).await;

    let err = result.expect_err("failing tool should fail the command");
    assert_eq!(err.to_string(), "Error searching for foo");
}

#[tokio::test]
async fn test_search_passes_query_through() {
    let tool = FakeTool::recording();
    let (services, _assets) = create_cli_test_services(&tool);

    execute(args("two words"), &services, OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(tool.recorded_args(), vec!["suggest", "two words"]);
}
