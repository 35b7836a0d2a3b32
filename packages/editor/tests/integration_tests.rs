//! Integration tests for editor crate

use std::time::{Duration, Instant};

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use canvas_editor::{
    place, DropEvent, EditSession, EditorConfig, EditorError, EditorState, MediaKind,
    MediaUploader, Notice, Palette, PaletteItem, PlacementOutcome, UploadError,
};
use canvas_tree::{LayoutTree, MutationOutcome, NodeKind, NodeTemplate};
use serde_json::json;

fn content_template() -> NodeTemplate {
    NodeTemplate::new(NodeKind::Content)
        .with_grid("1", "1")
        .with_span("1", "1")
}

fn empty_grid_state() -> EditorState {
    let tree: LayoutTree = serde_json::from_str(
        r#"{ "id": "root", "type": "grid", "columns": "2", "rows": "2", "children": [] }"#,
    )
    .unwrap();

    let mut palette = Palette::new();
    palette
        .push(PaletteItem {
            id: "a".to_string(),
            label: "Content".to_string(),
            thumbnail: None,
            template: content_template(),
        })
        .unwrap();

    EditorState::new(tree, palette)
}

/// Media host that answers every upload with `status`
async fn spawn_media_host(status: StatusCode, with_url: bool) -> String {
    let app = Router::new().route(
        "/api/uploadMedia",
        post(move |mut multipart: Multipart| async move {
            let mut file_name = String::new();
            while let Ok(Some(field)) = multipart.next_field().await {
                if field.name() == Some("media") {
                    file_name = field.file_name().unwrap_or_default().to_string();
                }
                let _ = field.bytes().await;
            }

            let body = if with_url {
                json!({ "mediaUrl": format!("https://cdn.test/{file_name}") })
            } else {
                json!({ "ok": true })
            };
            (status, Json(body))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn session_with_leaf() -> EditSession {
    let mut session = EditSession::new("client-1", empty_grid_state(), EditorConfig::default());
    session.drop_item(&DropEvent::new("a", content_template(), "root"));
    session
}

#[test]
fn test_end_to_end_drop_scenario() {
    let event: DropEvent = serde_json::from_value(json!({
        "movingId": "a",
        "template": { "type": "content", "columns": "1", "rows": "1", "colspan": "1", "rowspan": "1" },
        "targetParentId": "root"
    }))
    .unwrap();

    let placed = place(empty_grid_state(), &event);
    assert_eq!(placed.outcome, PlacementOutcome::Placed(MutationOutcome::Inserted));

    let doc = placed.state.tree.to_node();
    assert_eq!(doc.children.len(), 1);
    assert_eq!(doc.children[0].id, "a");
    assert_eq!(doc.children[0].kind, NodeKind::Content);
    assert!(doc.children[0].children.is_empty());
    assert!(placed.state.palette.get("a").is_none());

    let once = placed.state.clone();
    let again = place(placed.state, &event);
    assert_eq!(again.outcome, PlacementOutcome::Ignored);
    assert_eq!(again.state, once);
}

#[test]
fn test_nested_move_scenario() {
    let tree: LayoutTree = serde_json::from_str(
        r#"{
            "id": "root", "type": "grid", "columns": "2", "rows": "2",
            "children": [
                { "id": "b", "type": "flex", "children": [
                    { "id": "a", "type": "flex", "children": [{ "id": "a1", "type": "content" }] }
                ]}
            ]
        }"#,
    )
    .unwrap();
    let mut session = EditSession::new("client-1", EditorState::new(tree, Palette::new()), EditorConfig::default());

    let outcome = session.drop_item(&DropEvent::new("a", NodeTemplate::new(NodeKind::Flex), "root"));

    assert_eq!(outcome, PlacementOutcome::Placed(MutationOutcome::Moved));
    let tree = &session.state().tree;
    assert!(tree.children_of("b").unwrap().is_empty());
    assert_eq!(tree.children_of("root").unwrap(), &["b".to_string(), "a".to_string()]);
    assert_eq!(tree.children_of("a").unwrap(), &["a1".to_string()]);
}

#[test]
fn test_render_cuts_deep_branches_once_per_pass() {
    let mut session = EditSession::new("client-1", empty_grid_state(), EditorConfig::default());
    let flex = NodeTemplate::new(NodeKind::Flex);
    let mut parent = "root".to_string();
    for level in 1..=7 {
        let id = format!("level-{level}");
        session.drop_item(&DropEvent::new(id.clone(), flex.clone(), parent));
        parent = id;
    }

    let pass = session.render();

    assert!(pass.truncated);
    assert_eq!(pass.deepest, 6);
    assert!(!pass.ids().contains(&"level-7"));
    let notices = session.notices().drain();
    assert_eq!(notices, vec![Notice::DepthExceeded { max: 6 }]);
    assert_eq!(notices[0].to_string(), "Maximum deep level is 6");
}

#[test]
fn test_properties_commit_through_session() {
    let mut session = session_with_leaf();
    let start = Instant::now();

    let editor = session.open_editor("a").unwrap();
    let key = editor.add_title_section();
    editor.set_section_text(&key, "Welcome", start);
    editor.set_route("/home", start + Duration::from_millis(400));

    assert_eq!(session.tick(start + Duration::from_millis(900)), 0);
    assert_eq!(session.tick(start + Duration::from_millis(1400)), 1);

    let content = session.state().tree.get("a").unwrap().content.clone().unwrap();
    assert_eq!(content.route, "/home");
    assert_eq!(content.titles[&key].text, "Welcome");
    assert_eq!(content.titles[&key].color, "#000000");
}

#[tokio::test]
async fn test_upload_commits_media_url() {
    let host = spawn_media_host(StatusCode::CREATED, true).await;
    let uploader = MediaUploader::new(&host);
    let mut session = session_with_leaf();

    let url = session
        .upload_media("a", "cat.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47], &uploader)
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.test/cat.png");
    let content = session.state().tree.get("a").unwrap().content.clone().unwrap();
    assert_eq!(content.url, url);
    assert_eq!(session.editor_mut("a").unwrap().draft().url, url);
    assert_eq!(session.notices().snapshot(), vec![Notice::UploadSucceeded(MediaKind::Image)]);
}

#[tokio::test]
async fn test_upload_failure_leaves_tree_untouched() {
    let host = spawn_media_host(StatusCode::INTERNAL_SERVER_ERROR, true).await;
    let uploader = MediaUploader::new(&host);
    let mut session = session_with_leaf();
    let before = session.state().clone();

    let result = session
        .upload_media("a", "clip.mp4", "video/mp4", vec![0; 16], &uploader)
        .await;

    assert!(matches!(result, Err(EditorError::Upload(UploadError::Status(500)))));
    assert_eq!(session.state(), &before);
    assert_eq!(session.editor_mut("a").unwrap().draft().url, "");

    let notices = session.notices().snapshot();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].to_string(), "Error uploading media to server.");
}

#[tokio::test]
async fn test_unreachable_media_host_is_a_transport_failure() {
    // Bind then release a port so nothing is listening on it
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let uploader = MediaUploader::new(&format!("http://{addr}"));
    let mut session = session_with_leaf();
    let before = session.state().clone();

    let result = session
        .upload_media("a", "cat.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47], &uploader)
        .await;

    assert!(matches!(result, Err(EditorError::Upload(UploadError::Transport(_)))));
    assert_eq!(session.state(), &before);

    let notices = session.notices().snapshot();
    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0], Notice::UploadFailed(_)));
}

#[tokio::test]
async fn test_upload_without_media_url_fails() {
    let host = spawn_media_host(StatusCode::OK, false).await;
    let uploader = MediaUploader::new(&host);

    let result = uploader.upload("cat.gif", "image/gif", vec![1]).await;

    assert!(matches!(result, Err(UploadError::MissingUrl)));
}
