//! # Edit Session
//!
//! One user's editing of one layout document: drops from the canvas,
//! render passes, open properties panels, and media uploads, all against
//! a single [`EditorState`].

use std::collections::HashMap;
use std::time::Instant;

use canvas_tree::{Mutation, MutationError, NodeKind};
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::notice::{Notice, NoticeLog, NoticeSink};
use crate::placement::{apply_drop, DropEvent, EditorState, PlacementOutcome};
use crate::properties::PropertiesEditor;
use crate::render::{render, RenderPass};
use crate::upload::{MediaKind, MediaUploader, UploadError};
use crate::EditorError;

pub struct EditSession {
    /// Session identifier, used in logs
    pub id: String,
    state: EditorState,
    config: EditorConfig,
    notices: NoticeLog,
    /// Open properties panels by node id
    editors: HashMap<String, PropertiesEditor>,
}

impl EditSession {
    pub fn new(id: impl Into<String>, state: EditorState, config: EditorConfig) -> Self {
        Self {
            id: id.into(),
            state,
            config,
            notices: NoticeLog::new(),
            editors: HashMap::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    /// Handle a drop from the canvas
    pub fn drop_item(&mut self, event: &DropEvent) -> PlacementOutcome {
        apply_drop(&mut self.state, event)
    }

    /// Render the current tree, raising a notice if it is cut at the depth limit
    pub fn render(&self) -> RenderPass {
        render(&self.state.tree, self.config.max_depth, &self.notices)
    }

    /// Open (or return the already open) properties panel of a content leaf
    pub fn open_editor(&mut self, node_id: &str) -> Result<&mut PropertiesEditor, EditorError> {
        if !self.editors.contains_key(node_id) {
            let node = self
                .state
                .tree
                .get(node_id)
                .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
            if node.kind != NodeKind::Content {
                return Err(MutationError::NotContent(node_id.to_string()).into());
            }

            let editor = PropertiesEditor::new(
                node_id,
                node.content.clone().unwrap_or_default(),
                self.config.commit_delay(),
            );
            self.editors.insert(node_id.to_string(), editor);
            debug!(session = %self.id, node_id, "opened properties editor");
        }

        self.editor_mut(node_id)
    }

    pub fn editor_mut(&mut self, node_id: &str) -> Result<&mut PropertiesEditor, EditorError> {
        self.editors
            .get_mut(node_id)
            .ok_or_else(|| EditorError::NoEditor(node_id.to_string()))
    }

    /// Close a properties panel. Edits still waiting for their quiet
    /// period are dropped.
    pub fn close_editor(&mut self, node_id: &str) -> Result<(), EditorError> {
        let editor = self
            .editors
            .remove(node_id)
            .ok_or_else(|| EditorError::NoEditor(node_id.to_string()))?;

        if editor.has_pending() {
            debug!(session = %self.id, node_id, "discarding uncommitted edits");
        }
        Ok(())
    }

    /// Commit every draft whose quiet period has elapsed. Returns how many
    /// nodes were updated.
    ///
    /// Each draft commits on its own. A draft whose node can no longer take
    /// content (removed, or redecorated into a container) is dropped along
    /// with its editor; the others still commit.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due: Vec<Mutation> = self
            .editors
            .values_mut()
            .filter_map(|editor| {
                editor.poll_commit(now).map(|content| Mutation::SetContent {
                    node_id: editor.node_id().to_string(),
                    content,
                })
            })
            .collect();

        let mut committed = 0;
        for mutation in &due {
            match mutation.apply(&mut self.state.tree) {
                Ok(_) => committed += 1,
                Err(err) => {
                    if let Mutation::SetContent { node_id, .. } = mutation {
                        warn!(session = %self.id, %node_id, error = %err, "dropping uncommittable edits");
                        self.editors.remove(node_id);
                    }
                }
            }
        }

        if committed > 0 {
            info!(session = %self.id, count = committed, "committed properties");
        }
        committed
    }

    /// Upload a media file for a content leaf and commit its URL.
    ///
    /// Raises a notice either way. On failure the tree is not touched.
    pub async fn upload_media(
        &mut self,
        node_id: &str,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
        uploader: &MediaUploader,
    ) -> Result<String, EditorError> {
        if MediaKind::from_mime(mime).is_none() {
            self.notices.notify(Notice::UnsupportedFile(mime.to_string()));
            return Err(UploadError::UnsupportedFile(mime.to_string()).into());
        }

        // Fail on a bad target before spending a request on it
        self.open_editor(node_id)?;

        let (kind, url) = match uploader.upload(file_name, mime, bytes).await {
            Ok(uploaded) => uploaded,
            Err(err) => {
                self.notices.notify(Notice::UploadFailed(err.to_string()));
                return Err(err.into());
            }
        };

        // The draft only takes the URL once the tree has it
        let mut content = self.open_editor(node_id)?.draft().clone();
        content.url = url.clone();
        let commit = Mutation::SetContent {
            node_id: node_id.to_string(),
            content,
        };
        if let Err(err) = commit.apply(&mut self.state.tree) {
            self.notices.notify(Notice::UploadFailed(err.to_string()));
            return Err(err.into());
        }
        self.editor_mut(node_id)?.set_media_url(url.clone());

        self.notices.notify(Notice::UploadSucceeded(kind));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{IdGenerator, Palette};
    use canvas_tree::{LayoutTree, NodeTemplate};
    use std::time::Duration;

    fn session() -> EditSession {
        let tree = LayoutTree::new("root", &NodeTemplate::new(NodeKind::Grid).with_grid("2", "2"));
        let mut ids = IdGenerator::from_seed("s".to_string());
        let state = EditorState::new(tree, Palette::standard(&mut ids));
        let mut session = EditSession::new("client-1", state, EditorConfig::default());

        session.drop_item(&DropEvent::new("leaf", NodeTemplate::new(NodeKind::Content), "root"));
        session.drop_item(&DropEvent::new("box", NodeTemplate::new(NodeKind::Flex), "root"));
        session
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert_eq!(session.id, "client-1");
        assert_eq!(session.state().version, 2);
        assert!(session.notices().is_empty());
    }

    #[test]
    fn test_edits_commit_after_delay() {
        let mut session = session();
        let start = Instant::now();

        session.open_editor("leaf").unwrap().set_title("Hello", start);

        assert_eq!(session.tick(start + Duration::from_millis(10)), 0);
        assert!(session.state().tree.get("leaf").unwrap().content.is_none());

        assert_eq!(session.tick(start + Duration::from_secs(1)), 1);
        let content = session.state().tree.get("leaf").unwrap().content.clone().unwrap();
        assert_eq!(content.title, "Hello");
    }

    #[test]
    fn test_close_discards_pending_edits() {
        let mut session = session();
        let start = Instant::now();

        session.open_editor("leaf").unwrap().set_title("Lost", start);
        session.close_editor("leaf").unwrap();

        assert_eq!(session.tick(start + Duration::from_secs(5)), 0);
        assert!(session.state().tree.get("leaf").unwrap().content.is_none());
        assert!(matches!(session.editor_mut("leaf"), Err(EditorError::NoEditor(_))));
    }

    #[test]
    fn test_redecorated_leaf_does_not_block_other_commits() {
        let mut session = session();
        let start = Instant::now();
        let leaf = NodeTemplate::new(NodeKind::Content);

        let ids: Vec<String> = (0..8).map(|n| format!("leaf-{n}")).collect();
        for id in &ids {
            session.drop_item(&DropEvent::new(id.clone(), leaf.clone(), "root"));
            session.open_editor(id).unwrap().set_title(format!("Title {id}"), start);
        }
        session.drop_item(&DropEvent::new("bad", leaf.clone(), "root"));
        session.open_editor("bad").unwrap().set_title("Gone", start);

        let moved = session.drop_item(&DropEvent::new("bad", NodeTemplate::new(NodeKind::Flex), "box"));
        assert!(moved.is_placed());

        assert_eq!(session.tick(start + Duration::from_secs(2)), 8);
        for id in &ids {
            let content = session.state().tree.get(id).unwrap().content.clone().unwrap();
            assert_eq!(content.title, format!("Title {id}"));
        }
        assert!(session.state().tree.get("bad").unwrap().content.is_none());
        assert!(matches!(session.editor_mut("bad"), Err(EditorError::NoEditor(_))));
        assert_eq!(session.tick(start + Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_editor_only_opens_on_content_leaves() {
        let mut session = session();

        assert!(matches!(
            session.open_editor("box"),
            Err(EditorError::Mutation(MutationError::NotContent(_)))
        ));
        assert!(matches!(
            session.open_editor("ghost"),
            Err(EditorError::Mutation(MutationError::NodeNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_unsupported_file_raises_notice() {
        let mut session = session();
        let before = session.state().clone();
        let uploader = MediaUploader::new("http://127.0.0.1:9");

        let result = session
            .upload_media("leaf", "notes.pdf", "application/pdf", vec![1, 2, 3], &uploader)
            .await;

        assert!(matches!(result, Err(EditorError::Upload(UploadError::UnsupportedFile(_)))));
        assert_eq!(session.notices().snapshot(), vec![Notice::UnsupportedFile("application/pdf".to_string())]);
        assert_eq!(session.state(), &before);
    }
}
