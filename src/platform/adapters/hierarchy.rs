//! Adapter for the folder-based hierarchical task tool.

use super::support::{decode, decode_nodes, invoke_tool, require_leaf};
use crate::platform::domain::{
    CanonicalStatus, CreateLocation, NativeItem, PlatformKind, Priority, ResourceKind,
    ResourceNode,
};
use crate::platform::ports::{
    AdapterError, AdapterResult, MoveContext, NewItemSpec, PlatformAdapter, ToolExecutor,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const LIST_TASKS: &str = "list_tasks";
const UPDATE_TASK_STATUS: &str = "update_task_status";
const CREATE_TASK: &str = "create_task";
const LIST_TEAMS: &str = "list_teams";
const LIST_SPACES: &str = "list_spaces";
const LIST_FOLDERS: &str = "list_folders";
const LIST_FOLDER_LISTS: &str = "list_folder_lists";
const LIST_FOLDERLESS_LISTS: &str = "list_folderless_lists";

/// Hierarchical tool adapter: tasks live in lists nested under
/// team → space → folder, with lists also allowed directly under a space.
pub struct HierarchyAdapter<E>
where
    E: ToolExecutor,
{
    executor: Arc<E>,
}

impl<E> HierarchyAdapter<E>
where
    E: ToolExecutor,
{
    /// Creates an adapter over the platform's tool executor.
    #[must_use]
    pub const fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }
}

#[derive(Debug, Deserialize)]
struct TasksPayload {
    tasks: Vec<TaskRow>,
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    id: String,
    name: String,
    status: String,
    #[serde(default)]
    project: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl TaskRow {
    fn into_item(self) -> NativeItem {
        let mut item = NativeItem::new(self.id, self.name, self.project, self.status);
        if let Some(due_date) = self.due_date {
            item = item.with_due_date(due_date);
        }
        if let Some(assignee) = self.assignee {
            item = item.with_assignee(assignee);
        }
        if let Some(priority) = self.priority.as_deref().and_then(Priority::from_native) {
            item = item.with_priority(priority);
        }
        item
    }
}

/// Maps a canonical status onto the tool's native status label.
const fn native_status(target: CanonicalStatus) -> &'static str {
    match target {
        CanonicalStatus::Todo => "to do",
        CanonicalStatus::InProgress => "in progress",
        CanonicalStatus::Review => "review",
        CanonicalStatus::Done => "complete",
    }
}

#[async_trait]
impl<E> PlatformAdapter for HierarchyAdapter<E>
where
    E: ToolExecutor,
{
    fn kind(&self) -> PlatformKind {
        PlatformKind::HierarchicalTool
    }

    async fn list_items(&self) -> AdapterResult<Vec<NativeItem>> {
        let data = invoke_tool(&*self.executor, LIST_TASKS, json!({})).await?;
        let payload: TasksPayload = decode(LIST_TASKS, data)?;
        Ok(payload.tasks.into_iter().map(TaskRow::into_item).collect())
    }

    async fn move_item(
        &self,
        item_id: &str,
        target: CanonicalStatus,
        _context: &MoveContext,
    ) -> AdapterResult<()> {
        let args = json!({
            "task_id": item_id,
            "status": native_status(target),
        });
        invoke_tool(&*self.executor, UPDATE_TASK_STATUS, args).await?;
        Ok(())
    }

    async fn create_item(
        &self,
        location: &CreateLocation,
        spec: &NewItemSpec,
    ) -> AdapterResult<()> {
        require_leaf(location.leaf(), ResourceKind::List)?;
        let args = json!({
            "list_id": location.leaf().id(),
            "name": spec.title(),
            "description": spec.description(),
            "due_date": spec.due_date(),
        });
        invoke_tool(&*self.executor, CREATE_TASK, args).await?;
        Ok(())
    }

    async fn list_children(
        &self,
        parent: Option<&ResourceNode>,
    ) -> AdapterResult<Vec<ResourceNode>> {
        let Some(node) = parent else {
            let data = invoke_tool(&*self.executor, LIST_TEAMS, json!({})).await?;
            return decode_nodes(LIST_TEAMS, data, "teams", ResourceKind::Team);
        };
        match node.kind() {
            ResourceKind::Team => {
                let args = json!({ "team_id": node.id() });
                let data = invoke_tool(&*self.executor, LIST_SPACES, args).await?;
                decode_nodes(LIST_SPACES, data, "spaces", ResourceKind::Space)
            }
            ResourceKind::Space => {
                let args = json!({ "space_id": node.id() });
                let data = invoke_tool(&*self.executor, LIST_FOLDERS, args).await?;
                decode_nodes(LIST_FOLDERS, data, "folders", ResourceKind::Folder)
            }
            // The synthetic "no folder" option carries its space's id and
            // routes to the lists living directly under that space.
            ResourceKind::Folder if node.is_folderless() => {
                let args = json!({ "space_id": node.id() });
                let data = invoke_tool(&*self.executor, LIST_FOLDERLESS_LISTS, args).await?;
                decode_nodes(LIST_FOLDERLESS_LISTS, data, "lists", ResourceKind::List)
            }
            ResourceKind::Folder => {
                let args = json!({ "folder_id": node.id() });
                let data = invoke_tool(&*self.executor, LIST_FOLDER_LISTS, args).await?;
                decode_nodes(LIST_FOLDER_LISTS, data, "lists", ResourceKind::List)
            }
            kind => Err(AdapterError::UnsupportedParent { parent: kind }),
        }
    }
}
