//! Adapter for the flat task list.

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
const COMPLETE_TASK: &str = "complete_task";
const REOPEN_TASK: &str = "reopen_task";
const CREATE_TASK: &str = "create_task";
const LIST_PROJECTS: &str = "list_projects";

/// Native label reported for completed tasks.
const COMPLETED_LABEL: &str = "completed";

/// Native label reported for open tasks outside any section.
const OPEN_LABEL: &str = "open";

/// Flat task list adapter: plain projects of tasks that are either open or
/// completed, with optional section labels in between.
pub struct FlatListAdapter<E>
where
    E: ToolExecutor,
{
    executor: Arc<E>,
}

impl<E> FlatListAdapter<E>
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
    content: String,
    project: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    section: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl TaskRow {
    fn into_item(self) -> NativeItem {
        let native_status = if self.completed {
            COMPLETED_LABEL.to_owned()
        } else {
            self.section.unwrap_or_else(|| OPEN_LABEL.to_owned())
        };
        let mut item = NativeItem::new(self.id, self.content, self.project, native_status);
        if let Some(due_date) = self.due_date {
            item = item.with_due_date(due_date);
        }
        if let Some(priority) = self.priority.as_deref().and_then(Priority::from_native) {
            item = item.with_priority(priority);
        }
        item
    }
}

#[async_trait]
impl<E> PlatformAdapter for FlatListAdapter<E>
where
    E: ToolExecutor,
{
    fn kind(&self) -> PlatformKind {
        PlatformKind::FlatList
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
        // The platform only distinguishes open and completed; every non-done
        // target reopens the task.
        let tool = if target == CanonicalStatus::Done {
            COMPLETE_TASK
        } else {
            REOPEN_TASK
        };
        invoke_tool(&*self.executor, tool, json!({ "task_id": item_id })).await?;
        Ok(())
    }

    async fn create_item(
        &self,
        location: &CreateLocation,
        spec: &NewItemSpec,
    ) -> AdapterResult<()> {
        require_leaf(location.leaf(), ResourceKind::Project)?;
        let args = json!({
            "project_id": location.leaf().id(),
            "content": spec.title(),
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
        match parent {
            None => {
                let data = invoke_tool(&*self.executor, LIST_PROJECTS, json!({})).await?;
                decode_nodes(LIST_PROJECTS, data, "projects", ResourceKind::Project)
            }
            Some(node) => Err(AdapterError::UnsupportedParent {
                parent: node.kind(),
            }),
        }
    }
}
