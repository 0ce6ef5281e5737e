//! Adapter for the issue-centric ticket tracker.

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

const LIST_ISSUES: &str = "list_issues";
const TRANSITION_ISSUE: &str = "transition_issue";
const CREATE_ISSUE: &str = "create_issue";
const LIST_PROJECTS: &str = "list_projects";

/// Ticket tracker adapter: issues inside flat projects, moved via named
/// workflow transitions.
pub struct TicketTrackerAdapter<E>
where
    E: ToolExecutor,
{
    executor: Arc<E>,
}

impl<E> TicketTrackerAdapter<E>
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
struct IssuesPayload {
    issues: Vec<IssueRow>,
}

#[derive(Debug, Deserialize)]
struct IssueRow {
    id: String,
    summary: String,
    project: String,
    status: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl IssueRow {
    fn into_item(self) -> NativeItem {
        let mut item = NativeItem::new(self.id, self.summary, self.project, self.status);
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

/// Maps a canonical status onto the tracker's transition label.
const fn transition_label(target: CanonicalStatus) -> &'static str {
    match target {
        CanonicalStatus::Todo => "To Do",
        CanonicalStatus::InProgress => "In Progress",
        CanonicalStatus::Review => "In Review",
        CanonicalStatus::Done => "Done",
    }
}

#[async_trait]
impl<E> PlatformAdapter for TicketTrackerAdapter<E>
where
    E: ToolExecutor,
{
    fn kind(&self) -> PlatformKind {
        PlatformKind::TicketTracker
    }

    async fn list_items(&self) -> AdapterResult<Vec<NativeItem>> {
        let data = invoke_tool(&*self.executor, LIST_ISSUES, json!({})).await?;
        let payload: IssuesPayload = decode(LIST_ISSUES, data)?;
        Ok(payload
            .issues
            .into_iter()
            .map(IssueRow::into_item)
            .collect())
    }

    async fn move_item(
        &self,
        item_id: &str,
        target: CanonicalStatus,
        _context: &MoveContext,
    ) -> AdapterResult<()> {
        let args = json!({
            "issue_id": item_id,
            "status": transition_label(target),
        });
        invoke_tool(&*self.executor, TRANSITION_ISSUE, args).await?;
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
            "summary": spec.title(),
            "description": spec.description(),
            "due_date": spec.due_date(),
        });
        invoke_tool(&*self.executor, CREATE_ISSUE, args).await?;
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
