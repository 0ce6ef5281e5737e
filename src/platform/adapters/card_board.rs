//! Adapter for the card board: boards containing named lists of cards.

use super::support::{decode, decode_nodes, invoke_tool, require_leaf};
use crate::platform::domain::{
    CanonicalStatus, CreateLocation, NativeItem, PlatformKind, ResourceKind, ResourceNode,
    normalize_label,
};
use crate::platform::ports::{
    AdapterError, AdapterResult, MoveContext, NewItemSpec, PlatformAdapter, ToolExecutor,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const LIST_CARDS: &str = "list_cards";
const LIST_BOARD_LISTS: &str = "list_board_lists";
const MOVE_CARD: &str = "move_card";
const CREATE_CARD: &str = "create_card";
const LIST_BOARDS: &str = "list_boards";

/// Card board adapter.
///
/// The platform has no status field: a card's lifecycle state is the name of
/// the list containing it, so listing reports the list name as the native
/// label and moving means re-homing the card onto a list whose name
/// normalizes to the target status.
pub struct CardBoardAdapter<E>
where
    E: ToolExecutor,
{
    executor: Arc<E>,
}

impl<E> CardBoardAdapter<E>
where
    E: ToolExecutor,
{
    /// Creates an adapter over the platform's tool executor.
    #[must_use]
    pub const fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }

    /// Finds the id of the first list on the board whose name normalizes to
    /// the target status.
    async fn resolve_target_list(
        &self,
        board_ref: &str,
        target: CanonicalStatus,
    ) -> AdapterResult<String> {
        let args = json!({ "board_id": board_ref });
        let data = invoke_tool(&*self.executor, LIST_BOARD_LISTS, args).await?;
        let payload: BoardListsPayload = decode(LIST_BOARD_LISTS, data)?;
        payload
            .lists
            .into_iter()
            .find(|list| normalize_label(&list.name) == target)
            .map(|list| list.id)
            .ok_or_else(|| AdapterError::NoMatchingList {
                board: board_ref.to_owned(),
                target,
            })
    }
}

#[derive(Debug, Deserialize)]
struct CardsPayload {
    cards: Vec<CardRow>,
}

#[derive(Debug, Deserialize)]
struct CardRow {
    id: String,
    name: String,
    board_id: String,
    board_name: String,
    list_name: String,
    #[serde(default)]
    due: Option<String>,
    #[serde(default)]
    members: Vec<String>,
}

impl CardRow {
    fn into_item(self) -> NativeItem {
        let mut item = NativeItem::new(self.id, self.name, self.board_name, self.list_name)
            .with_board_ref(self.board_id);
        if let Some(due) = self.due {
            item = item.with_due_date(due);
        }
        if let Some(member) = self.members.into_iter().next() {
            item = item.with_assignee(member);
        }
        item
    }
}

#[derive(Debug, Deserialize)]
struct BoardListsPayload {
    lists: Vec<BoardListRow>,
}

#[derive(Debug, Deserialize)]
struct BoardListRow {
    id: String,
    name: String,
}

#[async_trait]
impl<E> PlatformAdapter for CardBoardAdapter<E>
where
    E: ToolExecutor,
{
    fn kind(&self) -> PlatformKind {
        PlatformKind::CardBoard
    }

    async fn list_items(&self) -> AdapterResult<Vec<NativeItem>> {
        let data = invoke_tool(&*self.executor, LIST_CARDS, json!({})).await?;
        let payload: CardsPayload = decode(LIST_CARDS, data)?;
        Ok(payload.cards.into_iter().map(CardRow::into_item).collect())
    }

    async fn move_item(
        &self,
        item_id: &str,
        target: CanonicalStatus,
        context: &MoveContext,
    ) -> AdapterResult<()> {
        let board_ref = context
            .board_ref()
            .ok_or_else(|| AdapterError::MissingBoardRef {
                item_id: item_id.to_owned(),
            })?;
        let list_id = self.resolve_target_list(board_ref, target).await?;
        let args = json!({ "card_id": item_id, "list_id": list_id });
        invoke_tool(&*self.executor, MOVE_CARD, args).await?;
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
            "desc": spec.description(),
            "due": spec.due_date(),
        });
        invoke_tool(&*self.executor, CREATE_CARD, args).await?;
        Ok(())
    }

    async fn list_children(
        &self,
        parent: Option<&ResourceNode>,
    ) -> AdapterResult<Vec<ResourceNode>> {
        match parent {
            None => {
                let data = invoke_tool(&*self.executor, LIST_BOARDS, json!({})).await?;
                decode_nodes(LIST_BOARDS, data, "boards", ResourceKind::Board)
            }
            Some(node) if node.kind() == ResourceKind::Board => {
                let args = json!({ "board_id": node.id() });
                let data = invoke_tool(&*self.executor, LIST_BOARD_LISTS, args).await?;
                decode_nodes(LIST_BOARD_LISTS, data, "lists", ResourceKind::List)
            }
            Some(node) => Err(AdapterError::UnsupportedParent {
                parent: node.kind(),
            }),
        }
    }
}
