//! Shared helpers for adapter implementations.

use crate::platform::domain::{ResourceKind, ResourceNode};
use crate::platform::ports::{AdapterError, AdapterResult, ToolExecutor};
use serde::Deserialize;
use serde_json::Value;

/// Invokes a tool and folds its envelope into data or an adapter error.
pub(super) async fn invoke_tool<E>(executor: &E, tool: &str, args: Value) -> AdapterResult<Value>
where
    E: ToolExecutor,
{
    let response = executor.invoke(tool, args).await?;
    response
        .into_result()
        .map_err(|failure| AdapterError::tool(tool, failure))
}

/// Decodes a tool data payload into a typed structure.
pub(super) fn decode<T>(tool: &str, data: Value) -> AdapterResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(data).map_err(|err| AdapterError::malformed(tool, err))
}

/// Minimal id/name row shared by every hierarchy-listing payload.
#[derive(Debug, Deserialize)]
pub(super) struct NamedRow {
    pub id: String,
    pub name: String,
}

/// Decodes the id/name rows under `key` into resource nodes of one kind.
pub(super) fn decode_nodes(
    tool: &str,
    mut data: Value,
    key: &str,
    kind: ResourceKind,
) -> AdapterResult<Vec<ResourceNode>> {
    let rows = data
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| AdapterError::malformed(tool, format!("missing '{key}' field")))?;
    let rows: Vec<NamedRow> = decode(tool, rows)?;
    Ok(rows
        .into_iter()
        .map(|row| ResourceNode::new(row.id, row.name, kind))
        .collect())
}

/// Checks that a creation location leaf has the kind a platform requires.
pub(super) fn require_leaf(leaf: &ResourceNode, expected: ResourceKind) -> AdapterResult<()> {
    if leaf.kind() == expected {
        Ok(())
    } else {
        Err(AdapterError::WrongLocationKind {
            expected,
            found: leaf.kind(),
        })
    }
}
