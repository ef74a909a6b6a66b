//! Query shapes assembled from plain `(alias, expression)` lists.
//!
//! Related entities are added by merging their projection under a
//! prefix, so a blob transaction expanded with its block yields
//! columns such as `block.number`. [`unflatten`] turns such rows back
//! into nested JSON objects.

use crate::expands::Expands;
use blob_stats_entity::{blobs, blobs_on_transactions, blocks, transactions};
use sea_orm::{
    sea_query::{Alias, Expr, SimpleExpr},
    EntityTrait, IdenStatic, JoinType, QuerySelect, RelationDef, RelationTrait, Select,
};
use serde_json::{Map, Value as JsonValue};

const PATH_SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    pub alias: String,
    pub expr: SimpleExpr,
}

#[derive(Default)]
pub struct Projection {
    fields: Vec<ProjectedField>,
    joins: Vec<(JoinType, RelationDef)>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, alias: impl Into<String>, expr: impl Into<SimpleExpr>) -> Self {
        self.fields.push(ProjectedField {
            alias: alias.into(),
            expr: expr.into(),
        });
        self
    }

    /// Same column, under its own name.
    pub fn column<E, C>(self, entity: E, column: C) -> Self
    where
        E: EntityTrait,
        C: IdenStatic,
    {
        let alias = column.as_str().to_string();
        self.field(alias, Expr::col((entity, column)))
    }

    /// Numeric columns wider than 64 bits, projected as decimal strings.
    pub fn text_column<E, C>(self, entity: E, column: C) -> Self
    where
        E: EntityTrait,
        C: IdenStatic,
    {
        let alias = column.as_str().to_string();
        self.field(
            alias,
            SimpleExpr::from(Expr::col((entity, column))).cast_as(Alias::new("text")),
        )
    }

    pub fn join(mut self, join_type: JoinType, relation: RelationDef) -> Self {
        self.joins.push((join_type, relation));
        self
    }

    /// Prefixes every alias with `prefix.`.
    pub fn nested(mut self, prefix: &str) -> Self {
        for field in self.fields.iter_mut() {
            field.alias = format!("{prefix}{PATH_SEPARATOR}{}", field.alias);
        }
        self
    }

    pub fn merge(mut self, other: Projection) -> Self {
        self.fields.extend(other.fields);
        self.joins.extend(other.joins);
        self
    }

    pub fn merge_if(self, condition: bool, other: impl FnOnce() -> Projection) -> Self {
        if condition {
            self.merge(other())
        } else {
            self
        }
    }

    pub fn aliases(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.alias.as_str()).collect()
    }

    pub fn apply<E: EntityTrait>(self, select: Select<E>) -> Select<E> {
        let select = self
            .joins
            .into_iter()
            .fold(select.select_only(), |select, (join_type, relation)| {
                select.join(join_type, relation)
            });
        self.fields
            .into_iter()
            .fold(select, |select, field| select.expr_as(field.expr, field.alias))
    }
}

pub fn block_projection() -> Projection {
    Projection::new()
        .column(blocks::Entity, blocks::Column::Hash)
        .column(blocks::Entity, blocks::Column::Number)
        .column(blocks::Entity, blocks::Column::Timestamp)
        .column(blocks::Entity, blocks::Column::Slot)
        .text_column(blocks::Entity, blocks::Column::BlobGasUsed)
        .text_column(blocks::Entity, blocks::Column::BlobAsCalldataGasUsed)
        .text_column(blocks::Entity, blocks::Column::BlobGasPrice)
        .text_column(blocks::Entity, blocks::Column::ExcessBlobGas)
}

pub fn transaction_projection() -> Projection {
    Projection::new()
        .column(transactions::Entity, transactions::Column::Hash)
        .field(
            "from",
            Expr::col((transactions::Entity, transactions::Column::FromId)),
        )
        .field(
            "to",
            Expr::col((transactions::Entity, transactions::Column::ToId)),
        )
        .text_column(transactions::Entity, transactions::Column::MaxFeePerBlobGas)
        .text_column(
            transactions::Entity,
            transactions::Column::BlobAsCalldataGasUsed,
        )
}

pub fn blob_projection() -> Projection {
    Projection::new()
        .column(blobs::Entity, blobs::Column::VersionedHash)
        .column(blobs::Entity, blobs::Column::Commitment)
        .column(blobs::Entity, blobs::Column::Proof)
        .column(blobs::Entity, blobs::Column::Size)
}

fn with_expands(projection: Projection, expands: &Expands) -> Projection {
    use blobs_on_transactions::Relation;

    projection
        .merge_if(expands.block, || {
            block_projection()
                .nested("block")
                .join(JoinType::InnerJoin, Relation::Blocks.def())
        })
        .merge_if(expands.transaction, || {
            transaction_projection()
                .nested("transaction")
                .join(JoinType::InnerJoin, Relation::Transactions.def())
        })
}

/// Transactions carrying a blob, plus the related entities requested by `expands`.
pub fn blob_transactions_projection(expands: &Expands) -> Projection {
    use blobs_on_transactions::{Column, Entity};

    let projection = Projection::new()
        .column(Entity, Column::TxHash)
        .column(Entity, Column::Index)
        .column(Entity, Column::BlockHash)
        .column(Entity, Column::BlockNumber)
        .column(Entity, Column::BlockTimestamp);
    with_expands(projection, expands)
}

/// Blob-to-transaction links with the blob itself nested under `blob`,
/// plus the related entities requested by `expands`.
pub fn blobs_on_transactions_projection(expands: &Expands) -> Projection {
    use blobs_on_transactions::{Column, Entity, Relation};

    let projection = Projection::new()
        .column(Entity, Column::Index)
        .column(Entity, Column::BlobHash)
        .column(Entity, Column::BlockHash)
        .column(Entity, Column::BlockNumber)
        .column(Entity, Column::BlockTimestamp)
        .column(Entity, Column::TxHash)
        .merge(
            blob_projection()
                .nested("blob")
                .join(JoinType::InnerJoin, Relation::Blobs.def()),
        );
    with_expands(projection, expands)
}

/// `{"block.number": 1}` -> `{"block": {"number": 1}}`
pub fn unflatten(row: JsonValue) -> JsonValue {
    match row {
        JsonValue::Object(fields) => {
            let mut nested = Map::new();
            for (path, value) in fields {
                insert_path(&mut nested, &path, value);
            }
            JsonValue::Object(nested)
        }
        other => other,
    }
}

fn insert_path(object: &mut Map<String, JsonValue>, path: &str, value: JsonValue) {
    match path.split_once(PATH_SEPARATOR) {
        None => {
            object.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = object
                .entry(head)
                .or_insert_with(|| JsonValue::Object(Map::new()));
            if !entry.is_object() {
                *entry = JsonValue::Object(Map::new());
            }
            if let JsonValue::Object(inner) = entry {
                insert_path(inner, rest, value);
            }
        }
    }
}
