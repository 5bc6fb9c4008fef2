// crates/pos/src/grpc/mappers/mod.rs
//
// Conversions wire ⇄ domaine. Totales, sans état ; les listes sont mappées
// élément par élément en préservant l'ordre, une liste vide reste une
// liste vide (jamais null côté JSON).

mod auth_mapper;
mod cashier_mapper;
mod category_mapper;
mod error_mapper;
mod merchant_mapper;
mod order_item_mapper;
mod order_mapper;
mod product_mapper;
mod role_mapper;
mod transaction_mapper;
mod user_mapper;

pub use error_mapper::{status_from_domain, IntoGrpcStatus};

use chrono::{DateTime, TimeZone, Utc};
use prost_types::Timestamp;
use shared_kernel::pagination::PaginationMeta;

use crate::domain::records::RecordMeta;
use crate::grpc::proto;

pub fn to_timestamp(dt: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

pub fn from_timestamp(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
    Utc.timestamp_opt(ts.seconds, ts.nanos as u32)
        .single()
        .ok_or_else(|| format!("timestamp out of range: {}s {}ns", ts.seconds, ts.nanos))
}

/// Les trois timestamps wire d'un record, dans l'ordre des champs proto.
pub(crate) fn wire_meta(
    meta: &RecordMeta,
) -> (Option<Timestamp>, Option<Timestamp>, Option<Timestamp>) {
    (
        Some(to_timestamp(meta.created_at)),
        Some(to_timestamp(meta.updated_at)),
        meta.deleted_at.map(to_timestamp),
    )
}

pub(crate) fn meta_from_wire(
    id: i32,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
    deleted_at: Option<Timestamp>,
) -> Result<RecordMeta, String> {
    let created_at = created_at.ok_or("missing created_at")?;
    let updated_at = updated_at.ok_or("missing updated_at")?;
    Ok(RecordMeta {
        id,
        created_at: from_timestamp(&created_at)?,
        updated_at: from_timestamp(&updated_at)?,
        deleted_at: deleted_at.as_ref().map(from_timestamp).transpose()?,
    })
}

impl From<PaginationMeta> for proto::Pagination {
    fn from(meta: PaginationMeta) -> Self {
        Self {
            current_page: meta.current_page,
            page_size: meta.page_size,
            total_pages: meta.total_pages,
            total_records: meta.total_records,
        }
    }
}

impl From<proto::Pagination> for PaginationMeta {
    fn from(wire: proto::Pagination) -> Self {
        Self {
            current_page: wire.current_page,
            page_size: wire.page_size,
            total_pages: wire.total_pages,
            total_records: wire.total_records,
        }
    }
}
