// backend/gateway/rest-api/src/domains/transaction/model.rs

use pos::grpc::proto;
use serde::Serialize;

use crate::response::{
    fmt_timestamp, fmt_timestamp_opt, pagination_of, ApiListResponse, ApiResponse,
};

#[derive(Debug, Serialize)]
pub struct Transaction {
    pub id: i32,
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub change_amount: i64,
    pub payment_status: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<proto::Transaction> for Transaction {
    fn from(wire: proto::Transaction) -> Self {
        Self {
            id: wire.id,
            order_id: wire.order_id,
            merchant_id: wire.merchant_id,
            payment_method: wire.payment_method,
            amount: wire.amount,
            change_amount: wire.change_amount,
            payment_status: wire.payment_status,
            created_at: fmt_timestamp(wire.created_at.as_ref()),
            updated_at: fmt_timestamp(wire.updated_at.as_ref()),
            deleted_at: fmt_timestamp_opt(wire.deleted_at.as_ref()),
        }
    }
}

pub fn item_body(reply: proto::ApiResponseTransaction) -> ApiResponse<Transaction> {
    ApiResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.map(Transaction::from),
    }
}

pub fn list_body(reply: proto::ApiResponseTransactions) -> ApiListResponse<Transaction> {
    ApiListResponse {
        status: reply.status,
        message: reply.message,
        data: reply.data.into_iter().map(Transaction::from).collect(),
        pagination: pagination_of(reply.pagination),
    }
}
