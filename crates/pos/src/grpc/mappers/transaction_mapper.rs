// crates/pos/src/grpc/mappers/transaction_mapper.rs

use crate::domain::records::TransactionRecord;
use crate::domain::requests::{CreateTransactionRequest, UpdateTransactionRequest};
use crate::domain::service::TransactionFilter;
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&TransactionRecord> for proto::Transaction {
    fn from(record: &TransactionRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            order_id: record.order_id,
            merchant_id: record.merchant_id,
            payment_method: record.payment_method.clone(),
            amount: record.amount,
            change_amount: record.change_amount,
            payment_status: record.payment_status.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Transaction> for TransactionRecord {
    type Error = String;

    fn try_from(wire: proto::Transaction) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            order_id: wire.order_id,
            merchant_id: wire.merchant_id,
            payment_method: wire.payment_method,
            amount: wire.amount,
            change_amount: wire.change_amount,
            payment_status: wire.payment_status,
        })
    }
}

impl From<&proto::FindAllTransactionRequest> for TransactionFilter {
    fn from(wire: &proto::FindAllTransactionRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
            year: wire.year,
            month: wire.month,
        }
    }
}

impl From<proto::CreateTransactionRequest> for CreateTransactionRequest {
    fn from(wire: proto::CreateTransactionRequest) -> Self {
        Self {
            order_id: wire.order_id,
            merchant_id: wire.merchant_id,
            payment_method: wire.payment_method,
            amount: wire.amount,
            change_amount: wire.change_amount,
            payment_status: wire.payment_status,
        }
    }
}

impl From<&CreateTransactionRequest> for proto::CreateTransactionRequest {
    fn from(req: &CreateTransactionRequest) -> Self {
        Self {
            order_id: req.order_id,
            merchant_id: req.merchant_id,
            payment_method: req.payment_method.clone(),
            amount: req.amount,
            change_amount: req.change_amount,
            payment_status: req.payment_status.clone(),
        }
    }
}

impl From<proto::UpdateTransactionRequest> for UpdateTransactionRequest {
    fn from(wire: proto::UpdateTransactionRequest) -> Self {
        Self {
            id: wire.id,
            order_id: wire.order_id,
            merchant_id: wire.merchant_id,
            payment_method: wire.payment_method,
            amount: wire.amount,
            change_amount: wire.change_amount,
            payment_status: wire.payment_status,
        }
    }
}

impl From<&UpdateTransactionRequest> for proto::UpdateTransactionRequest {
    fn from(req: &UpdateTransactionRequest) -> Self {
        Self {
            id: req.id,
            order_id: req.order_id,
            merchant_id: req.merchant_id,
            payment_method: req.payment_method.clone(),
            amount: req.amount,
            change_amount: req.change_amount,
            payment_status: req.payment_status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_filter_carries_year_and_month() {
        let wire = proto::FindAllTransactionRequest {
            page: 1,
            page_size: 10,
            search: String::new(),
            merchant_id: Some(4),
            year: Some(2025),
            month: Some(11),
        };
        let filter = TransactionFilter::from(&wire);
        assert_eq!(filter.merchant_id, Some(4));
        assert_eq!(filter.year, Some(2025));
        assert_eq!(filter.month, Some(11));
    }
}
