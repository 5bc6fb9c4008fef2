// crates/pos/src/grpc/mappers/order_mapper.rs

use crate::domain::records::OrderRecord;
use crate::domain::requests::{CreateOrderRequest, UpdateOrderRequest};
use crate::domain::service::OrderFilter;
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&OrderRecord> for proto::Order {
    fn from(record: &OrderRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            merchant_id: record.merchant_id,
            cashier_id: record.cashier_id,
            total_price: record.total_price,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Order> for OrderRecord {
    type Error = String;

    fn try_from(wire: proto::Order) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            merchant_id: wire.merchant_id,
            cashier_id: wire.cashier_id,
            total_price: wire.total_price,
        })
    }
}

impl From<&proto::FindAllOrderRequest> for OrderFilter {
    fn from(wire: &proto::FindAllOrderRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
        }
    }
}

impl From<proto::CreateOrderRequest> for CreateOrderRequest {
    fn from(wire: proto::CreateOrderRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
            cashier_id: wire.cashier_id,
            total_price: wire.total_price,
        }
    }
}

impl From<&CreateOrderRequest> for proto::CreateOrderRequest {
    fn from(req: &CreateOrderRequest) -> Self {
        Self {
            merchant_id: req.merchant_id,
            cashier_id: req.cashier_id,
            total_price: req.total_price,
        }
    }
}

impl From<proto::UpdateOrderRequest> for UpdateOrderRequest {
    fn from(wire: proto::UpdateOrderRequest) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            cashier_id: wire.cashier_id,
            total_price: wire.total_price,
        }
    }
}

impl From<&UpdateOrderRequest> for proto::UpdateOrderRequest {
    fn from(req: &UpdateOrderRequest) -> Self {
        Self {
            id: req.id,
            merchant_id: req.merchant_id,
            cashier_id: req.cashier_id,
            total_price: req.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::RecordMeta;
    use chrono::Utc;

    #[test]
    fn wire_round_trip_preserves_every_field() {
        let mut record = OrderRecord {
            meta: RecordMeta::new(12, Utc::now()),
            merchant_id: 5,
            cashier_id: 3,
            total_price: 12_450,
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::Order::from(&record);
        let back = OrderRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }
}
