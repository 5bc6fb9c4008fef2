// crates/pos/src/grpc/mappers/order_item_mapper.rs

use crate::domain::records::OrderItemRecord;
use crate::domain::requests::{CreateOrderItemRequest, UpdateOrderItemRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&OrderItemRecord> for proto::OrderItem {
    fn from(record: &OrderItemRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            order_id: record.order_id,
            product_id: record.product_id,
            quantity: record.quantity,
            price: record.price,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::OrderItem> for OrderItemRecord {
    type Error = String;

    fn try_from(wire: proto::OrderItem) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            order_id: wire.order_id,
            product_id: wire.product_id,
            quantity: wire.quantity,
            price: wire.price,
        })
    }
}

impl From<proto::CreateOrderItemRequest> for CreateOrderItemRequest {
    fn from(wire: proto::CreateOrderItemRequest) -> Self {
        Self {
            order_id: wire.order_id,
            product_id: wire.product_id,
            quantity: wire.quantity,
            price: wire.price,
        }
    }
}

impl From<&CreateOrderItemRequest> for proto::CreateOrderItemRequest {
    fn from(req: &CreateOrderItemRequest) -> Self {
        Self {
            order_id: req.order_id,
            product_id: req.product_id,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

impl From<proto::UpdateOrderItemRequest> for UpdateOrderItemRequest {
    fn from(wire: proto::UpdateOrderItemRequest) -> Self {
        Self {
            id: wire.id,
            order_id: wire.order_id,
            product_id: wire.product_id,
            quantity: wire.quantity,
            price: wire.price,
        }
    }
}

impl From<&UpdateOrderItemRequest> for proto::UpdateOrderItemRequest {
    fn from(req: &UpdateOrderItemRequest) -> Self {
        Self {
            id: req.id,
            order_id: req.order_id,
            product_id: req.product_id,
            quantity: req.quantity,
            price: req.price,
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
        let mut record = OrderItemRecord {
            meta: RecordMeta::new(21, Utc::now()),
            order_id: 12,
            product_id: 7,
            quantity: 2,
            price: 450,
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::OrderItem::from(&record);
        let back = OrderItemRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }
}
