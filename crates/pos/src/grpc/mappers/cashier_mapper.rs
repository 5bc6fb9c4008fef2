// crates/pos/src/grpc/mappers/cashier_mapper.rs

use crate::domain::records::CashierRecord;
use crate::domain::requests::{CreateCashierRequest, UpdateCashierRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&CashierRecord> for proto::Cashier {
    fn from(record: &CashierRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            merchant_id: record.merchant_id,
            name: record.name.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Cashier> for CashierRecord {
    type Error = String;

    fn try_from(wire: proto::Cashier) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            merchant_id: wire.merchant_id,
            name: wire.name,
        })
    }
}

impl From<proto::CreateCashierRequest> for CreateCashierRequest {
    fn from(wire: proto::CreateCashierRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
            name: wire.name,
        }
    }
}

impl From<&CreateCashierRequest> for proto::CreateCashierRequest {
    fn from(req: &CreateCashierRequest) -> Self {
        Self {
            merchant_id: req.merchant_id,
            name: req.name.clone(),
        }
    }
}

impl From<proto::UpdateCashierRequest> for UpdateCashierRequest {
    fn from(wire: proto::UpdateCashierRequest) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            name: wire.name,
        }
    }
}

impl From<&UpdateCashierRequest> for proto::UpdateCashierRequest {
    fn from(req: &UpdateCashierRequest) -> Self {
        Self {
            id: req.id,
            merchant_id: req.merchant_id,
            name: req.name.clone(),
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
        let mut record = CashierRecord {
            meta: RecordMeta::new(3, Utc::now()),
            merchant_id: 8,
            name: "Till 2".into(),
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::Cashier::from(&record);
        let back = CashierRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }
}
