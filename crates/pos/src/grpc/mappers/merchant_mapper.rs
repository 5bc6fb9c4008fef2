// crates/pos/src/grpc/mappers/merchant_mapper.rs

use crate::domain::records::MerchantRecord;
use crate::domain::requests::{CreateMerchantRequest, UpdateMerchantRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&MerchantRecord> for proto::Merchant {
    fn from(record: &MerchantRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            user_id: record.user_id,
            name: record.name.clone(),
            api_key: record.api_key.clone(),
            status: record.status.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Merchant> for MerchantRecord {
    type Error = String;

    fn try_from(wire: proto::Merchant) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            user_id: wire.user_id,
            name: wire.name,
            api_key: wire.api_key,
            status: wire.status,
        })
    }
}

impl From<proto::CreateMerchantRequest> for CreateMerchantRequest {
    fn from(wire: proto::CreateMerchantRequest) -> Self {
        Self {
            user_id: wire.user_id,
            name: wire.name,
        }
    }
}

impl From<&CreateMerchantRequest> for proto::CreateMerchantRequest {
    fn from(req: &CreateMerchantRequest) -> Self {
        Self {
            user_id: req.user_id,
            name: req.name.clone(),
        }
    }
}

impl From<proto::UpdateMerchantRequest> for UpdateMerchantRequest {
    fn from(wire: proto::UpdateMerchantRequest) -> Self {
        Self {
            id: wire.id,
            user_id: wire.user_id,
            name: wire.name,
            status: wire.status,
        }
    }
}

impl From<&UpdateMerchantRequest> for proto::UpdateMerchantRequest {
    fn from(req: &UpdateMerchantRequest) -> Self {
        Self {
            id: req.id,
            user_id: req.user_id,
            name: req.name.clone(),
            status: req.status.clone(),
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
        let mut record = MerchantRecord {
            meta: RecordMeta::new(5, Utc::now()),
            user_id: 11,
            name: "Corner Store".into(),
            api_key: "5f1c2a9e-bd10-4f6e-9a3a-7c41d2e9b8aa".into(),
            status: "active".into(),
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::Merchant::from(&record);
        let back = MerchantRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }
}
