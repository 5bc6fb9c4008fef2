// crates/pos/src/grpc/mappers/category_mapper.rs

use crate::domain::records::CategoryRecord;
use crate::domain::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&CategoryRecord> for proto::Category {
    fn from(record: &CategoryRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            name: record.name.clone(),
            description: record.description.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Category> for CategoryRecord {
    type Error = String;

    fn try_from(wire: proto::Category) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            name: wire.name,
            description: wire.description,
        })
    }
}

impl From<proto::CreateCategoryRequest> for CreateCategoryRequest {
    fn from(wire: proto::CreateCategoryRequest) -> Self {
        Self {
            name: wire.name,
            description: wire.description,
        }
    }
}

impl From<&CreateCategoryRequest> for proto::CreateCategoryRequest {
    fn from(req: &CreateCategoryRequest) -> Self {
        Self {
            name: req.name.clone(),
            description: req.description.clone(),
        }
    }
}

impl From<proto::UpdateCategoryRequest> for UpdateCategoryRequest {
    fn from(wire: proto::UpdateCategoryRequest) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
        }
    }
}

impl From<&UpdateCategoryRequest> for proto::UpdateCategoryRequest {
    fn from(req: &UpdateCategoryRequest) -> Self {
        Self {
            id: req.id,
            name: req.name.clone(),
            description: req.description.clone(),
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
        let mut record = CategoryRecord {
            meta: RecordMeta::new(7, Utc::now()),
            name: "Beverages".into(),
            description: "Hot and cold drinks".into(),
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::Category::from(&record);
        let back = CategoryRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn missing_created_at_is_rejected() {
        let wire = proto::Category {
            id: 1,
            name: "x".into(),
            description: String::new(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        };
        assert!(CategoryRecord::try_from(wire).is_err());
    }
}
