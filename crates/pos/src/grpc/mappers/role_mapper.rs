// crates/pos/src/grpc/mappers/role_mapper.rs

use crate::domain::records::RoleRecord;
use crate::domain::requests::{CreateRoleRequest, UpdateRoleRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&RoleRecord> for proto::Role {
    fn from(record: &RoleRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            name: record.name.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Role> for RoleRecord {
    type Error = String;

    fn try_from(wire: proto::Role) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            name: wire.name,
        })
    }
}

impl From<proto::CreateRoleRequest> for CreateRoleRequest {
    fn from(wire: proto::CreateRoleRequest) -> Self {
        Self { name: wire.name }
    }
}

impl From<&CreateRoleRequest> for proto::CreateRoleRequest {
    fn from(req: &CreateRoleRequest) -> Self {
        Self {
            name: req.name.clone(),
        }
    }
}

impl From<proto::UpdateRoleRequest> for UpdateRoleRequest {
    fn from(wire: proto::UpdateRoleRequest) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
        }
    }
}

impl From<&UpdateRoleRequest> for proto::UpdateRoleRequest {
    fn from(req: &UpdateRoleRequest) -> Self {
        Self {
            id: req.id,
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
        let mut record = RoleRecord {
            meta: RecordMeta::new(2, Utc::now()),
            name: "supervisor".into(),
        };
        record.meta.deleted_at = Some(Utc::now());

        let wire = proto::Role::from(&record);
        let back = RoleRecord::try_from(wire).unwrap();
        assert_eq!(back, record);
    }
}
