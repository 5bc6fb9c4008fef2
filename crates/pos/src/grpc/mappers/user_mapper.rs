// crates/pos/src/grpc/mappers/user_mapper.rs

use crate::domain::records::UserRecord;
use crate::domain::requests::{CreateUserRequest, UpdateUserRequest};
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

// Le hash de mot de passe reste côté service ; la réponse wire ne le
// transporte jamais.
impl From<&UserRecord> for proto::User {
    fn from(record: &UserRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::User> for UserRecord {
    type Error = String;

    fn try_from(wire: proto::User) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            firstname: wire.firstname,
            lastname: wire.lastname,
            email: wire.email,
            password: String::new(),
        })
    }
}

impl From<proto::CreateUserRequest> for CreateUserRequest {
    fn from(wire: proto::CreateUserRequest) -> Self {
        Self {
            firstname: wire.firstname,
            lastname: wire.lastname,
            email: wire.email,
            password: wire.password,
        }
    }
}

impl From<&CreateUserRequest> for proto::CreateUserRequest {
    fn from(req: &CreateUserRequest) -> Self {
        Self {
            firstname: req.firstname.clone(),
            lastname: req.lastname.clone(),
            email: req.email.clone(),
            password: req.password.clone(),
        }
    }
}

impl From<proto::UpdateUserRequest> for UpdateUserRequest {
    fn from(wire: proto::UpdateUserRequest) -> Self {
        Self {
            id: wire.id,
            firstname: wire.firstname,
            lastname: wire.lastname,
            email: wire.email,
        }
    }
}

impl From<&UpdateUserRequest> for proto::UpdateUserRequest {
    fn from(req: &UpdateUserRequest) -> Self {
        Self {
            id: req.id,
            firstname: req.firstname.clone(),
            lastname: req.lastname.clone(),
            email: req.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::RecordMeta;
    use chrono::Utc;

    #[test]
    fn password_never_crosses_the_wire() {
        let record = UserRecord {
            meta: RecordMeta::new(1, Utc::now()),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "hashed-secret".into(),
        };

        let wire = proto::User::from(&record);
        let back = UserRecord::try_from(wire).unwrap();
        assert_eq!(back.email, record.email);
        assert!(back.password.is_empty());
    }
}
