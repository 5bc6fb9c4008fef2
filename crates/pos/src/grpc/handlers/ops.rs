// crates/pos/src/grpc/handlers/ops.rs
//
// Opérations partagées par tous les handlers RPC : refus des identifiants
// non positifs et assemblage listing + pagination, génériques sur le
// Domain Service et le type wire.

use shared_kernel::pagination::paginate;
use tonic::Status;

use crate::domain::service::{LifecycleService, ListQuery};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto;

pub(crate) enum Scope {
    All,
    Active,
    Trashed,
}

/// Classe stricte : un id non positif est refusé avant tout appel au
/// Domain Service.
pub(crate) fn require_id(id: i32) -> Result<i32, Status> {
    if id <= 0 {
        return Err(Status::invalid_argument("id must be a positive integer"));
    }
    Ok(id)
}

/// Listing paginé d'un scope. La requête est supposée déjà normalisée par
/// `ListQuery::new` ; la pagination est recalculée à partir du total
/// renvoyé par le service, avant découpage.
pub(crate) async fn list<S, W>(
    service: &S,
    scope: Scope,
    query: ListQuery<S::Filter>,
) -> Result<(Vec<W>, proto::Pagination), Status>
where
    S: LifecycleService + ?Sized,
    W: for<'a> From<&'a S::Record>,
{
    let page = match scope {
        Scope::All => service.find_all(&query).await,
        Scope::Active => service.find_by_active(&query).await,
        Scope::Trashed => service.find_by_trashed(&query).await,
    }
    .map_grpc()?;

    let pagination = proto::Pagination::from(paginate(query.page, query.page_size, page.total));
    let data = page.items.iter().map(W::from).collect();
    Ok((data, pagination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_are_rejected() {
        assert!(require_id(0).is_err());
        assert!(require_id(-3).is_err());
        assert_eq!(require_id(7).unwrap(), 7);
    }
}
