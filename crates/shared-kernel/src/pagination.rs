// crates/shared-kernel/src/pagination.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

/// Métadonnées de pagination, recalculées à chaque listing, jamais persistées.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: i32,
    pub page_size: i32,
    pub total_pages: i32,
    pub total_records: i32,
}

/// Tranche de résultats renvoyée par un Domain Service : les éléments de la
/// page demandée plus le total avant découpage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Calcul pur des métadonnées. Les entrées sont supposées déjà normalisées
/// par l'appelant (`page >= 1`, `page_size >= 1`, `total_records >= 0`).
pub fn paginate(page: i32, page_size: i32, total_records: i32) -> PaginationMeta {
    // Division plafonnée sans addition préalable : `total + size - 1`
    // déborderait i32 pour les très grands totaux.
    let total_pages = total_records / page_size + (total_records % page_size != 0) as i32;

    PaginationMeta {
        current_page: page,
        page_size,
        total_pages,
        total_records,
    }
}

/// Correction silencieuse : une page non positive retombe sur 1.
pub fn or_default_page(page: i32) -> i32 {
    if page <= 0 {
        DEFAULT_PAGE
    } else {
        page
    }
}

/// Correction silencieuse : une taille non positive retombe sur 10.
/// Une taille au-dessus de `MAX_PAGE_SIZE` passe telle quelle ici ;
/// seule la validation stricte des corps de requête la rejette.
pub fn or_default_page_size(page_size: i32) -> i32 {
    if page_size <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let meta = paginate(1, 10, 25);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_records, 25);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.page_size, 10);
    }

    #[test]
    fn exact_multiple_does_not_overshoot() {
        assert_eq!(paginate(2, 10, 30).total_pages, 3);
        assert_eq!(paginate(1, 5, 5).total_pages, 1);
    }

    #[test]
    fn zero_records_means_zero_pages() {
        assert_eq!(paginate(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn single_record_single_page() {
        assert_eq!(paginate(1, 100, 1).total_pages, 1);
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        // i32::MAX = 2_147_483_647 : 214_748_364 pages pleines plus une
        // entamée de 7 éléments.
        assert_eq!(paginate(1, 10, i32::MAX).total_pages, 214_748_365);
        assert_eq!(paginate(1, 1, i32::MAX).total_pages, i32::MAX);
    }

    #[test]
    fn page_defaults_are_idempotent() {
        assert_eq!(or_default_page(0), 1);
        assert_eq!(or_default_page(-5), 1);
        assert_eq!(or_default_page(3), 3);
        assert_eq!(or_default_page(or_default_page(0)), 1);
    }

    #[test]
    fn page_size_defaults_but_never_clamps_above() {
        assert_eq!(or_default_page_size(0), 10);
        assert_eq!(or_default_page_size(-1), 10);
        // 150 passe sans clamp : c'est la validation stricte qui tranche.
        assert_eq!(or_default_page_size(150), 150);
    }
}
