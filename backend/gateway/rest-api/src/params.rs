// backend/gateway/rest-api/src/params.rs
//
// Deux classes de paramètres, deux politiques :
// - listing (page, page_size, search, filtres) : correction silencieuse,
//   une valeur illisible retombe sur le défaut ;
// - id de chemin : validation stricte, un id illisible ou non positif est
//   un 400 et le tier RPC n'est jamais appelé.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use shared_kernel::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    page_size: Option<String>,
    search: Option<String>,
    merchant_id: Option<String>,
    category_id: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    year: Option<String>,
    month: Option<String>,
}

fn lenient_i32(raw: &Option<String>) -> Option<i32> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

fn lenient_i64(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

impl ListParams {
    pub fn page(&self) -> i32 {
        lenient_i32(&self.page)
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i32 {
        lenient_i32(&self.page_size)
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn search(&self) -> String {
        self.search.clone().unwrap_or_default()
    }

    pub fn merchant_id(&self) -> Option<i32> {
        lenient_i32(&self.merchant_id)
    }

    pub fn category_id(&self) -> Option<i32> {
        lenient_i32(&self.category_id)
    }

    pub fn min_price(&self) -> Option<i64> {
        lenient_i64(&self.min_price)
    }

    pub fn max_price(&self) -> Option<i64> {
        lenient_i64(&self.max_price)
    }

    pub fn year(&self) -> Option<i32> {
        lenient_i32(&self.year)
    }

    pub fn month(&self) -> Option<i32> {
        lenient_i32(&self.month)
    }
}

/// Un corps JSON illisible est un rejet structurel, avant toute
/// validation sémantique.
pub fn decode_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| ApiError::bad_request("invalid request format"))
}

pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request("id must be a positive integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str, size: &str) -> ListParams {
        ListParams {
            page: Some(page.to_string()),
            page_size: Some(size.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unreadable_paging_falls_back_silently() {
        let p = params("abc", "-3");
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 10);
    }

    #[test]
    fn oversized_page_size_passes_through() {
        // Pas de clamp ici : la politique lenient ne corrige que l'illisible
        // et le non positif.
        assert_eq!(params("2", "150").page_size(), 150);
    }

    #[test]
    fn missing_params_use_defaults() {
        let p = ListParams::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.search(), "");
        assert_eq!(p.merchant_id(), None);
    }

    #[test]
    fn path_ids_are_strict() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-2").is_err());
        assert_eq!(parse_id("12").unwrap(), 12);
    }
}
