// crates/pos/src/grpc/mappers/product_mapper.rs

use crate::domain::records::ProductRecord;
use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::domain::service::ProductFilter;
use crate::grpc::mappers::{meta_from_wire, wire_meta};
use crate::grpc::proto;

impl From<&ProductRecord> for proto::Product {
    fn from(record: &ProductRecord) -> Self {
        let (created_at, updated_at, deleted_at) = wire_meta(&record.meta);
        Self {
            id: record.meta.id,
            merchant_id: record.merchant_id,
            category_id: record.category_id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            count_in_stock: record.count_in_stock,
            weight: record.weight,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

impl TryFrom<proto::Product> for ProductRecord {
    type Error = String;

    fn try_from(wire: proto::Product) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: meta_from_wire(wire.id, wire.created_at, wire.updated_at, wire.deleted_at)?,
            merchant_id: wire.merchant_id,
            category_id: wire.category_id,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            count_in_stock: wire.count_in_stock,
            weight: wire.weight,
        })
    }
}

impl From<&proto::FindAllProductRequest> for ProductFilter {
    fn from(wire: &proto::FindAllProductRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
            category_id: wire.category_id,
            min_price: wire.min_price,
            max_price: wire.max_price,
        }
    }
}

impl From<proto::CreateProductRequest> for CreateProductRequest {
    fn from(wire: proto::CreateProductRequest) -> Self {
        Self {
            merchant_id: wire.merchant_id,
            category_id: wire.category_id,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            count_in_stock: wire.count_in_stock,
            weight: wire.weight,
        }
    }
}

impl From<&CreateProductRequest> for proto::CreateProductRequest {
    fn from(req: &CreateProductRequest) -> Self {
        Self {
            merchant_id: req.merchant_id,
            category_id: req.category_id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            count_in_stock: req.count_in_stock,
            weight: req.weight,
        }
    }
}

impl From<proto::UpdateProductRequest> for UpdateProductRequest {
    fn from(wire: proto::UpdateProductRequest) -> Self {
        Self {
            id: wire.id,
            merchant_id: wire.merchant_id,
            category_id: wire.category_id,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            count_in_stock: wire.count_in_stock,
            weight: wire.weight,
        }
    }
}

impl From<&UpdateProductRequest> for proto::UpdateProductRequest {
    fn from(req: &UpdateProductRequest) -> Self {
        Self {
            id: req.id,
            merchant_id: req.merchant_id,
            category_id: req.category_id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            count_in_stock: req.count_in_stock,
            weight: req.weight,
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
        let record = ProductRecord {
            meta: RecordMeta::new(3, Utc::now()),
            merchant_id: 2,
            category_id: 5,
            name: "Espresso beans".into(),
            description: "1kg arabica".into(),
            price: 1850,
            count_in_stock: 12,
            weight: 1000,
        };

        let back = ProductRecord::try_from(proto::Product::from(&record)).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn absent_filter_fields_stay_absent() {
        let wire = proto::FindAllProductRequest {
            page: 1,
            page_size: 10,
            search: String::new(),
            merchant_id: None,
            category_id: Some(5),
            min_price: None,
            max_price: None,
        };
        let filter = ProductFilter::from(&wire);
        assert_eq!(filter.merchant_id, None);
        assert_eq!(filter.category_id, Some(5));
    }
}
