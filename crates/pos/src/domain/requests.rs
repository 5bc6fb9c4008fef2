// crates/pos/src/domain/requests.rs
//
// Corps de création / mise à jour tels que décodés par la gateway.
// La validation ici est la classe « stricte » : un champ manquant ou hors
// bornes est une erreur, contrairement aux paramètres de listing qui sont
// corrigés silencieusement.

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

fn positive_i32(field: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            reason: "must be a positive integer".into(),
        });
    }
    Ok(())
}

fn non_negative_i64(field: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(DomainError::Validation {
            field,
            reason: "must not be negative".into(),
        });
    }
    Ok(())
}

fn valid_email(field: &'static str, value: &str) -> Result<()> {
    require(field, value)?;
    if !value.contains('@') {
        return Err(DomainError::Validation {
            field,
            reason: "must be a valid email address".into(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateCategoryRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCashierRequest {
    pub merchant_id: i32,
    pub name: String,
}

impl CreateCashierRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("merchant_id", self.merchant_id)?;
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCashierRequest {
    #[serde(default)]
    pub id: i32,
    pub merchant_id: i32,
    pub name: String,
}

impl UpdateCashierRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("merchant_id", self.merchant_id)?;
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMerchantRequest {
    pub user_id: i32,
    pub name: String,
}

impl CreateMerchantRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("user_id", self.user_id)?;
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMerchantRequest {
    #[serde(default)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub status: String,
}

impl UpdateMerchantRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("user_id", self.user_id)?;
        require("name", &self.name)?;
        match self.status.as_str() {
            "active" | "inactive" => Ok(()),
            _ => Err(DomainError::Validation {
                field: "status",
                reason: "must be 'active' or 'inactive'".into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub count_in_stock: i32,
    #[serde(default)]
    pub weight: i32,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("merchant_id", self.merchant_id)?;
        positive_i32("category_id", self.category_id)?;
        require("name", &self.name)?;
        if self.price <= 0 {
            return Err(DomainError::Validation {
                field: "price",
                reason: "must be a positive amount".into(),
            });
        }
        if self.count_in_stock < 0 {
            return Err(DomainError::Validation {
                field: "count_in_stock",
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: i32,
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub count_in_stock: i32,
    #[serde(default)]
    pub weight: i32,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("merchant_id", self.merchant_id)?;
        positive_i32("category_id", self.category_id)?;
        require("name", &self.name)?;
        if self.price <= 0 {
            return Err(DomainError::Validation {
                field: "price",
                reason: "must be a positive amount".into(),
            });
        }
        if self.count_in_stock < 0 {
            return Err(DomainError::Validation {
                field: "count_in_stock",
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub merchant_id: i32,
    pub cashier_id: i32,
    pub total_price: i64,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("merchant_id", self.merchant_id)?;
        positive_i32("cashier_id", self.cashier_id)?;
        non_negative_i64("total_price", self.total_price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub id: i32,
    pub merchant_id: i32,
    pub cashier_id: i32,
    pub total_price: i64,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("merchant_id", self.merchant_id)?;
        positive_i32("cashier_id", self.cashier_id)?;
        non_negative_i64("total_price", self.total_price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}

impl CreateOrderItemRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("order_id", self.order_id)?;
        positive_i32("product_id", self.product_id)?;
        positive_i32("quantity", self.quantity)?;
        non_negative_i64("price", self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderItemRequest {
    #[serde(default)]
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}

impl UpdateOrderItemRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("order_id", self.order_id)?;
        positive_i32("product_id", self.product_id)?;
        positive_i32("quantity", self.quantity)?;
        non_negative_i64("price", self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    #[serde(default)]
    pub change_amount: i64,
    pub payment_status: String,
}

impl CreateTransactionRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("order_id", self.order_id)?;
        positive_i32("merchant_id", self.merchant_id)?;
        require("payment_method", &self.payment_method)?;
        non_negative_i64("amount", self.amount)?;
        non_negative_i64("change_amount", self.change_amount)?;
        require("payment_status", &self.payment_status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub id: i32,
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    #[serde(default)]
    pub change_amount: i64,
    pub payment_status: String,
}

impl UpdateTransactionRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        positive_i32("order_id", self.order_id)?;
        positive_i32("merchant_id", self.merchant_id)?;
        require("payment_method", &self.payment_method)?;
        non_negative_i64("amount", self.amount)?;
        non_negative_i64("change_amount", self.change_amount)?;
        require("payment_status", &self.payment_status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        require("firstname", &self.firstname)?;
        require("lastname", &self.lastname)?;
        valid_email("email", &self.email)?;
        if self.password.len() < 6 {
            return Err(DomainError::Validation {
                field: "password",
                reason: "must be at least 6 characters".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        require("firstname", &self.firstname)?;
        require("lastname", &self.lastname)?;
        valid_email("email", &self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}

impl CreateRoleRequest {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(default)]
    pub id: i32,
    pub name: String,
}

impl UpdateRoleRequest {
    pub fn validate(&self) -> Result<()> {
        positive_i32("id", self.id)?;
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        valid_email("email", &self.email)?;
        require("password", &self.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn validate(&self) -> Result<()> {
        require("refresh_token", &self.refresh_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_requires_name() {
        let req = CreateCategoryRequest {
            name: "  ".into(),
            description: String::new(),
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
    }

    #[test]
    fn update_requires_positive_id() {
        let req = UpdateRoleRequest {
            id: 0,
            name: "admin".into(),
        };
        assert!(matches!(
            req.validate().unwrap_err(),
            DomainError::Validation { field: "id", .. }
        ));
    }

    #[test]
    fn product_price_must_be_positive() {
        let req = CreateProductRequest {
            merchant_id: 1,
            category_id: 1,
            name: "Espresso".into(),
            description: String::new(),
            price: 0,
            count_in_stock: 3,
            weight: 0,
        };
        assert!(matches!(
            req.validate().unwrap_err(),
            DomainError::Validation { field: "price", .. }
        ));
    }

    #[test]
    fn user_email_is_checked() {
        let req = CreateUserRequest {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "not-an-email".into(),
            password: "secret42".into(),
        };
        assert!(matches!(
            req.validate().unwrap_err(),
            DomainError::Validation { field: "email", .. }
        ));
    }

    #[test]
    fn valid_payloads_pass() {
        let req = CreateCashierRequest {
            merchant_id: 7,
            name: "Till 1".into(),
        };
        assert!(req.validate().is_ok());
    }
}
