//! Product record.

use crate::catalog::Category;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// The feed uses small numeric ids; the newtype keeps them from being mixed
/// up with cart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A product in the catalog.
///
/// Immutable once fetched. Cart entries hold copies taken at add-time, so
/// later catalog changes never affect them. The serde renames carry the
/// Portuguese keys used by the feed and the persisted cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Short description shown on the product card.
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: Money,
    /// Category in the closed catalog set.
    #[serde(rename = "categoria")]
    pub category: Category,
    /// Image URL.
    #[serde(rename = "imagem", default)]
    pub image_url: String,
}

impl Product {
    /// Create a new product with an empty description and image.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image_url: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let p = Product::new(7, "Ecobag", Money::from_reais(39.9), Category::Acessorios)
            .with_description("Sacola reutilizável de algodão")
            .with_image_url("https://cdn.example.com/ecobag.jpg");

        assert_eq!(p.id, ProductId::new(7));
        assert_eq!(p.name, "Ecobag");
        assert_eq!(p.price.cents(), 3990);
    }

    #[test]
    fn test_product_deserializes_feed_record() {
        let json = r#"{
            "id": 1,
            "nome": "Escova de bambu",
            "descricao": "Escova de dentes biodegradável",
            "preco": 12.5,
            "categoria": "Beleza",
            "imagem": "https://cdn.example.com/escova.jpg"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.value(), 1);
        assert_eq!(p.name, "Escova de bambu");
        assert_eq!(p.price, Money::new(1250));
        assert_eq!(p.category, Category::Beleza);
    }

    #[test]
    fn test_product_serializes_wire_keys() {
        let p = Product::new(2, "Kit talheres", Money::from_reais(59.0), Category::Casa);
        let value = serde_json::to_value(&p).unwrap();

        assert_eq!(value["nome"], "Kit talheres");
        assert_eq!(value["preco"], 59.0);
        assert_eq!(value["categoria"], "Casa");
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let json = r#"{"id": 3, "nome": "Vela de soja", "preco": 25.0, "categoria": "Casa"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.description.is_empty());
        assert!(p.image_url.is_empty());
    }
}
