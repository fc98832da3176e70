use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body payload shared by create and update. Every field is copied onto the
/// entity as-is; the identifier is never part of it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Blue mug")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Ceramic mug, 300ml")]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(example = 9.99)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = "https://cdn.example.com/mug.png")]
    pub image_url: String,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 100)]
    pub quantity: i32,
}

/// Optional listing filter. Both fields are independently optional; the
/// branch selection lives in the query service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProductsRequest {
    pub partial_name: Option<String>,
    pub min_quantity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Flat query-string carrier for the listing endpoint; the handler splits it
/// into the filter and the page window.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    pub partial_name: Option<String>,

    pub min_quantity: Option<i32>,
}

impl FindAllProducts {
    pub fn filter(&self) -> Option<GetProductsRequest> {
        if self.partial_name.is_none() && self.min_quantity.is_none() {
            return None;
        }

        Some(GetProductsRequest {
            partial_name: self.partial_name.clone(),
            min_quantity: self.min_quantity,
        })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
