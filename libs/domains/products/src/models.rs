use chrono::{DateTime, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Product entity as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v7, time ordered)
    pub id: Uuid,
    #[schema(example = "Tablet")]
    pub name: String,
    #[schema(example = 399.99)]
    pub price: f64,
    #[schema(example = "Electronics")]
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation message instead of a body parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        required(message = "Product name is required"),
        length(max = 100, message = "Product name cannot exceed 100 characters"),
        custom(function = "validate_name")
    )]
    #[schema(example = "Tablet", max_length = 100)]
    pub name: Option<String>,

    /// Numbers and numeric strings are accepted
    #[serde(default, deserialize_with = "deserialize_price")]
    #[validate(
        required(message = "Product price is required"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    #[schema(example = 399.99, minimum = 0)]
    pub price: Option<f64>,

    #[validate(
        required(message = "Product category is required"),
        custom(function = "validate_category")
    )]
    #[schema(example = "Electronics")]
    pub category: Option<String>,
}

/// DTO for updating an existing product; only supplied fields change
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(
        length(max = 100, message = "Product name cannot exceed 100 characters"),
        custom(function = "validate_name")
    )]
    #[schema(max_length = 100)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_price")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(minimum = 0)]
    pub price: Option<f64>,

    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,
}

/// Validated fields of a product about to be created
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required").with_message("Product name is required".into()));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(
            ValidationError::new("required").with_message("Product category is required".into()),
        );
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Number(f64),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<PriceInput>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let price = match raw {
        PriceInput::Number(value) => value,
        PriceInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                <D::Error as de::Error>::custom(format!("price must be a number, got \"{text}\""))
            })?,
    };

    if !price.is_finite() {
        return Err(<D::Error as de::Error>::custom(
            "price must be a finite number",
        ));
    }

    Ok(Some(price))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Current time at the millisecond precision MongoDB stores.
pub(crate) fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl CreateProduct {
    /// Trim surrounding whitespace from text fields.
    pub fn normalize(self) -> Self {
        Self {
            name: trimmed(self.name),
            price: self.price,
            category: trimmed(self.category),
        }
    }

    /// Normalize and validate, yielding the fields to persist.
    pub fn validated(self) -> Result<NewProduct, ValidationErrors> {
        let input = self.normalize();
        input.validate()?;

        let (Some(name), Some(price), Some(category)) = (input.name, input.price, input.category)
        else {
            let mut errors = ValidationErrors::new();
            errors.add("product", ValidationError::new("required"));
            return Err(errors);
        };

        Ok(NewProduct {
            name,
            price,
            category,
        })
    }
}

impl UpdateProduct {
    pub fn normalize(self) -> Self {
        Self {
            name: trimmed(self.name),
            price: self.price,
            category: trimmed(self.category),
        }
    }

    /// Normalize and validate the supplied fields.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let input = self.normalize();
        input.validate()?;
        Ok(input)
    }
}

impl Product {
    /// Create a new product with a fresh id; `created_at == updated_at`.
    pub fn new(input: NewProduct) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            category: input.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and refresh `updated_at`.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        self.updated_at = now_millis().max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validation_message;
    use serde_json::json;

    fn create(body: serde_json::Value) -> CreateProduct {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_validated_trims_text_fields() {
        let input = create(json!({
            "name": "  Tablet ",
            "price": 399.99,
            "category": " Electronics"
        }));

        let product = input.validated().unwrap();
        assert_eq!(
            product,
            NewProduct {
                name: "Tablet".to_string(),
                price: 399.99,
                category: "Electronics".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_are_reported_per_field() {
        let err = create(json!({})).validated().unwrap_err();

        assert_eq!(
            validation_message(&err),
            "category: Product category is required, name: Product name is required, price: Product price is required"
        );
    }

    #[test]
    fn test_blank_name_is_required() {
        let err = create(json!({ "name": "   ", "price": 1, "category": "Books" }))
            .validated()
            .unwrap_err();

        assert_eq!(validation_message(&err), "name: Product name is required");
    }

    #[test]
    fn test_name_length_limit_counts_characters() {
        let at_limit = "é".repeat(100);
        assert!(
            create(json!({ "name": at_limit, "price": 1, "category": "Books" }))
                .validated()
                .is_ok()
        );

        let too_long = "a".repeat(101);
        let err = create(json!({ "name": too_long, "price": 1, "category": "Books" }))
            .validated()
            .unwrap_err();
        assert_eq!(
            validation_message(&err),
            "name: Product name cannot exceed 100 characters"
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = create(json!({ "name": "Pen", "price": -0.01, "category": "Office" }))
            .validated()
            .unwrap_err();

        assert_eq!(validation_message(&err), "price: Price cannot be negative");
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let product = create(json!({ "name": "Sample", "price": 0, "category": "Free" }))
            .validated()
            .unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_numeric_string_price_is_coerced() {
        let input = create(json!({ "name": "Pen", "price": " 12.5 ", "category": "Office" }));
        assert_eq!(input.price, Some(12.5));
    }

    #[test]
    fn test_non_numeric_price_fails_to_deserialize() {
        for price in [json!("cheap"), json!(true), json!("NaN"), json!({ "amount": 1 })] {
            let result = serde_json::from_value::<CreateProduct>(json!({ "price": price }));
            assert!(result.is_err(), "price {price} should be rejected");
        }
    }

    #[test]
    fn test_null_price_is_missing() {
        let input = create(json!({ "name": "Pen", "price": null, "category": "Office" }));
        assert_eq!(input.price, None);

        let err = input.validated().unwrap_err();
        assert_eq!(validation_message(&err), "price: Product price is required");
    }

    #[test]
    fn test_update_allows_partial_input() {
        let update: UpdateProduct = serde_json::from_value(json!({ "price": "349.99" })).unwrap();

        assert_eq!(
            update.validated().unwrap(),
            UpdateProduct {
                name: None,
                price: Some(349.99),
                category: None,
            }
        );
        assert!(UpdateProduct::default().validated().is_ok());
    }

    #[test]
    fn test_update_checks_supplied_fields() {
        let update: UpdateProduct =
            serde_json::from_value(json!({ "name": " ", "price": -5 })).unwrap();

        assert_eq!(
            validation_message(&update.validated().unwrap_err()),
            "name: Product name is required, price: Price cannot be negative"
        );
    }

    #[test]
    fn test_new_product_has_equal_timestamps() {
        let product = Product::new(NewProduct {
            name: "Tablet".to_string(),
            price: 399.99,
            category: "Electronics".to_string(),
        });

        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.id.get_version_num(), 7);
    }

    #[test]
    fn test_apply_update_changes_only_supplied_fields() {
        let mut product = Product::new(NewProduct {
            name: "Tablet".to_string(),
            price: 399.99,
            category: "Electronics".to_string(),
        });
        let original = product.clone();

        product.apply_update(UpdateProduct {
            price: Some(349.99),
            ..Default::default()
        });

        assert_eq!(product.name, original.name);
        assert_eq!(product.category, original.category);
        assert_eq!(product.price, 349.99);
        assert_eq!(product.created_at, original.created_at);
        assert!(product.updated_at >= original.updated_at);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(NewProduct {
            name: "Tablet".to_string(),
            price: 399.99,
            category: "Electronics".to_string(),
        });

        let value = serde_json::to_value(&product).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "name", "price", "category", "createdAt", "updatedAt"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 6);
    }
}
