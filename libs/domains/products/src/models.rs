use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// A stored product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-generated identifier
    #[schema(example = "01951b7e-3c2a-7d4e-9f10-2b8c4d5e6f70")]
    pub id: String,
    #[schema(example = "Shirt")]
    pub name: String,
    #[schema(example = "Nice")]
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 8596.78)]
    pub price: Decimal,
}

/// Request body for creating or replacing a product.
///
/// Missing strings deserialize as empty and a missing price as `None`, so an
/// incomplete body is reported as an invalid field rather than bad JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Shirt")]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Nice")]
    pub description: String,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[validate(required, custom(function = "positive"))]
    #[schema(value_type = f64, example = 8596.78)]
    pub price: Option<Decimal>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: Some(price),
        }
    }
}

/// A [`ProductInput`] that passed validation. Repositories only accept this.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl TryFrom<ProductInput> for ProductDraft {
    type Error = ValidationErrors;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        input.validate()?;

        let Some(price) = input.price else {
            let mut errors = ValidationErrors::new();
            errors.add("price", ValidationError::new("required"));
            return Err(errors);
        };

        Ok(Self {
            name: input.name,
            description: input.description,
            price,
        })
    }
}

impl Product {
    pub fn from_draft(id: impl Into<String>, draft: ProductDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.is_zero() {
        return Err(ValidationError::new("positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_names(errors: &ValidationErrors) -> Vec<String> {
        let mut names: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_valid_input_becomes_draft() {
        let draft = ProductDraft::try_from(ProductInput::new(
            "Shirt",
            "Nice",
            Decimal::new(859678, 2),
        ))
        .unwrap();

        assert_eq!(draft.name, "Shirt");
        assert_eq!(draft.price, Decimal::new(859678, 2));
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let input = ProductInput::new("   ", "", Decimal::ONE);
        let errors = ProductDraft::try_from(input).unwrap_err();
        assert_eq!(field_names(&errors), vec!["description", "name"]);
    }

    #[test]
    fn test_zero_and_negative_price_are_rejected() {
        for price in [Decimal::ZERO, Decimal::new(-152, 2)] {
            let errors = ProductDraft::try_from(ProductInput::new("Shirt", "Nice", price))
                .unwrap_err();
            assert_eq!(field_names(&errors), vec!["price"]);
        }
    }

    #[test]
    fn test_missing_fields_deserialize_then_fail_validation() {
        let input: ProductInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.name, "");
        assert!(input.price.is_none());

        let errors = input.validate().unwrap_err();
        assert_eq!(field_names(&errors), vec!["description", "name", "price"]);
    }

    #[test]
    fn test_price_deserializes_from_json_number() {
        let input: ProductInput = serde_json::from_value(json!({
            "name": "MacBook",
            "description": "Notebook da hora!",
            "price": 18958.43
        }))
        .unwrap();

        assert_eq!(input.price, Some(Decimal::new(1895843, 2)));
    }

    #[test]
    fn test_price_keeps_digits_beyond_f64() {
        let input: ProductInput = serde_json::from_str(
            r#"{"name": "Rack", "description": "Big", "price": 99999999999999.99}"#,
        )
        .unwrap();
        let price = input.price.unwrap();
        assert_eq!(price, Decimal::new(9999999999999999, 2));

        let draft = ProductDraft::try_from(ProductInput::new("Rack", "Big", price)).unwrap();
        let product = Product::from_draft("1", draft);
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.ends_with(r#""price":99999999999999.99}"#), "{text}");
    }

    #[test]
    fn test_product_serializes_price_as_number() {
        let product = Product {
            id: "1".into(),
            name: "Shirt".into(),
            description: "Nice".into(),
            price: Decimal::new(859678, 2),
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": "1", "name": "Shirt", "description": "Nice", "price": 8596.78})
        );
    }
}
