//! Search filter for `GET /products/search`.
//!
//! The same filter renders as a SeaORM [`Condition`] for PostgreSQL and as an
//! in-process predicate for the in-memory repository. Both must agree.

use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::entity::Column;
use crate::models::Product;

/// Optional search criteria. Each absent criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Words that must appear, in this order, within the name or within the description
    #[serde(default, rename = "q")]
    pub text: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, deserialize_with = "blank_as_none")]
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    #[serde(default, deserialize_with = "blank_as_none")]
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    pub fn text(term: impl Into<String>) -> Self {
        Self {
            text: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn price_range(min_price: Option<Decimal>, max_price: Option<Decimal>) -> Self {
        Self {
            text: None,
            min_price,
            max_price,
        }
    }

    /// `text AND price`, for `QueryFilter::filter`.
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add(self.text_condition())
            .add(self.price_condition())
    }

    /// In-process equivalent of [`Self::condition`].
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.matches_price(product.price)
    }

    fn words(&self) -> Vec<String> {
        self.text
            .as_deref()
            .map(|term| term.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default()
    }

    fn text_condition(&self) -> Condition {
        let Some(pattern) = like_pattern(&self.words()) else {
            return Condition::all();
        };

        Condition::any()
            .add(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern.clone()))
            .add(Expr::expr(Func::lower(Expr::col(Column::Description))).like(pattern))
    }

    fn price_condition(&self) -> Condition {
        match (self.min_price, self.max_price) {
            (None, None) => Condition::all(),
            (Some(min), None) => Condition::all().add(Column::Price.gte(min)),
            (None, Some(max)) => Condition::all().add(Column::Price.lte(max)),
            (Some(min), Some(max)) => Condition::all().add(Column::Price.between(min, max)),
        }
    }

    fn matches_text(&self, product: &Product) -> bool {
        let words = self.words();
        if words.is_empty() {
            return true;
        }

        contains_in_order(&product.name.to_lowercase(), &words)
            || contains_in_order(&product.description.to_lowercase(), &words)
    }

    fn matches_price(&self, price: Decimal) -> bool {
        self.min_price.is_none_or(|min| price >= min) && self.max_price.is_none_or(|max| price <= max)
    }
}

/// `%w1%w2%...%`, or `None` when there are no words.
///
/// All words go into one pattern, so a multi-word term only matches when
/// every word occurs, in order, inside the same column.
fn like_pattern(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }

    let mut pattern = String::from("%");
    for word in words {
        pattern.push_str(word);
        pattern.push('%');
    }
    Some(pattern)
}

/// `?min_price=` arrives as an empty string and means "no bound".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Decimal::from_str(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Leftmost successive search, which is how `LIKE '%w1%w2%'` matches.
fn contains_in_order(haystack: &str, words: &[String]) -> bool {
    let mut rest = haystack;
    for word in words {
        match rest.find(word.as_str()) {
            Some(at) => rest = &rest[at + word.len()..],
            None => return false,
        }
    }
    true
}
