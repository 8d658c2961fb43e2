use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{ListingId, MemberId};

/// Listing - a pre-loved product offered for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,

    // Content
    pub title: String,
    pub description: String,

    // Hot path fields
    pub price: Decimal,
    pub category: Category,

    pub image_url: String,
    pub seller_id: MemberId,
}

/// Listing fields before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image_url: String,
    pub seller_id: MemberId,
}

impl NewListing {
    /// Attach an id, producing the full replacement record used by updates
    pub fn with_id(self, id: ListingId) -> Listing {
        Listing {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
            seller_id: self.seller_id,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Closed set of listing categories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Clothing,
    Furniture,
    Books,
    HomeGarden,
    Sports,
    Toys,
    #[default]
    Other,
}

impl Category {
    /// Every category, in selector order
    pub fn all() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Clothing,
            Category::Furniture,
            Category::Books,
            Category::HomeGarden,
            Category::Sports,
            Category::Toys,
            Category::Other,
        ]
    }

    /// Wire value, also what the description prompt embeds
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Clothing => "CLOTHING",
            Category::Furniture => "FURNITURE",
            Category::Books => "BOOKS",
            Category::HomeGarden => "HOME_GARDEN",
            Category::Sports => "SPORTS",
            Category::Toys => "TOYS",
            Category::Other => "OTHER",
        }
    }

    /// Human-facing label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Furniture => "Furniture",
            Category::Books => "Books",
            Category::HomeGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Invalid category: {}", s))
    }
}
