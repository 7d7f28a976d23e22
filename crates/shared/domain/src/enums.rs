//! Closed sets of string codes with display metadata.
//!
//! Codes are persisted in order/payment records and client storage, so they
//! are stable identifiers: renaming one is a breaking change.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle of an order, from checkout to the doorstep.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Terminal states: no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Refunded)
    }

    /// States in which the kitchen is still involved.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Confirmed | Self::Preparing | Self::Ready | Self::OutForDelivery)
    }
}

/// Lifecycle of a payment attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
    PartiallyRefunded,
    Cancelled,
}

impl PaymentStatus {
    /// Whether the attempt has reached a final outcome.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Pending | Self::Processing)
    }
}

/// How an order reaches the customer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeliveryMethod {
    Pickup,
    Delivery,
    DineIn,
}

/// Customer-facing presentation of a delivery method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryDisplay {
    pub name: &'static str,
    pub icon: &'static str,
    pub estimated_time: &'static str,
}

impl DeliveryMethod {
    /// Display metadata for methods offered in the storefront.
    ///
    /// `DineIn` is back-of-house only and has no storefront card.
    #[must_use]
    pub const fn display(self) -> Option<DeliveryDisplay> {
        match self {
            Self::Pickup => Some(DeliveryDisplay {
                name: "Pickup",
                icon: "\u{1f3ea}",
                estimated_time: "15-30 mins",
            }),
            Self::Delivery => Some(DeliveryDisplay {
                name: "Delivery",
                icon: "\u{1f69a}",
                estimated_time: "45-60 mins",
            }),
            Self::DineIn => None,
        }
    }
}

/// Dietary restriction tags attachable to products.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    Keto,
}

impl DietaryTag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::GlutenFree => "Gluten Free",
            Self::DairyFree => "Dairy Free",
            Self::NutFree => "Nut Free",
            Self::Keto => "Keto",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Vegetarian => "\u{1f957}",
            Self::Vegan => "\u{1f331}",
            Self::GlutenFree => "\u{1f33e}",
            Self::DairyFree => "\u{1f95b}",
            Self::NutFree => "\u{1f95c}",
            Self::Keto => "\u{1f951}",
        }
    }
}

/// Top-level storefront catalog sections.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    Breads,
    Pastries,
    Cakes,
    Cookies,
    Pizzas,
    Custom,
}

impl ProductCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breads => "Breads",
            Self::Pastries => "Pastries",
            Self::Cakes => "Cakes",
            Self::Cookies => "Cookies",
            Self::Pizzas => "Pizzas",
            Self::Custom => "Custom Orders",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Breads => "\u{1f35e}",
            Self::Pastries => "\u{1f950}",
            Self::Cakes => "\u{1f382}",
            Self::Cookies => "\u{1f36a}",
            Self::Pizzas => "\u{1f355}",
            Self::Custom => "\u{2728}",
        }
    }
}

/// Access roles across storefront and back office.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    Customer,
    Admin,
    Manager,
    Staff,
    Driver,
    SuperAdmin,
}

impl UserRole {
    /// Roles allowed into the `/admin` surface.
    #[must_use]
    pub const fn is_back_office(self) -> bool {
        matches!(self, Self::Admin | Self::Manager | Self::Staff | Self::SuperAdmin)
    }
}

/// Catalog visibility of a product.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    OutOfStock,
    Discontinued,
    Draft,
}

impl ProductStatus {
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Accepted payment instruments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    MobileMoney,
    BankTransfer,
    DigitalWallet,
}

/// Loyalty program tiers, lowest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

/// Channels over which customers can be notified.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
    InApp,
    Webhook,
}
