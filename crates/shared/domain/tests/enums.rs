use lbites_domain::enums::{
    DeliveryMethod, DietaryTag, LoyaltyTier, NotificationChannel, OrderStatus, PaymentMethod,
    PaymentStatus, ProductCategory, ProductStatus, UserRole,
};
use std::collections::HashSet;
use strum::IntoEnumIterator;

fn assert_codes_are_stable<T>()
where
    T: IntoEnumIterator + AsRef<str> + std::fmt::Debug + serde::Serialize,
{
    let mut seen = HashSet::new();
    for variant in T::iter() {
        let code = variant.as_ref().to_owned();
        assert!(!code.is_empty());
        assert!(
            code.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
            "{variant:?} code {code} is not a lowercase snake_case token"
        );
        assert!(seen.insert(code.clone()), "duplicate code {code}");

        // The persisted form must match the in-memory code.
        let json = serde_json::to_value(&variant).expect("serialize");
        assert_eq!(json, serde_json::Value::String(code));
    }
}

#[test]
fn all_codes_are_unique_snake_case_and_serde_stable() {
    assert_codes_are_stable::<OrderStatus>();
    assert_codes_are_stable::<PaymentStatus>();
    assert_codes_are_stable::<DeliveryMethod>();
    assert_codes_are_stable::<DietaryTag>();
    assert_codes_are_stable::<ProductCategory>();
    assert_codes_are_stable::<UserRole>();
    assert_codes_are_stable::<ProductStatus>();
    assert_codes_are_stable::<PaymentMethod>();
    assert_codes_are_stable::<LoyaltyTier>();
    assert_codes_are_stable::<NotificationChannel>();
}

#[test]
fn order_status_round_trips_through_str() {
    for status in OrderStatus::iter() {
        let parsed: OrderStatus = status.as_ref().parse().expect("parse code");
        assert_eq!(parsed, status);
    }
    assert_eq!(OrderStatus::OutForDelivery.as_ref(), "out_for_delivery");
    assert!("unknown_status".parse::<OrderStatus>().is_err());
}

#[test]
fn order_terminal_states() {
    assert!(OrderStatus::Completed.is_terminal());
    assert!(OrderStatus::Cancelled.is_terminal());
    assert!(OrderStatus::Refunded.is_terminal());
    assert!(!OrderStatus::OutForDelivery.is_terminal());
    assert!(OrderStatus::Preparing.is_in_progress());
}

#[test]
fn payment_final_states() {
    assert!(PaymentStatus::Completed.is_final());
    assert!(PaymentStatus::PartiallyRefunded.is_final());
    assert!(!PaymentStatus::Processing.is_final());
}

#[test]
fn storefront_metadata_is_present() {
    for tag in DietaryTag::iter() {
        assert!(!tag.label().is_empty(), "{tag:?} has no label");
        assert!(!tag.emoji().is_empty(), "{tag:?} has no emoji");
    }
    for category in ProductCategory::iter() {
        assert!(!category.label().is_empty(), "{category:?} has no label");
        assert!(!category.emoji().is_empty(), "{category:?} has no emoji");
    }

    let pickup = DeliveryMethod::Pickup.display().expect("pickup card");
    assert_eq!(pickup.estimated_time, "15-30 mins");
    let delivery = DeliveryMethod::Delivery.display().expect("delivery card");
    assert_eq!(delivery.estimated_time, "45-60 mins");
    assert!(DeliveryMethod::DineIn.display().is_none());
}

#[test]
fn loyalty_tiers_are_ordered() {
    assert!(LoyaltyTier::Bronze < LoyaltyTier::Silver);
    assert!(LoyaltyTier::Platinum < LoyaltyTier::Diamond);
}

#[test]
fn back_office_roles() {
    assert!(UserRole::Admin.is_back_office());
    assert!(UserRole::SuperAdmin.is_back_office());
    assert!(!UserRole::Customer.is_back_office());
    assert!(!UserRole::Driver.is_back_office());
    assert!(ProductStatus::Active.is_purchasable());
    assert!(!ProductStatus::OutOfStock.is_purchasable());
}
