use lbites_kernel::SAFE_ALPHABET;
use lbites_kernel::safe_nanoid;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn ids_slot_into_route_templates() {
    use lbites_kernel::domain::routes::Route;

    let id = safe_nanoid!();
    let path = Route::TrackOrder.fill(&[&id]).expect("one param");
    assert_eq!(path, format!("/track/{id}"));
}
