//! Listing form: load, generate, and submit against mock collaborators.

use std::sync::Arc;

use ecofinds_core::common::AuthUser;
use ecofinds_core::domains::listings::{
    Category, FormError, GenerateOutcome, Listing, ListingFields, ListingForm, SubmitOutcome,
};
use ecofinds_core::kernel::test_dependencies::{MockAI, MockListingStore, TestDependencies};
use ecofinds_core::kernel::ToastKind;
use rust_decimal::Decimal;

fn oak_chair() -> Listing {
    Listing {
        id: "p1".into(),
        title: "Oak chair".to_string(),
        description: "Solid oak, a few scratches.".to_string(),
        price: Decimal::new(2500, 2),
        category: Category::Furniture,
        image_url: "https://picsum.photos/seed/p1/800/600".to_string(),
        seller_id: "u1".into(),
    }
}

fn seller() -> AuthUser {
    AuthUser::new("u1", "Sam")
}

fn fill(form: &ListingForm, title: &str, description: &str, price: &str) {
    form.set_title(title);
    form.set_description(description);
    form.set_price(price);
}

// =============================================================================
// Edit mode
// =============================================================================

#[tokio::test]
async fn load_for_edit_populates_fields() {
    let test_deps =
        TestDependencies::new().mock_listings(MockListingStore::new().with_listing(oak_chair()));
    let form = ListingForm::new(test_deps.to_deps(), Some("p1".into()));

    form.load_for_edit().await;

    let fields = form.fields();
    assert!(form.is_edit_mode());
    assert_eq!(fields.title, "Oak chair");
    assert_eq!(fields.description, "Solid oak, a few scratches.");
    assert_eq!(fields.price, "25.00");
    assert_eq!(fields.category, Category::Furniture);
}

#[tokio::test]
async fn editing_price_updates_only() {
    let test_deps =
        TestDependencies::new().mock_listings(MockListingStore::new().with_listing(oak_chair()));
    let form = ListingForm::new(test_deps.to_deps(), Some("p1".into()));
    form.load_for_edit().await;

    form.set_price("19.99");
    let outcome = form.submit(Some(&seller())).await.unwrap();

    let expected = Listing {
        price: Decimal::new(1999, 2),
        ..oak_chair()
    };
    assert_eq!(outcome, SubmitOutcome::Updated(expected.clone()));
    assert_eq!(test_deps.listings.updated(), vec![expected]);
    assert!(test_deps.listings.added().is_empty());
    assert_eq!(test_deps.navigator.visits(), vec!["/my-listings".to_string()]);
}

#[tokio::test]
async fn unknown_listing_leaves_defaults() {
    let test_deps =
        TestDependencies::new().mock_listings(MockListingStore::new().with_listing(oak_chair()));
    let form = ListingForm::new(test_deps.to_deps(), Some("missing".into()));

    form.load_for_edit().await;
    assert_eq!(form.fields(), ListingFields::default());

    fill(&form, "Lamp", "Brass desk lamp.", "12");
    form.submit(Some(&seller())).await.unwrap();

    let updated = test_deps.listings.updated();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id.as_str(), "missing");
    assert!(updated[0]
        .image_url
        .starts_with("https://picsum.photos/seed/"));
    assert!(test_deps.listings.added().is_empty());
}

// =============================================================================
// Create mode
// =============================================================================

#[tokio::test]
async fn create_assigns_seller_category_and_fresh_images() {
    let test_deps = TestDependencies::new();
    let user = seller();

    let mut images = Vec::new();
    for title in ["Board game", "Puzzle"] {
        let form = ListingForm::new(test_deps.to_deps(), None);
        assert!(!form.is_edit_mode());
        fill(&form, title, "Complete, all pieces included.", "8.50");
        form.set_category("OTHER".parse().unwrap());

        match form.submit(Some(&user)).await.unwrap() {
            SubmitOutcome::Created(listing) => {
                assert!(!listing.id.is_empty());
                assert_eq!(listing.category, Category::Other);
                assert_eq!(listing.seller_id, user.member_id);
                assert_eq!(listing.price, Decimal::new(850, 2));
                images.push(listing.image_url);
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    assert_eq!(test_deps.listings.added().len(), 2);
    assert!(test_deps.listings.updated().is_empty());
    assert_ne!(images[0], images[1]);
    assert_eq!(test_deps.navigator.visits().len(), 2);
}

#[tokio::test]
async fn submit_without_user_does_nothing() {
    let test_deps = TestDependencies::new();
    let form = ListingForm::new(test_deps.to_deps(), None);
    fill(&form, "Bike", "Road bike, 54cm.", "120");

    let outcome = form.submit(None).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Unauthenticated);
    assert!(test_deps.listings.added().is_empty());
    assert!(test_deps.navigator.visits().is_empty());
    assert!(test_deps.notifier.toasts().is_empty());
}

#[tokio::test]
async fn invalid_price_is_rejected_before_saving() {
    let test_deps = TestDependencies::new();
    let form = ListingForm::new(test_deps.to_deps(), None);

    for price in ["", "twelve", "-3", "4.999"] {
        fill(&form, "Bike", "Road bike, 54cm.", price);
        let err = form.submit(Some(&seller())).await.unwrap_err();
        assert!(matches!(err, FormError::Validation(_)), "price {price:?}");
    }

    assert!(test_deps.listings.added().is_empty());
    assert!(test_deps.navigator.visits().is_empty());
}

#[tokio::test]
async fn store_failure_does_not_navigate() {
    let test_deps =
        TestDependencies::new().mock_listings(MockListingStore::new().failing_writes());
    let form = ListingForm::new(test_deps.to_deps(), None);
    fill(&form, "Bike", "Road bike, 54cm.", "120");

    let err = form.submit(Some(&seller())).await.unwrap_err();

    assert!(matches!(err, FormError::Store(_)));
    assert!(err.to_string().starts_with("Failed to save listing"));
    assert!(test_deps.navigator.visits().is_empty());
}

// =============================================================================
// Description generation
// =============================================================================

#[tokio::test]
async fn empty_title_blocks_generation() {
    let test_deps = TestDependencies::new();
    let form = ListingForm::new(test_deps.to_deps(), None);

    assert!(!form.can_generate());
    let outcome = form.generate_description().await;

    assert_eq!(outcome, GenerateOutcome::MissingTitle);
    assert_eq!(test_deps.ai.call_count(), 0);
    assert_eq!(
        test_deps.notifier.toasts(),
        vec![(
            "Please enter a product title first.".to_string(),
            ToastKind::Error
        )]
    );
}

#[tokio::test]
async fn generated_text_replaces_description() {
    let test_deps = TestDependencies::new()
        .mock_ai(MockAI::new().with_response("  Great chair, gently used.  "));
    let form = ListingForm::new(test_deps.to_deps(), None);
    fill(&form, "Oak chair", "old text", "25");
    form.set_category(Category::Furniture);

    let outcome = form.generate_description().await;

    assert_eq!(
        outcome,
        GenerateOutcome::Generated("Great chair, gently used.".to_string())
    );
    assert_eq!(form.fields().description, "Great chair, gently used.");
    assert!(test_deps.ai.was_called_with("Category: FURNITURE"));
    assert_eq!(
        test_deps.notifier.last_toast(),
        Some((
            "Description generated successfully!".to_string(),
            ToastKind::Success
        ))
    );
}

#[tokio::test]
async fn failed_generation_keeps_description_and_clears_flag() {
    let test_deps = TestDependencies::new().mock_ai(MockAI::new().with_error("timed out"));
    let form = ListingForm::new(test_deps.to_deps(), None);
    fill(&form, "Oak chair", "my own words", "25");

    let outcome = form.generate_description().await;

    assert!(matches!(outcome, GenerateOutcome::Failed(_)));
    assert_eq!(form.fields().description, "my own words");
    assert!(!form.is_generating());
    assert!(form.can_generate());
    assert_eq!(
        test_deps.notifier.last_toast(),
        Some((
            "Failed to generate description. Please try again later.".to_string(),
            ToastKind::Error
        ))
    );
}

#[tokio::test]
async fn unconfigured_ai_reports_configuration_toast() {
    let test_deps = TestDependencies::new().mock_ai(MockAI::unconfigured());
    let form = ListingForm::new(test_deps.to_deps(), None);
    form.set_title("Oak chair");

    form.generate_description().await;

    assert_eq!(test_deps.ai.call_count(), 0);
    assert_eq!(
        test_deps.notifier.last_toast(),
        Some((
            "AI functionality is not configured.".to_string(),
            ToastKind::Error
        ))
    );
}

#[tokio::test]
async fn only_one_generation_in_flight() {
    let (ai, gate) = MockAI::new().with_response("First result").gated();
    let test_deps = TestDependencies::new().mock_ai(ai);
    let form = Arc::new(ListingForm::new(test_deps.to_deps(), None));
    form.set_title("Lamp");

    let first = tokio::spawn({
        let form = form.clone();
        async move { form.generate_description().await }
    });

    while test_deps.ai.call_count() == 0 {
        tokio::task::yield_now().await;
    }

    assert!(form.is_generating());
    assert!(!form.can_generate());
    assert_eq!(
        form.generate_description().await,
        GenerateOutcome::AlreadyGenerating
    );

    // Fields stay editable while the request is pending
    form.set_price("15");
    assert_eq!(form.fields().price, "15");

    gate.notify_one();
    let outcome = first.await.unwrap();

    assert_eq!(
        outcome,
        GenerateOutcome::Generated("First result".to_string())
    );
    assert_eq!(test_deps.ai.call_count(), 1);
    assert!(!form.is_generating());
    assert_eq!(test_deps.notifier.toasts().len(), 1);
}
