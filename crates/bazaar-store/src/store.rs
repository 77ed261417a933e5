//! # Market Store
//!
//! The single facade the frontend talks to. Every transition runs the
//! same pipeline before touching state.
//!
//! ## Transition Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Transitions                                    │
//! │                                                                         │
//! │  Frontend Action        Store Method            State Change            │
//! │  ───────────────        ────────────            ────────────            │
//! │                                                                         │
//! │  Submit listing ──────► add_item() ───────────► catalog prepend         │
//! │  Click Add to Cart ───► add_to_cart() ────────► cart merge + counters   │
//! │  Change quantity ─────► update_cart_quantity()► entry qty / removal     │
//! │  Click stars ─────────► rate_item() ──────────► rating fold             │
//! │  Submit review ───────► add_review() ─────────► log prepend + fold      │
//! │  Sign in ─────────────► login() ──────────────► session + prompt        │
//! │  Sign out ────────────► logout() ─────────────► session + cart clear    │
//! │                                                                         │
//! │  Pipeline: validate fields, then check the role, then mutate.           │
//! │  A failure at any stage leaves every piece of state untouched.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use bazaar_core::stats::DashboardStats;
use bazaar_core::types::{Item, ItemDraft, LoginForm, Profile, Review, ReviewDraft, Role, User};
use bazaar_core::validation::{
    validate_comment, validate_company_name, validate_email, validate_item_description,
    validate_item_kind, validate_item_name, validate_password, validate_price_cents,
    validate_rating,
};

use crate::cart::{Cart, CartTotals};
use crate::catalog::{BrowseQuery, Catalog};
use crate::error::StoreResult;
use crate::reviews::ReviewLog;
use crate::seed;
use crate::session::{display_name, Session};

// =============================================================================
// Market Store
// =============================================================================

/// The whole marketplace state behind one facade.
#[derive(Debug, Default)]
pub struct MarketStore {
    catalog: Catalog,
    cart: Cart,
    reviews: ReviewLog,
    session: Session,
    stats: DashboardStats,
}

impl MarketStore {
    /// Creates an empty store: no listings, no reviews, anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store loaded with the demo seed data.
    pub fn with_seed_data() -> Self {
        MarketStore {
            catalog: Catalog::with_items(seed::seed_items()),
            cart: Cart::new(),
            reviews: ReviewLog::with_reviews(seed::seed_reviews()),
            session: Session::new(),
            stats: seed::seed_stats(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The catalog, newest listing first.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shopper's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The review log, newest first.
    pub fn reviews(&self) -> &ReviewLog {
        &self.reviews
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Derived cart totals for badges and the checkout footer.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Filters listings against a browse query.
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Item> {
        self.catalog.browse(query)
    }

    /// One item's reviews, newest first.
    pub fn reviews_for_item(&self, item_id: &str) -> Vec<&Review> {
        self.reviews.for_item(item_id)
    }

    /// The sales dashboard. Sellers only.
    pub fn dashboard_stats(&mut self) -> StoreResult<&DashboardStats> {
        self.session.require_role(Role::Seller)?;
        Ok(&self.stats)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Signs in with a login form, synthesizing a fresh account.
    ///
    /// ## Rules
    /// - Email and password must be present (nothing is verified)
    /// - Seller signups must name their company
    /// - Blank display names fall back to the email local part
    pub fn login(&mut self, form: LoginForm) -> StoreResult<User> {
        debug!(email = %form.email, "login");
        validate_email(&form.email)?;
        validate_password(&form.password)?;
        if let Profile::Seller { company_name } = &form.profile {
            validate_company_name(company_name)?;
        }

        let name = display_name(&form.name, &form.email);
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: form.email,
            name,
            profile: form.profile,
        };

        self.session.login(user.clone());
        info!(user_id = %user.id, role = %user.role(), "Signed in");
        Ok(user)
    }

    /// Switches to guest browsing and dismisses the login prompt.
    pub fn enter_guest(&mut self) {
        debug!("enter_guest");
        self.session.enter_guest();
    }

    /// Signs out and empties the cart.
    pub fn logout(&mut self) {
        self.session.logout();
        self.cart.clear();
        info!("Signed out");
    }

    /// Opens the login prompt without changing who is signed in.
    pub fn request_login(&mut self) {
        self.session.request_login();
    }

    /// Dismisses the login prompt without changing who is signed in.
    pub fn cancel_login(&mut self) {
        self.session.cancel_login();
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Lists a new item. Sellers only.
    ///
    /// The listing appears at the front of the catalog with zeroed
    /// counters; the rating average starts unrated at 0.
    pub fn add_item(&mut self, draft: ItemDraft) -> StoreResult<Item> {
        debug!(name = %draft.name, "add_item");
        validate_item_name(&draft.name)?;
        validate_item_kind(&draft.kind)?;
        validate_item_description(&draft.description)?;
        validate_price_cents(draft.price_cents)?;
        validate_company_name(&draft.company_name)?;

        let seller = self.session.require_role(Role::Seller)?;

        let item = Item {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            cover_image: draft.cover_image.unwrap_or_default(),
            additional_images: draft.additional_images,
            date_added: Utc::now(),
            price_cents: draft.price_cents,
            rating: 0.0,
            rating_count: 0,
            review_count: 0,
            purchase_count: 0,
            monthly_purchases: 0,
            user_rating: None,
            seller_id: seller.id,
            seller_name: seller.name,
            company_name: draft.company_name,
        };

        self.catalog.insert(item.clone());
        info!(item_id = %item.id, name = %item.name, "Listed new item");
        Ok(item)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of an item to the cart. Buyers only.
    ///
    /// Each successful call is one cart-add event: the item's purchase
    /// counters move even when the cart entry merely gains a unit.
    pub fn add_to_cart(&mut self, item_id: &str) -> StoreResult<()> {
        debug!(item_id = %item_id, "add_to_cart");
        self.session.require_role(Role::Buyer)?;

        let item = self.catalog.record_cart_add(item_id)?;
        self.cart.add(item);
        info!(item_id = %item_id, "Added item to cart");
        Ok(())
    }

    /// Sets a cart entry's quantity. Zero removes the entry.
    pub fn update_cart_quantity(&mut self, item_id: &str, quantity: i64) -> StoreResult<()> {
        debug!(item_id = %item_id, quantity = %quantity, "update_cart_quantity");
        self.cart.set_quantity(item_id, quantity)?;
        Ok(())
    }

    /// Removes a cart entry outright. Absent entries are a no-op.
    pub fn remove_from_cart(&mut self, item_id: &str) {
        debug!(item_id = %item_id, "remove_from_cart");
        self.cart.remove(item_id);
    }

    // =========================================================================
    // Ratings & Reviews
    // =========================================================================

    /// Rates an item with 1-5 stars. Buyers only.
    ///
    /// Returns the item's new average.
    pub fn rate_item(&mut self, item_id: &str, value: u8) -> StoreResult<f64> {
        debug!(item_id = %item_id, value = %value, "rate_item");
        validate_rating(value)?;
        self.session.require_role(Role::Buyer)?;

        let item = self.catalog.record_rating(item_id, value)?;
        let rating = item.rating;
        info!(item_id = %item_id, rating = %rating, "Rated item");
        Ok(rating)
    }

    /// Writes a review for an item. Buyers only.
    ///
    /// The review's star rating folds into the item's average exactly
    /// once, and its review count moves by one.
    pub fn add_review(&mut self, item_id: &str, draft: ReviewDraft) -> StoreResult<Review> {
        debug!(item_id = %item_id, rating = %draft.rating, "add_review");
        validate_rating(draft.rating)?;
        validate_comment(&draft.comment)?;

        let author = self.session.require_role(Role::Buyer)?;
        self.catalog.record_review_rating(item_id, draft.rating)?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            user_id: author.id,
            user_name: author.name,
            item_id: item_id.to_string(),
            rating: draft.rating,
            comment: draft.comment,
            images: draft.images,
            videos: draft.videos,
            date_added: Utc::now(),
            helpful: 0,
        };

        self.reviews.insert(review.clone());
        info!(review_id = %review.id, item_id = %item_id, "Added review");
        Ok(review)
    }
}

// =============================================================================
// Shared State Wrapper
// =============================================================================

/// Thread-safe handle to a [`MarketStore`].
///
/// ## Thread Safety
/// Uses `Arc<Mutex<MarketStore>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread runs a transition at a time
///
/// ## Why Not RwLock?
/// Transitions are quick, and most operations modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<MarketStore>>,
}

impl StoreState {
    /// Wraps a store for sharing across threads.
    pub fn new(store: MarketStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_store(|store| store.cart_totals());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&MarketStore) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.add_to_cart(&item_id))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut MarketStore) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(MarketStore::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::seed::{JEANS_ID, TSHIRT_ID};
    use bazaar_core::types::Category;
    use bazaar_core::ValidationError;

    fn buyer_form() -> LoginForm {
        LoginForm {
            email: "buyer@example.com".to_string(),
            password: "password123".to_string(),
            name: "Jane Buyer".to_string(),
            profile: Profile::Buyer {
                age: Some(28),
                country: Some("United States".to_string()),
                gender: None,
            },
        }
    }

    fn seller_form() -> LoginForm {
        LoginForm {
            email: "seller@example.com".to_string(),
            password: "password123".to_string(),
            name: "John Seller".to_string(),
            profile: Profile::Seller {
                company_name: "Fashion Forward Co.".to_string(),
            },
        }
    }

    fn test_draft() -> ItemDraft {
        ItemDraft {
            name: "Wool Scarf".to_string(),
            kind: "Accessory".to_string(),
            category: Category::Clothing,
            description: "Hand-woven merino scarf.".to_string(),
            price_cents: 4999,
            cover_image: None,
            additional_images: Vec::new(),
            company_name: "Fashion Forward Co.".to_string(),
        }
    }

    #[test]
    fn test_seeded_store_shape() {
        let store = MarketStore::with_seed_data();
        assert_eq!(store.catalog().len(), 5);
        assert_eq!(store.reviews().len(), 3);
        assert!(store.cart().is_empty());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn test_login_synthesizes_account() {
        let mut store = MarketStore::new();

        let user = store.login(buyer_form()).unwrap();
        assert_eq!(user.name, "Jane Buyer");
        assert_eq!(user.role(), Role::Buyer);
        assert!(store.session().is_authenticated());

        // Fresh UUID, not a seeded id
        assert_ne!(user.id, seed::SEED_BUYER_ID);
    }

    #[test]
    fn test_login_name_falls_back_to_email_local_part() {
        let mut store = MarketStore::new();
        let mut form = buyer_form();
        form.name = String::new();

        let user = store.login(form).unwrap();
        assert_eq!(user.name, "buyer");
    }

    #[test]
    fn test_login_rejects_missing_fields() {
        let mut store = MarketStore::new();

        let mut form = buyer_form();
        form.email = String::new();
        assert!(matches!(
            store.login(form),
            Err(StoreError::Validation(ValidationError::Required { .. }))
        ));

        let mut form = seller_form();
        form.profile = Profile::Seller {
            company_name: "  ".to_string(),
        };
        assert!(store.login(form).is_err());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn test_add_to_cart_requires_login() {
        let mut store = MarketStore::with_seed_data();

        let err = store.add_to_cart(TSHIRT_ID).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(store.session().login_prompt_open());
        assert!(store.cart().is_empty());

        // Guests are prompted too
        store.enter_guest();
        let err = store.add_to_cart(TSHIRT_ID).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(store.session().login_prompt_open());
    }

    #[test]
    fn test_add_to_cart_rejects_sellers() {
        let mut store = MarketStore::with_seed_data();
        store.login(seller_form()).unwrap();

        let err = store.add_to_cart(TSHIRT_ID).unwrap_err();
        assert!(matches!(
            err,
            StoreError::RoleNotAllowed {
                required: Role::Buyer,
                actual: Role::Seller,
            }
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_merges_and_counts_events() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();

        store.add_to_cart(TSHIRT_ID).unwrap();
        store.add_to_cart(TSHIRT_ID).unwrap();
        store.add_to_cart(JEANS_ID).unwrap();

        let totals = store.cart_totals();
        assert_eq!(totals.entry_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 2 * 2999 + 7999);

        // Two add events on the t-shirt, one on the jeans
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.purchase_count, 344);
        assert_eq!(tshirt.monthly_purchases, 47);
        let jeans = store.catalog().find(JEANS_ID).unwrap();
        assert_eq!(jeans.purchase_count, 199);
    }

    #[test]
    fn test_add_to_cart_missing_item() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();

        let err = store.add_to_cart("no-such-id").unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound(_)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_cart_quantity_transitions() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();
        store.add_to_cart(TSHIRT_ID).unwrap();

        store.update_cart_quantity(TSHIRT_ID, 4).unwrap();
        assert_eq!(store.cart().find(TSHIRT_ID).map(|e| e.quantity), Some(4));

        // Negative is rejected without touching the entry
        let err = store.update_cart_quantity(TSHIRT_ID, -1).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.cart().find(TSHIRT_ID).map(|e| e.quantity), Some(4));

        // Zero removes it
        store.update_cart_quantity(TSHIRT_ID, 0).unwrap();
        assert!(store.cart().is_empty());

        // Quantity changes are not add events
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.purchase_count, 343);
    }

    #[test]
    fn test_remove_from_cart_is_silent() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();
        store.add_to_cart(TSHIRT_ID).unwrap();

        store.remove_from_cart("never-added");
        assert_eq!(store.cart().len(), 1);

        store.remove_from_cart(TSHIRT_ID);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_rate_item_folds_average() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();

        // 4.5 over 128 ratings, then one more 5
        let rating = store.rate_item(TSHIRT_ID, 5).unwrap();
        assert!((rating - 4.503875968992248).abs() < 1e-9);

        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.rating_count, 129);
        assert_eq!(tshirt.user_rating, Some(5));
        // Reviews are untouched by standalone ratings
        assert_eq!(tshirt.review_count, 95);
    }

    #[test]
    fn test_rate_item_validates_before_guarding() {
        let mut store = MarketStore::with_seed_data();

        // Invalid rating fails validation even for visitors, so the
        // login prompt stays closed
        let err = store.rate_item(TSHIRT_ID, 0).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(!store.session().login_prompt_open());

        let err = store.rate_item(TSHIRT_ID, 6).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_rate_item_requires_buyer() {
        let mut store = MarketStore::with_seed_data();

        let err = store.rate_item(TSHIRT_ID, 4).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(store.session().login_prompt_open());

        store.login(seller_form()).unwrap();
        let err = store.rate_item(TSHIRT_ID, 4).unwrap_err();
        assert!(matches!(err, StoreError::RoleNotAllowed { .. }));

        // The average never moved
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.rating, 4.5);
        assert_eq!(tshirt.rating_count, 128);
    }

    #[test]
    fn test_add_review_updates_item_and_log() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();

        let draft = ReviewDraft {
            rating: 5,
            comment: "Lovely fit.".to_string(),
            images: Vec::new(),
            videos: Vec::new(),
        };
        let review = store.add_review(TSHIRT_ID, draft).unwrap();

        assert_eq!(review.user_name, "Jane Buyer");
        assert_eq!(review.helpful, 0);

        // Newest first, in both the log and the per-item view
        assert_eq!(store.reviews().len(), 4);
        assert_eq!(store.reviews().all()[0].id, review.id);
        assert_eq!(store.reviews_for_item(TSHIRT_ID)[0].id, review.id);

        // One fold and one review count bump
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.rating_count, 129);
        assert_eq!(tshirt.review_count, 96);
        assert!((tshirt.rating - 4.503875968992248).abs() < 1e-9);
        // Reviews do not set the session's star rating
        assert_eq!(tshirt.user_rating, None);
    }

    #[test]
    fn test_add_review_rejects_blank_comment() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();

        let draft = ReviewDraft {
            rating: 5,
            comment: "   ".to_string(),
            images: Vec::new(),
            videos: Vec::new(),
        };
        let err = store.add_review(TSHIRT_ID, draft).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert_eq!(store.reviews().len(), 3);
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.rating_count, 128);
        assert_eq!(tshirt.review_count, 95);
    }

    #[test]
    fn test_add_item_prepends_with_zeroed_counters() {
        let mut store = MarketStore::with_seed_data();
        store.login(seller_form()).unwrap();

        let item = store.add_item(test_draft()).unwrap();

        assert_eq!(store.catalog().len(), 6);
        assert_eq!(store.catalog().items()[0].id, item.id);
        assert_eq!(item.rating, 0.0);
        assert_eq!(item.rating_count, 0);
        assert_eq!(item.purchase_count, 0);
        assert_eq!(item.user_rating, None);
        assert_eq!(item.seller_name, "John Seller");
        // The storefront name comes from the form, not the account
        assert_eq!(item.company_name, "Fashion Forward Co.");
    }

    #[test]
    fn test_add_item_guards() {
        let mut store = MarketStore::with_seed_data();

        // Visitors get prompted
        let err = store.add_item(test_draft()).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(store.session().login_prompt_open());

        // Buyers are the wrong role
        store.login(buyer_form()).unwrap();
        let err = store.add_item(test_draft()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::RoleNotAllowed {
                required: Role::Seller,
                ..
            }
        ));
        assert_eq!(store.catalog().len(), 5);
    }

    #[test]
    fn test_add_item_validates_before_guarding() {
        let mut store = MarketStore::with_seed_data();

        let mut draft = test_draft();
        draft.name = String::new();
        let err = store.add_item(draft).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(!store.session().login_prompt_open());

        // A free listing is rejected even for a signed-in seller,
        // and the catalog keeps its five seeded items
        store.login(seller_form()).unwrap();
        let mut draft = test_draft();
        draft.price_cents = 0;
        assert!(store.add_item(draft).is_err());
        assert_eq!(store.catalog().len(), 5);
    }

    #[test]
    fn test_logout_clears_cart_but_not_catalog() {
        let mut store = MarketStore::with_seed_data();
        store.login(buyer_form()).unwrap();
        store.add_to_cart(TSHIRT_ID).unwrap();

        store.logout();

        assert!(store.cart().is_empty());
        assert!(!store.session().is_authenticated());
        // The add event survives the sign-out
        let tshirt = store.catalog().find(TSHIRT_ID).unwrap();
        assert_eq!(tshirt.purchase_count, 343);
    }

    #[test]
    fn test_dashboard_stats_is_seller_only() {
        let mut store = MarketStore::with_seed_data();

        let err = store.dashboard_stats().unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(store.session().login_prompt_open());

        store.login(buyer_form()).unwrap();
        let err = store.dashboard_stats().unwrap_err();
        assert!(matches!(err, StoreError::RoleNotAllowed { .. }));

        store.login(seller_form()).unwrap();
        let stats = store.dashboard_stats().unwrap();
        assert_eq!(stats.total_sales, 1519);
        assert_eq!(stats.top_selling_items.len(), 5);
    }

    #[test]
    fn test_cancel_login_keeps_visitor_status() {
        let mut store = MarketStore::with_seed_data();

        let _ = store.add_to_cart(TSHIRT_ID);
        assert!(store.session().login_prompt_open());

        store.cancel_login();
        assert!(!store.session().login_prompt_open());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn test_store_state_shares_across_threads() {
        let state = StoreState::new(MarketStore::with_seed_data());
        state.with_store_mut(|store| store.login(buyer_form()).map(|_| ())).unwrap();

        let mut handles = Vec::new();
        for _ in 0..2 {
            let state = state.clone();
            handles.push(std::thread::spawn(move || {
                state.with_store_mut(|store| store.add_to_cart(TSHIRT_ID))
            }));
        }
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let totals = state.with_store(|store| store.cart_totals());
        assert_eq!(totals.entry_count, 1);
        assert_eq!(totals.total_quantity, 2);

        let purchases = state.with_store(|store| {
            store.catalog().find(TSHIRT_ID).map(|i| i.purchase_count)
        });
        assert_eq!(purchases, Some(344));
    }
}
