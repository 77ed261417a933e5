//! # Store Walkthrough
//!
//! Narrated tour of the marketplace state machine for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p bazaar-store --bin demo
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p bazaar-store --bin demo
//! ```
//!
//! ## What It Shows
//! - Browsing and searching the seeded catalog
//! - The login prompt opening when a visitor tries to shop
//! - Cart merging, quantity updates and derived totals
//! - Rating folds and review creation
//! - The seller-only dashboard
//! - Logout clearing the cart

use bazaar_core::types::{LoginForm, Profile, ReviewDraft};
use bazaar_store::seed::{SNEAKERS_ID, TSHIRT_ID};
use bazaar_store::{BrowseQuery, MarketStore};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bazaar_store=debug,bazaar_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("🛍 Bazaar Store Walkthrough");
    println!("===========================");
    println!();

    let mut store = MarketStore::with_seed_data();

    // Browse the seeded catalog
    println!("Catalog ({} listings):", store.catalog().len());
    for item in store.catalog().items() {
        println!(
            "  {:<24} {:>8}   {:.1} stars from {} ratings",
            item.name,
            item.price().to_string(),
            item.rating,
            item.rating_count
        );
    }

    let hits = store.browse(&BrowseQuery::term("running"));
    println!();
    println!("Search 'running': {} result(s)", hits.len());

    // Visitors get prompted instead of shopping
    println!();
    if let Err(err) = store.add_to_cart(TSHIRT_ID) {
        println!("⚠ Anonymous add to cart: {}", err);
    }
    println!(
        "  Login prompt open: {}",
        store.session().login_prompt_open()
    );

    // Sign in and shop
    let buyer = store.login(buyer_form())?;
    println!();
    println!("✓ Signed in as {} ({})", buyer.name, buyer.role());

    store.add_to_cart(TSHIRT_ID)?;
    store.add_to_cart(TSHIRT_ID)?;
    store.add_to_cart(SNEAKERS_ID)?;
    let totals = store.cart_totals();
    println!(
        "✓ Cart: {} entries, {} units, {}",
        totals.entry_count,
        totals.total_quantity,
        totals.total()
    );

    store.update_cart_quantity(TSHIRT_ID, 3)?;
    let totals = store.cart_totals();
    println!(
        "✓ After quantity update: {} units, {}",
        totals.total_quantity,
        totals.total()
    );

    // Rate and review
    let average = store.rate_item(SNEAKERS_ID, 5)?;
    println!("✓ Rated the sneakers: new average {:.4}", average);

    let review = store.add_review(
        TSHIRT_ID,
        ReviewDraft {
            rating: 5,
            comment: "Soft fabric, great fit.".to_string(),
            images: Vec::new(),
            videos: Vec::new(),
        },
    )?;
    println!("✓ Review added:");
    println!("{}", serde_json::to_string_pretty(&review)?);

    // Logout empties the cart
    store.logout();
    println!();
    println!(
        "✓ Signed out. Cart is empty: {}",
        store.cart().is_empty()
    );

    // The dashboard needs a seller account
    let seller = store.login(seller_form())?;
    println!("✓ Signed in as {} ({})", seller.name, seller.role());

    let stats = store.dashboard_stats()?;
    println!(
        "✓ Dashboard: {} lifetime revenue over {} sales",
        stats.total_revenue(),
        stats.total_sales
    );
    if let Some(top) = stats.top_selling_items.first() {
        println!("  Top seller: {} ({} units)", top.item_name, top.sales);
    }

    println!();
    println!("✓ Walkthrough complete!");

    Ok(())
}
