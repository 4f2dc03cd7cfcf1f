//! # Cafeteria demo
//!
//! Drives the library end to end:
//! 1.  Starting the [`CafeteriaSystem`] and loading demo data.
//! 2.  A student filling a cart and placing an order.
//! 3.  Staff moving the order along and reading the dashboard.

use cafeteria::cart::Cart;
use cafeteria::clients::OrderRequest;
use cafeteria::lifecycle::{seed, CafeteriaSystem, Config};
use cafeteria::model::{PaymentMethod, Session, StudentId};
use cafeteria::views::{ActiveOrdersView, OrderHistoryView};
use docstore::tracing::setup_tracing;
use docstore::CollectionHandle;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load();
    info!(?config, "Starting cafeteria");

    let system = CafeteriaSystem::new(&config);

    if config.seed_demo_data {
        let summary = seed(&system).await.map_err(|e| e.to_string())?;
        info!(?summary, "Seeded");
    }

    // A student orders two pizzas and a salad
    let student = Session::student(StudentId::new("S002"));
    let menu = system.menu_client.list().await.map_err(|e| e.to_string())?;
    let mut cart = Cart::new();
    for item in menu.iter().filter(|item| item.name == "Pizza" || item.name == "Salad") {
        cart.add_item(item);
    }
    if let Some(pizza) = menu.iter().find(|item| item.name == "Pizza") {
        cart.add_item(pizza);
    }
    info!(
        total = cart.total_price(),
        prep_minutes = cart.total_prep_minutes(),
        "Cart ready"
    );

    let request = OrderRequest {
        class_name: Some("Class B".to_string()),
        payment_method: Some(PaymentMethod::Bit),
        student: None,
    };
    let span = tracing::info_span!("order_submission");
    let placed = async {
        system
            .order_client
            .place_order(&student, &request, &mut cart)
            .await
    }
    .instrument(span)
    .await;

    let staff = Session::staff();
    match placed {
        Ok(order_id) => {
            info!(%order_id, "Order placed");

            // The kitchen sends it out, then it arrives
            let mut active = ActiveOrdersView::load(&system.order_client)
                .await
                .map_err(|e| e.to_string())?;
            for _ in 0..2 {
                let status = active
                    .advance(&system.order_client, &staff, order_id)
                    .await
                    .map_err(|e| e.to_string())?;
                info!(%order_id, %status, "Advanced");
            }

            let directory = system.directory().await.map_err(|e| e.to_string())?;
            for row in active.rows(&directory) {
                info!(id = %row.id, student = %row.student_name, items = %row.items, status = %row.status, "Active");
            }

            let history = OrderHistoryView::load(&system.order_client)
                .await
                .map_err(|e| e.to_string())?;
            let found = history.search(&directory, "bob");
            info!(matches = found.len(), "History search for 'bob'");

            let own = system
                .order_client
                .orders_for(&StudentId::new("S002"))
                .await
                .map_err(|e| e.to_string())?;
            info!(orders = own.len(), "Orders for S002");
        }
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    let dashboard = system
        .dashboard(&staff, None, &chrono::Local::now())
        .await
        .map_err(|e| e.to_string())?;
    let rendered = serde_json::to_string_pretty(&dashboard).map_err(|e| e.to_string())?;
    println!("{rendered}");

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
