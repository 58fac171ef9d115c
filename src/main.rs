mod domain;
mod clients;
mod error;
mod order_state;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, OrderFlow, ShopConfig, QUANTITY_CHOICES};
use crate::clients::LogShare;
use crate::order_state::OrderEvent;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ShopConfig::from_env().map_err(|e| e.to_string())?;
    info!(recipient = %config.recipient, "Starting cupcake order flow");

    let mut flow = OrderFlow::new(config, LogShare).map_err(|e| e.to_string())?;

    // Async consumer of the combined snapshot channel
    let mut snapshots = flow.order().watch();
    let watcher = tokio::spawn(
        async move {
            while snapshots.changed().await.is_ok() {
                let order = snapshots.borrow_and_update().clone();
                info!(quantity = order.quantity, flavor = %order.flavor, date = %order.date, price = %order.price, "Order updated");
            }
        }
        .instrument(tracing::info_span!("snapshot_watcher")),
    );

    // Summary screen re-renders the price on every change
    let price_view = flow.order_mut().subscribe(|event| {
        if let OrderEvent::PriceChanged { text, .. } = event {
            info!(price = %text, "Price shown");
        }
    });

    let span = tracing::info_span!("order_processing");
    let result = async {
        flow.start_order(QUANTITY_CHOICES[2])?;
        flow.order_mut().set_flavor("Vanilla");
        flow.next()?;
        let pickup = flow.order().date_options()[1].clone();
        flow.order_mut().set_date(&pickup);
        flow.next()?;
        flow.send_order()
    }
    .instrument(span)
    .await;

    match result {
        Ok(request) => info!(subject = %request.subject, "Order processed successfully"),
        Err(e) => {
            error!(error = %e, "Order processing failed");
            flow.cancel();
        }
    }

    flow.order_mut().unsubscribe(price_view);
    info!(screen = ?flow.screen(), "Ready for next order");

    // Closing the session closes the snapshot channel
    drop(flow);
    if let Err(e) = watcher.await {
        error!(error = ?e, "Snapshot watcher failed");
        return Err(e.to_string());
    }

    info!("Application completed successfully");
    Ok(())
}
