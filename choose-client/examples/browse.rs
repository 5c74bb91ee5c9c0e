// choose-client/examples/browse.rs
// Browse the catalog and, with credentials, orders (all of them for admins)
//
// Usage: cargo run -p choose-client --example browse [email password]

use choose_client::models::MAX_FEATURED;
use choose_client::util::image::{THUMBNAIL_SIZE, thumbnail_url};
use choose_client::{ClientConfig, ShopClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Connecting");
    let shop = ShopClient::new(&config)?;

    let mut expired = shop.subscribe_session_expired();
    tokio::spawn(async move {
        while expired.recv().await.is_ok() {
            tracing::warn!("Session expired, please sign in again");
        }
    });

    for category in shop.categories().get_all().await? {
        println!("[{}] {}", category.id, category.name);
    }

    for product in shop.products().get_all().await? {
        println!(
            "{:>6} {:<30} NT${:<8} stock {:<4} {}",
            product.id,
            product.name,
            product.price,
            product.total_stock,
            thumbnail_url(&product.image_url, THUMBNAIL_SIZE)
        );
    }

    let featured = shop.featured().get_products().await?;
    for product in featured.iter().take(MAX_FEATURED) {
        println!("new arrival: {}", product.name);
    }

    let args: Vec<String> = std::env::args().collect();
    if let [_, email, password, ..] = args.as_slice() {
        let user = shop.auth().login(email, password).await?;
        tracing::info!(user_id = %user.id, role = ?user.role, "Signed in");

        let orders = if user.role.is_admin() {
            shop.orders().get_all().await?
        } else {
            shop.orders().get_my().await?
        };
        for order in orders {
            println!(
                "order {} {} {} NT${}",
                order.id,
                order.date.as_deref().unwrap_or("-"),
                order.status,
                order.total
            );
        }
        shop.auth().logout().await?;
    }

    Ok(())
}
