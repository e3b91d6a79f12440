use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use temper::config::{CONFIG_FILE, StorefrontConfig};
use temper::framework::components::display_amount;
use temper::prelude::*;
use tower_http::services::ServeDir;

mod catalog;

struct AppState {
    storefront: Storefront,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let addr: SocketAddr = envmnt::get_or("SERVER_ADDR", "127.0.0.1:3000")
        .parse()
        .context("invalid SERVER_ADDR")?;
    let dist = envmnt::get_or("DIST_DIR", "dist");
    let config = StorefrontConfig::load_or_default(envmnt::get_or("TEMPER_CONFIG", CONFIG_FILE));

    let header = MenuBuilder::new()
        .link("/", "Каталог")
        .link("/cart", "Корзина")
        .link("/order", "Оформление заказа")
        .build();
    let storefront = StorefrontBuilder::new()
        .title("Магазин бытовой техники")
        .config(config)
        .header(header)
        .build();
    storefront.write_assets(&dist)?;

    let state = Arc::new(AppState { storefront });
    let app = Router::new()
        .nest_service("/assets", ServeDir::new(format!("{dist}/assets")))
        .route("/", get(catalog_page))
        .route("/cart", get(cart_page))
        .route("/order", get(order_page))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

type PageResult = Result<Html<String>, (StatusCode, String)>;

fn render(state: &AppState, content: Element) -> PageResult {
    state.storefront.page(content).map(Html).map_err(|err| {
        tracing::error!("failed to render page: {err:#}");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })
}

async fn catalog_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> PageResult {
    let range = PriceRange::from_query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let brands = params
        .iter()
        .filter(|(key, _)| key == "brand")
        .map(|(_, value)| value.clone())
        .collect::<Vec<_>>();

    let products = catalog::products();
    let matching = catalog::filter(&products, &brands, &range);
    tracing::debug!("catalog: {} of {} products match", matching.len(), products.len());

    let brand_list = catalog::BRANDS.iter().fold(
        FilterListBuilder::new("brand-list", "brand")
            .title("Бренды")
            .selected(brands.clone()),
        |list, (value, text)| list.option(*value, *text),
    );

    let sidebar = aside().class("sidebar").child(
        form()
            .class("filter-form")
            .attr("method", "get")
            .attr("action", "/")
            .child(PriceFilterBuilder::new().range(range).build())
            .child(brand_list.build())
            .child(submit().text("Применить")),
    );

    let cards = matching.iter().map(|product| {
        div()
            .class("product-card")
            .child(h3().text(product.name))
            .child(p().class("price").text(&format!("{} ₽", display_amount(product.price))))
    });
    let listing = if matching.is_empty() {
        div().class("product-list").child(p().text("Ничего не найдено"))
    } else {
        div().class("product-list").children(cards)
    };

    render(&state, div().class("catalog").child(sidebar).child(listing))
}

async fn cart_page(State(state): State<Arc<AppState>>) -> PageResult {
    let content = div()
        .class("cart")
        .child(h2().text("Корзина"))
        .child(CartTableBuilder::new().build())
        .child(checkout_button("/order", "Перейти к оформлению"))
        .child(EmptyCartModalBuilder::new().build());
    render(&state, content)
}

async fn order_page(State(state): State<Arc<AppState>>) -> PageResult {
    let content = div()
        .class("order")
        .child(h2().text("Оформление заказа"))
        .child(CartTableBuilder::new().build())
        .child(OrderFormBuilder::new().build())
        .child(EmptyCartModalBuilder::new().build());
    render(&state, content)
}
