use temper::config::StorefrontConfig;
use temper::prelude::*;

fn storefront() -> Storefront {
    StorefrontBuilder::new()
        .title("Магазин")
        .header(MenuBuilder::new().link("/", "Каталог").link("/cart", "Корзина").build())
        .build()
}

#[test]
fn page_links_shared_assets() {
    let page = storefront().page(div().text("Каталог")).unwrap();
    assert!(page.contains("href=\"/assets/css/style.css\""));
    assert!(page.contains("src=\"/assets/js/storefront.js\""));
    assert!(page.contains("<div class=\"app\">"));
}

#[test]
fn menu_markup_matches_default_selectors() {
    let config = StorefrontConfig::default().menu;
    let page = storefront().page(div()).unwrap();
    for selector in [
        &config.icon_selector,
        &config.menu_selector,
        &config.content_selector,
    ] {
        let class = selector.trim_start_matches('.');
        assert!(page.contains(&format!("class=\"{class}\"")), "{class}");
    }
    assert!(page.contains("aria-expanded=\"false\""));
}

#[test]
fn empty_cart_page_has_modal_and_trigger() {
    let content = div()
        .child(CartTableBuilder::new().build())
        .child(checkout_button("/order", "Оформить заказ"))
        .child(EmptyCartModalBuilder::new().build());
    let page = storefront().page(content).unwrap();

    assert!(page.contains("<table class=\"cart-table\">"));
    assert!(page.contains("<tr class=\"total\">"));
    assert!(page.contains("class=\"checkout\""));
    assert!(page.contains("id=\"empty-cart-modal\""));
    assert!(page.contains("id=\"close-modal\""));
    assert!(page.contains("class=\"modal-overlay\""));
}

#[test]
fn catalog_filters_prefill_from_query() {
    let range = PriceRange::from_query([("price_from", "2500,5"), ("price_to", "abc")]);
    let content = form()
        .class("filter-form")
        .child(PriceFilterBuilder::new().range(range).build())
        .child(
            FilterListBuilder::new("brand-list", "brand")
                .option("acme", "Acme")
                .option("globex", "Globex")
                .visible(1)
                .build(),
        );
    let page = storefront().page(content).unwrap();

    assert!(page.contains("value=\"2 500.5\""));
    assert!(page.contains("data-toggle-list=\"brand-list\""));
    assert!(page.contains("class=\"hidden-item\""));
}
