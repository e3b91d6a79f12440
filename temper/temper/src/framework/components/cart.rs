use crate::price::format_price;
use crate::{Element, a, div, form, input, label, submit, table, tbody, td, tr};

#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl CartItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Grouped price with two decimals, e.g. `12 500.00`.
pub fn display_amount(amount: f64) -> String {
    format_price(&format!("{amount:.2}"))
}

/// Item rows followed by a `tr.total` row. The empty-cart modal counts the
/// rows that are not the total.
#[derive(Clone, Debug)]
pub struct CartTableBuilder {
    items: Vec<CartItem>,
    total_label: String,
}

impl Default for CartTableBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_label: "Итого".to_string(),
        }
    }
}

impl CartTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(mut self, value: Vec<CartItem>) -> Self {
        self.items = value;
        self
    }

    pub fn total_label(mut self, value: impl Into<String>) -> Self {
        self.total_label = value.into();
        self
    }

    pub fn build(self) -> Element {
        let total = self.items.iter().map(CartItem::total).sum::<f64>();
        let rows = self.items.iter().map(|item| {
            tr().child(td().text(&item.name))
                .child(td().text(&item.quantity.to_string()))
                .child(td().class("price").text(&display_amount(item.price)))
                .child(td().class("price").text(&display_amount(item.total())))
        });

        table().class("cart-table").child(
            tbody().children(rows).child(
                tr().class("total")
                    .child(td().attr("colspan", "3").text(&self.total_label))
                    .child(td().class("price").text(&display_amount(total))),
            ),
        )
    }
}

pub fn checkout_button(href: &str, text: &str) -> Element {
    a().class("checkout").attr("href", href).text(text)
}

#[derive(Clone, Debug)]
pub struct OrderFormBuilder {
    action: String,
    submit_label: String,
}

impl Default for OrderFormBuilder {
    fn default() -> Self {
        Self {
            action: "/order".to_string(),
            submit_label: "Оформить заказ".to_string(),
        }
    }
}

impl OrderFormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, value: impl Into<String>) -> Self {
        self.action = value.into();
        self
    }

    pub fn submit_label(mut self, value: impl Into<String>) -> Self {
        self.submit_label = value.into();
        self
    }

    pub fn build(self) -> Element {
        let field = |name: &str, text: &str, kind: &str| {
            div()
                .class("order-field")
                .child(label().attr("for", name).text(text))
                .child(
                    input()
                        .id(name)
                        .attr("name", name)
                        .attr("type", kind)
                        .attr("required", "required"),
                )
        };

        form()
            .class("order-form")
            .attr("method", "post")
            .attr("action", &self.action)
            .child(field("full_name", "Имя", "text"))
            .child(field("phone", "Телефон", "tel"))
            .child(field("address", "Адрес доставки", "text"))
            .child(submit().text(&self.submit_label))
    }
}
