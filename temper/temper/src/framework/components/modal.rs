use crate::{Element, button, div, h3, p};

#[derive(Clone, Debug)]
pub struct EmptyCartModalBuilder {
    title: String,
    message: String,
    close_label: String,
}

impl Default for EmptyCartModalBuilder {
    fn default() -> Self {
        Self {
            title: "Корзина пуста".to_string(),
            message: "Добавьте товары в корзину, чтобы оформить заказ.".to_string(),
            close_label: "Закрыть".to_string(),
        }
    }
}

impl EmptyCartModalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.message = value.into();
        self
    }

    pub fn close_label(mut self, value: impl Into<String>) -> Self {
        self.close_label = value.into();
        self
    }

    pub fn build(self) -> Element {
        div()
            .id("empty-cart-modal")
            .class("modal")
            .child(div().class("modal-overlay"))
            .child(
                div()
                    .class("modal-content")
                    .child(h3().text(&self.title))
                    .child(p().text(&self.message))
                    .child(button().id("close-modal").text(&self.close_label)),
            )
    }
}
