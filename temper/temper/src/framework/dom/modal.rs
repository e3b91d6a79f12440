use crate::config::ModalConfig;
use crate::framework::dom::{ClassRegion, Query, UiRegion, indent, js_string, when_present};

/// What the shopper does that needs a non-empty cart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModalTrigger {
    /// Clicking the checkout button on the cart page.
    CheckoutClick,
    /// Submitting the order form.
    OrderSubmit,
}

impl ModalTrigger {
    fn event(self) -> &'static str {
        match self {
            ModalTrigger::CheckoutClick => "click",
            ModalTrigger::OrderSubmit => "submit",
        }
    }

    fn selector(self, config: &ModalConfig) -> &str {
        match self {
            ModalTrigger::CheckoutClick => &config.checkout_selector,
            ModalTrigger::OrderSubmit => &config.order_form_selector,
        }
    }
}

pub fn modal_region(config: &ModalConfig) -> ClassRegion {
    ClassRegion::new("modal", &config.show_class)
}

/// Stops the trigger and shows the modal while the cart table has no item
/// rows.
pub fn empty_cart_modal(config: &ModalConfig, trigger: ModalTrigger) -> String {
    let body = format!(
        r#"trigger.addEventListener({event}, (event) => {{
    if (document.querySelectorAll({rows}).length === 0) {{
        event.preventDefault();
{show}
    }}
}});"#,
        event = js_string(trigger.event()),
        rows = js_string(&config.item_rows_selector),
        show = indent(&modal_region(config).show(), 8),
    );

    when_present(
        &[
            Query::selector("trigger", trigger.selector(config)),
            Query::id("modal", &config.modal_id),
        ],
        &body,
    )
}

/// The close button and the overlay dismiss the modal. Bound once per page
/// however many triggers open it.
pub fn modal_dismiss(config: &ModalConfig) -> String {
    let hide = indent(&modal_region(config).hide(), 8);
    let body = format!(
        r#"const closeButton = document.getElementById({close});
if (closeButton) {{
    closeButton.addEventListener("click", () => {{
{hide}
    }});
}}

modal.addEventListener("click", (event) => {{
    if (event.target === modal.querySelector({overlay})) {{
{hide}
    }}
}});"#,
        close = js_string(&config.close_id),
        overlay = js_string(&config.overlay_selector),
    );

    when_present(&[Query::id("modal", &config.modal_id)], &body)
}
