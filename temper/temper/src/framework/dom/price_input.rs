use crate::config::PriceConfig;
use crate::framework::dom::js_string;

/// Reformats bound inputs on every keystroke, keeping the caret next to the
/// digit just typed, and submits them as plain decimals.
///
/// Relies on `formatPriceEdit` and `cleanPriceValue` from [`crate::js::price`].
pub fn price_inputs(config: &PriceConfig) -> String {
    let selector = js_string(&config.input_selector);
    format!(
        r#"{{
    const priceInputs = document.querySelectorAll({selector});

    priceInputs.forEach(input => {{
        input.addEventListener("input", () => {{
            const edit = formatPriceEdit(input.value, input.selectionStart ?? input.value.length);
            input.value = edit.value;
            input.setSelectionRange(edit.cursor, edit.cursor);
        }});
    }});

    const priceForms = new Set();
    priceInputs.forEach(input => {{
        if (input.form) priceForms.add(input.form);
    }});
    priceForms.forEach(form => {{
        form.addEventListener("submit", () => {{
            form.querySelectorAll({selector}).forEach(input => {{
                input.value = cleanPriceValue(input.value);
            }});
        }});
    }});
}}"#
    )
}
