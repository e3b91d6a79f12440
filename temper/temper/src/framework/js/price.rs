/// Browser copy of [`crate::price::clean_price_value`],
/// [`crate::price::format_price`] and [`crate::price::cursor::format_edit`].
pub fn price_js() -> String {
    r#"// ---- Price Normalization ----

function cleanPricePass(value) {
    let out = value.replace(/[^0-9.,]/g, "");
    // separator + exactly three digits = thousands grouping
    out = out.replace(/[.,]([0-9]{3})(?![0-9])/g, "$1");
    out = out.replace(/,/g, ".");
    const point = out.indexOf(".");
    if (point !== -1) {
        out = out.slice(0, point + 1) + out.slice(point + 1).replace(/\./g, "");
    }
    return out;
}

function cleanPriceValue(raw) {
    let current = cleanPricePass(String(raw ?? ""));
    for (;;) {
        const next = cleanPricePass(current);
        if (next === current) return current;
        current = next;
    }
}

function groupThousands(digits) {
    return digits.replace(/\B(?=([0-9]{3})+(?![0-9]))/g, " ");
}

function formatPrice(raw) {
    if (!raw) return "";
    const cleaned = cleanPriceValue(raw);
    const point = cleaned.indexOf(".");
    if (point === -1) return groupThousands(cleaned);
    return `${groupThousands(cleaned.slice(0, point))}.${cleaned.slice(point + 1)}`;
}

function formatPriceEdit(value, cursor) {
    const formatted = formatPrice(value);
    const next = cursor + formatted.length - value.length;
    return { value: formatted, cursor: Math.min(formatted.length, Math.max(0, next)) };
}

window.cleanPriceValue = cleanPriceValue;
window.formatPrice = formatPrice;
window.formatPriceEdit = formatPriceEdit;"#
        .to_string()
}
