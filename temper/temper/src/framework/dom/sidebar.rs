use crate::config::SidebarConfig;
use crate::framework::dom::{ClassRegion, DisplayRegion, UiRegion, indent, js_string};

pub const TOGGLE_LIST_FN: &str = "toggleList";
/// Data attribute naming the list a toggle button controls.
pub const TOGGLE_LIST_ATTR: &str = "toggle-list";

/// The one `toggleList(listId, btn)` definition, also exposed on `window`
/// for markup that still calls it inline.
pub fn toggle_list_fn(config: &SidebarConfig) -> String {
    let items = DisplayRegion::new("hiddenItems", &config.item_display);
    let button = ClassRegion::new("btn", &config.expanded_class);
    let show_all = js_string(&config.show_all_label);
    let hide_label = js_string(&config.hide_label);

    format!(
        r#"function {TOGGLE_LIST_FN}(listId, btn) {{
    const list = document.getElementById(listId);
    if (!list || !btn) return;
    const hiddenItems = list.querySelectorAll({hidden});

    if (btn.classList.contains({expanded})) {{
{hide_items}
        btn.textContent = btn.textContent.replace({hide_label}, {show_all});
{collapse}
    }} else {{
{show_items}
        btn.textContent = btn.textContent.replace({show_all}, {hide_label});
{expand}
    }}
}}

window.{TOGGLE_LIST_FN} = {TOGGLE_LIST_FN};"#,
        hidden = js_string(&format!(".{}", config.hidden_item_class)),
        expanded = js_string(&config.expanded_class),
        hide_items = indent(&items.hide(), 8),
        show_items = indent(&items.show(), 8),
        collapse = indent(&button.hide(), 8),
        expand = indent(&button.show(), 8),
    )
}

/// Binds every button carrying `data-toggle-list` to the list it names.
pub fn bind_toggle_buttons() -> String {
    format!(
        r#"document.querySelectorAll("[data-{TOGGLE_LIST_ATTR}]").forEach(btn => {{
    btn.addEventListener("click", () => {TOGGLE_LIST_FN}(btn.dataset.toggleList, btn));
}});"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_list_is_defined_once() {
        let js = toggle_list_fn(&SidebarConfig::default());
        assert_eq!(js.matches("function toggleList(").count(), 1);
        assert!(js.contains("window.toggleList = toggleList;"));
    }

    #[test]
    fn toggle_list_swaps_labels_and_visibility() {
        let js = toggle_list_fn(&SidebarConfig::default());
        assert!(js.contains("list.querySelectorAll(\".hidden-item\")"));
        assert!(js.contains("btn.classList.contains(\"expanded\")"));
        assert!(js.contains("btn.textContent.replace(\"Скрыть\", \"Показать все\")"));
        assert!(js.contains("btn.textContent.replace(\"Показать все\", \"Скрыть\")"));
        assert!(js.contains("item.style.display = \"none\""));
        assert!(js.contains("item.style.display = \"list-item\""));
        assert!(js.contains("btn.classList.remove(\"expanded\");"));
        assert!(js.contains("btn.classList.add(\"expanded\");"));
    }

    #[test]
    fn toggle_buttons_use_data_attribute() {
        let js = bind_toggle_buttons();
        assert!(js.contains("document.querySelectorAll(\"[data-toggle-list]\")"));
        assert!(js.contains("toggleList(btn.dataset.toggleList, btn)"));
    }
}
