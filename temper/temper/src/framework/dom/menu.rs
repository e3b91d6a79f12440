use crate::config::MenuConfig;
use crate::framework::dom::{
    ClassRegion, ExpandedRegion, Query, RegionGroup, UiRegion, indent, js_string, when_present,
};

pub fn menu_region(config: &MenuConfig) -> RegionGroup {
    RegionGroup::new()
        .with(ClassRegion::new("menu", &config.open_class))
        .with(ClassRegion::new("icon", &config.open_class))
        .with(ExpandedRegion::new("icon"))
}

/// Icon click flips the menu; a click on a link or outside the menu content
/// closes it.
pub fn menu_toggle(config: &MenuConfig) -> String {
    let region = menu_region(config);
    let body = format!(
        r#"const content = menu.querySelector({content});

icon.addEventListener("click", () => {{
{toggle}
}});

menu.addEventListener("click", (event) => {{
    if (!content || !content.contains(event.target) || event.target.closest("a")) {{
{hide}
    }}
}});"#,
        content = js_string(&config.content_selector),
        toggle = indent(&region.toggle(), 4),
        hide = indent(&region.hide(), 8),
    );

    when_present(
        &[
            Query::selector("icon", &config.icon_selector),
            Query::selector("menu", &config.menu_selector),
        ],
        &body,
    )
}
