use crate::framework::dom::js_string;

/// A part of the page that can be shown, hidden or flipped.
///
/// Each action yields a JavaScript statement operating on an element (or node
/// list) already bound to a variable by the surrounding script.
pub trait UiRegion {
    fn show(&self) -> String;
    fn hide(&self) -> String;
    fn toggle(&self) -> String;
}

/// Visibility expressed through a class on the element.
#[derive(Clone, Debug)]
pub struct ClassRegion {
    target: String,
    class: String,
}

impl ClassRegion {
    pub fn new(target: &str, class: &str) -> Self {
        Self {
            target: target.to_string(),
            class: class.to_string(),
        }
    }
}

impl UiRegion for ClassRegion {
    fn show(&self) -> String {
        format!("{}.classList.add({});", self.target, js_string(&self.class))
    }

    fn hide(&self) -> String {
        format!("{}.classList.remove({});", self.target, js_string(&self.class))
    }

    fn toggle(&self) -> String {
        format!("{}.classList.toggle({});", self.target, js_string(&self.class))
    }
}

/// Visibility expressed through inline `style.display` on every node of a list.
#[derive(Clone, Debug)]
pub struct DisplayRegion {
    items: String,
    display: String,
}

impl DisplayRegion {
    pub fn new(items: &str, display: &str) -> Self {
        Self {
            items: items.to_string(),
            display: display.to_string(),
        }
    }
}

impl UiRegion for DisplayRegion {
    fn show(&self) -> String {
        format!(
            "{}.forEach(item => item.style.display = {});",
            self.items,
            js_string(&self.display)
        )
    }

    fn hide(&self) -> String {
        format!("{}.forEach(item => item.style.display = \"none\");", self.items)
    }

    fn toggle(&self) -> String {
        format!(
            "{}.forEach(item => item.style.display = getComputedStyle(item).display === \"none\" ? {} : \"none\");",
            self.items,
            js_string(&self.display)
        )
    }
}

/// `aria-expanded` on the element controlling a collapsible region.
#[derive(Clone, Debug)]
pub struct ExpandedRegion {
    target: String,
}

impl ExpandedRegion {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

impl UiRegion for ExpandedRegion {
    fn show(&self) -> String {
        format!("{}.setAttribute(\"aria-expanded\", \"true\");", self.target)
    }

    fn hide(&self) -> String {
        format!("{}.setAttribute(\"aria-expanded\", \"false\");", self.target)
    }

    fn toggle(&self) -> String {
        format!(
            "{0}.setAttribute(\"aria-expanded\", String({0}.getAttribute(\"aria-expanded\") !== \"true\"));",
            self.target
        )
    }
}

#[derive(Default)]
pub struct RegionGroup {
    regions: Vec<Box<dyn UiRegion>>,
}

impl RegionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, region: impl UiRegion + 'static) -> Self {
        self.regions.push(Box::new(region));
        self
    }

    fn each(&self, action: impl Fn(&dyn UiRegion) -> String) -> String {
        self.regions
            .iter()
            .map(|region| action(region.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl UiRegion for RegionGroup {
    fn show(&self) -> String {
        self.each(|region| region.show())
    }

    fn hide(&self) -> String {
        self.each(|region| region.hide())
    }

    fn toggle(&self) -> String {
        self.each(|region| region.toggle())
    }
}
