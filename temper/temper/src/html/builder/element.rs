use std::collections::BTreeMap;

const VOID_TAGS: [&str; 5] = ["br", "hr", "img", "input", "meta"];

#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
    text_content: Option<String>,
    raw: bool,
    defer: bool,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text_content: None,
            raw: false,
            defer: false,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn data(self, key: &str, value: &str) -> Self {
        self.attr(&format!("data-{key}"), value)
    }

    pub fn class(mut self, class: &str) -> Self {
        let classes = match self.attributes.get("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.attributes.insert("class".to_string(), classes);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text_content = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn defer(mut self) -> Self {
        self.defer = true;
        self
    }

    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);

        for (key, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", key, html_escape(value)));
        }

        if self.defer {
            html.push_str(" defer");
        }

        html.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return html;
        }

        if let Some(text) = &self.text_content {
            if self.raw {
                // scripts and styles go in verbatim
                html.push_str(text);
            } else {
                html.push_str(&html_escape(text));
            }
        }

        for child in &self.children {
            html.push_str(&child.render());
        }

        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
