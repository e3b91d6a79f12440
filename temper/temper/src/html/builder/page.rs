use crate::Element;
use anyhow::{Context, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const VOID_TAGS: [&str; 5] = ["br", "hr", "img", "input", "meta"];
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

#[derive(Clone, Debug, Default)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }

    pub fn stylesheet(href: &str) -> Self {
        Self::new("stylesheet", href)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Script {
    pub src: String,
}

impl Script {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageBuilder {
    title: String,
    lang: Option<String>,
    links: Vec<Link>,
    scripts: Vec<Script>,
    content: Option<Element>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = value.into();
        self
    }

    pub fn lang(mut self, value: impl Into<String>) -> Self {
        self.lang = Some(value.into());
        self
    }

    pub fn links(mut self, value: Vec<Link>) -> Self {
        self.links = value;
        self
    }

    pub fn scripts(mut self, value: Vec<Script>) -> Self {
        self.scripts = value;
        self
    }

    pub fn content(mut self, value: Element) -> Self {
        self.content = Some(value);
        self
    }

    pub fn build(self) -> Result<String> {
        let links = self
            .links
            .into_iter()
            .map(|link| format!("<link rel=\"{}\" href=\"{}\">", link.rel, link.href))
            .collect::<Vec<_>>()
            .join("\n");
        let scripts = self
            .scripts
            .into_iter()
            .map(|script| format!("<script src=\"{}\" defer></script>", script.src))
            .collect::<Vec<_>>()
            .join("\n");
        let lang = self.lang.unwrap_or_else(|| "ru".to_string());
        let body = self
            .content
            .map(|content| content.render())
            .unwrap_or_default();

        let html_string = format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
    <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        {links}
        {scripts}
        <title>{}</title>
    </head>
    <body>{body}</body>
</html>"#,
            crate::html_escape(&self.title),
        );

        pretty_print_html(&html_string)
    }
}

fn pretty_html_string(node: &Handle, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match &node.data {
        NodeData::Document => node
            .children
            .borrow()
            .iter()
            .map(|child| pretty_html_string(child, indent))
            .collect(),
        NodeData::Doctype { name, .. } => format!("<!DOCTYPE {name}>\n"),
        NodeData::Text { contents } => {
            let contents_ref = contents.borrow();
            let text = contents_ref.trim();
            if text.is_empty() {
                String::new()
            } else {
                format!("{pad}{}\n", crate::html_escape(text))
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.as_ref();
            let attrs_string: String = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    format!(
                        " {}=\"{}\"",
                        attr.name.local,
                        crate::html_escape(&attr.value)
                    )
                })
                .collect();

            let mut s = format!("{pad}<{tag}{attrs_string}>\n");
            if VOID_TAGS.contains(&tag) {
                return s;
            }

            if RAW_TEXT_TAGS.contains(&tag) {
                for child in node.children.borrow().iter() {
                    if let NodeData::Text { contents } = &child.data {
                        s.push_str(contents.borrow().trim());
                        s.push('\n');
                    }
                }
            } else {
                for child in node.children.borrow().iter() {
                    s.push_str(&pretty_html_string(child, indent + 4));
                }
            }

            s.push_str(&format!("{pad}</{tag}>\n"));
            s
        }
        _ => String::new(),
    }
}

pub fn pretty_print_html(html_string: &str) -> Result<String> {
    let dom: RcDom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html_string.as_bytes())
        .context("failed to parse rendered page")?;

    Ok(pretty_html_string(&dom.document, 0))
}
