//! HTML serialization (AdaptationSet → accessible page)
//!
//! Pipeline: AdaptationSet → RcDom → HTML fragments → complete page with embedded CSS

use crate::error::ExportError;
use crate::style::ExportStyle;
use eduadapt_core::adapt::generating::easy_read::BLOCK_SEPARATOR;
use eduadapt_core::AdaptationSet;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Heading of the easy-read section.
pub const EASY_READ_HEADING: &str = "Lectura fácil";
/// Title used when the source has none.
pub const UNTITLED: &str = "Material adaptado";

/// Serialize an adaptation set to a self-contained HTML page
pub fn serialize_to_html(set: &AdaptationSet, style: &ExportStyle) -> Result<String, ExportError> {
    let title = display_title(set);

    // Step 1: AdaptationSet → RcDom
    let dom = build_html_dom(set, title);

    // Step 2: RcDom → HTML fragments
    let body_html = serialize_dom(&dom)?;
    let title_html = serialize_node(&text_element("title", title, vec![]))?;

    // Step 3: Wrap in complete HTML document with CSS
    Ok(wrap_in_document(&title_html, &body_html, style))
}

fn display_title(set: &AdaptationSet) -> &str {
    let title = set.title().trim();
    if title.is_empty() {
        UNTITLED
    } else {
        title
    }
}

/// Build the page body: title, one paragraph per non-blank line, then the easy-read section
fn build_html_dom(set: &AdaptationSet, title: &str) -> RcDom {
    let dom = RcDom::default();

    let main = create_element("main", vec![("class", "eduadapt-document")]);
    append(&main, text_element("h1", title, vec![]));

    for line in set
        .base_text()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        append(&main, text_element("p", line, vec![]));
    }

    let section = create_element(
        "section",
        vec![("class", "easy-read"), ("aria-label", EASY_READ_HEADING)],
    );
    append(&section, text_element("h2", EASY_READ_HEADING, vec![]));
    for block in set
        .easy_read_text()
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
    {
        append(
            &section,
            text_element("p", block, vec![("class", "easy-read-block")]),
        );
    }
    append(&main, section);

    dom.document.children.borrow_mut().push(main);
    dom
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an element holding a single text node
fn text_element(tag: &str, text: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, create_text(text));
    element
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (the container element and everything below it)
fn serialize_dom(dom: &RcDom) -> Result<String, ExportError> {
    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| ExportError::Serialization("Empty document".to_string()))?
        .clone();
    serialize_node(&container)
}

fn serialize_node(node: &Handle) -> Result<String, ExportError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| ExportError::Serialization(format!("HTML serialization failed: {}", e)))?;

    String::from_utf8(output)
        .map_err(|e| ExportError::Serialization(format!("UTF-8 conversion failed: {}", e)))
}

fn stylesheet(style: &ExportStyle) -> String {
    format!(
        r#"    body {{
      font-family: {font};
      font-size: {size}px;
      line-height: {line_height};
      background: {background};
      color: {foreground};
      padding: 20px;
      max-width: 900px;
      margin: auto;
    }}
    p {{ margin-bottom: 1.4rem; }}
    .easy-read {{ margin-top: 2.5rem; padding-top: 1rem; border-top: 2px solid currentColor; }}
    .easy-read-block {{ margin-bottom: 1.8rem; }}"#,
        font = style.html_font_stack,
        size = style.html_font_px,
        line_height = style.html_line_height,
        background = style.html_background,
        foreground = style.html_foreground,
    )
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(title_html: &str, body_html: &str, style: &ExportStyle) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="eduadapt-export">
  {}
  <style>
{}
  </style>
</head>
<body>
{}
</body>
</html>"#,
        title_html,
        stylesheet(style),
        body_html
    )
}
