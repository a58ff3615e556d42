//! HTML to readable text

use scraper::{Html, Node};

/// Subtrees never rendered as text
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "noscript", "svg", "template"];

/// Visible text of an HTML document, whitespace collapsed to single spaces.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => SKIPPED_TAGS.contains(&element.name()),
            _ => false,
        });
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}
