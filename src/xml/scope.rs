//! Consume-tracking view over a read-only XML element.
//!
//! The mapping rules must account for every element and attribute in the
//! input document. Instead of physically removing nodes from a mutable tree,
//! an [`ElementScope`] keeps the set of not-yet-consumed element children and
//! attribute names for one element. Taking a child or attribute removes it
//! from the set; [`ElementScope::finish`] fails when anything is left over,
//! naming the XML path so the missing rule is easy to locate.

use roxmltree::{Document, Node};

use crate::error::{HarvestError, Result};

/// Get the tag name without namespace prefix.
fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// One element's consume-tracking scope.
///
/// Children are kept in document order; each `take_*` call removes what it
/// returns. The scope for a taken child is independent of its parent, so
/// entity rules compose top-down and each rule finishes its own scope.
pub struct ElementScope<'a, 'input> {
    node: Node<'a, 'input>,
    path: String,
    remaining: Vec<Node<'a, 'input>>,
    remaining_attrs: Vec<String>,
}

impl<'a, 'input> ElementScope<'a, 'input> {
    /// Open a scope over `node`, addressed by `path` in error messages.
    #[must_use]
    pub fn new(node: Node<'a, 'input>, path: impl Into<String>) -> Self {
        let remaining = node.children().filter(Node::is_element).collect();
        let remaining_attrs = node
            .attributes()
            .map(|attr| attr.name().to_string())
            .collect();
        Self {
            node,
            path: path.into(),
            remaining,
            remaining_attrs,
        }
    }

    /// Open a scope over the document's root element.
    #[must_use]
    pub fn root(doc: &'a Document<'input>) -> Self {
        let root = doc.root_element();
        let path = format!("/{}", tag_name(root));
        Self::new(root, path)
    }

    /// The element's tag name without namespace prefix.
    #[must_use]
    pub fn tag(&self) -> &'a str {
        tag_name(self.node)
    }

    /// The element's XML path, e.g. `/dataset/location[2]/geometry`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The element's own text content, trimmed. Empty text yields `""`.
    #[must_use]
    pub fn text(&self) -> String {
        self.node.text().map(str::trim).unwrap_or_default().to_string()
    }

    /// The element's raw markup as written in the input document.
    #[must_use]
    pub fn raw_xml(&self) -> &'input str {
        let range = self.node.range();
        self.node.document().input_text().get(range).unwrap_or_default()
    }

    /// Take the first remaining child with the given tag, if any.
    pub fn take_child(&mut self, tag: &str) -> Option<ElementScope<'a, 'input>> {
        let index = self
            .remaining
            .iter()
            .position(|child| tag_name(*child) == tag)?;
        let child = self.remaining.remove(index);
        Some(ElementScope::new(child, format!("{}/{}", self.path, tag)))
    }

    /// Take all remaining children with the given tag, in document order.
    ///
    /// This is the array-building primitive: repeated singular XML elements
    /// become one plural record field.
    pub fn take_children(&mut self, tag: &str) -> Vec<ElementScope<'a, 'input>> {
        let mut taken = Vec::new();
        let mut index = 0;
        while index < self.remaining.len() {
            if tag_name(self.remaining[index]) == tag {
                let child = self.remaining.remove(index);
                let path = format!("{}/{}[{}]", self.path, tag, taken.len() + 1);
                taken.push(ElementScope::new(child, path));
            } else {
                index += 1;
            }
        }
        taken
    }

    /// Take the first remaining child regardless of its tag.
    ///
    /// Used for passthrough content such as embedded GML geometry, where the
    /// whole subtree is captured raw rather than walked.
    pub fn take_any_child(&mut self) -> Option<ElementScope<'a, 'input>> {
        if self.remaining.is_empty() {
            return None;
        }
        let child = self.remaining.remove(0);
        let tag = tag_name(child);
        Some(ElementScope::new(child, format!("{}/{}", self.path, tag)))
    }

    /// Take an attribute by local name (so `xml:lang` matches `"lang"`).
    pub fn take_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.remaining_attrs.iter().position(|attr| attr == name)?;
        self.remaining_attrs.remove(index);
        self.node
            .attributes()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value().to_string())
    }

    /// Take a child element and return its trimmed text content.
    ///
    /// Returns `None` when the child is absent and `Some("")` when it is
    /// present but empty; an explicitly empty element is meaningful input.
    ///
    /// # Errors
    /// Fails when the child carries unconsumed elements or attributes.
    pub fn take_child_text(&mut self, tag: &str) -> Result<Option<String>> {
        match self.take_child(tag) {
            Some(child) => {
                let text = child.text();
                child.finish()?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }

    /// Take all children with the given tag and return their text contents.
    ///
    /// # Errors
    /// Fails when any child carries unconsumed elements or attributes.
    pub fn take_children_texts(&mut self, tag: &str) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for child in self.take_children(tag) {
            let text = child.text();
            child.finish()?;
            texts.push(text);
        }
        Ok(texts)
    }

    /// Assert that every element child and attribute has been consumed.
    ///
    /// # Errors
    /// [`HarvestError::UnconsumedContent`] listing the leftover tags and
    /// attributes together with this element's path.
    pub fn finish(self) -> Result<()> {
        if self.remaining.is_empty() && self.remaining_attrs.is_empty() {
            return Ok(());
        }
        let mut leftover: Vec<String> = self
            .remaining
            .iter()
            .map(|child| format!("<{}>", tag_name(*child)))
            .collect();
        leftover.extend(self.remaining_attrs.iter().map(|attr| format!("@{attr}")));
        Err(HarvestError::UnconsumedContent {
            path: self.path,
            leftover: leftover.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_child_consumes() {
        let doc = Document::parse("<root><a/><b/></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        assert!(scope.take_child("a").is_some());
        assert!(scope.take_child("a").is_none());
        assert!(scope.take_child("b").is_some());
        scope.finish().unwrap();
    }

    #[test]
    fn test_take_children_preserves_document_order() {
        let doc =
            Document::parse("<root><item>1</item><other/><item>2</item><item>3</item></root>")
                .unwrap();
        let mut scope = ElementScope::root(&doc);

        let items = scope.take_children("item");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].text(), "1");
        assert_eq!(items[1].text(), "2");
        assert_eq!(items[2].text(), "3");
        assert_eq!(items[2].path(), "/root/item[3]");
    }

    #[test]
    fn test_take_children_single_element() {
        let doc = Document::parse("<root><item>only</item></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        let items = scope.take_children("item");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text(), "only");
        scope.finish().unwrap();
    }

    #[test]
    fn test_take_children_absent_is_empty() {
        let doc = Document::parse("<root/>").unwrap();
        let mut scope = ElementScope::root(&doc);
        assert!(scope.take_children("item").is_empty());
        scope.finish().unwrap();
    }

    #[test]
    fn test_finish_reports_leftover_element_with_path() {
        let doc = Document::parse("<root><known/><surprise/></root>").unwrap();
        let mut scope = ElementScope::root(&doc);
        scope.take_child("known").unwrap().finish().unwrap();

        let err = scope.finish().unwrap_err();
        match err {
            HarvestError::UnconsumedContent { path, leftover } => {
                assert_eq!(path, "/root");
                assert_eq!(leftover, "<surprise>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_finish_reports_leftover_attribute() {
        let doc = Document::parse(r#"<root marker="x"/>"#).unwrap();
        let scope = ElementScope::root(&doc);

        let err = scope.finish().unwrap_err();
        assert!(err.to_string().contains("@marker"));
    }

    #[test]
    fn test_take_attribute_matches_local_name() {
        let doc = Document::parse(r#"<root xml:lang="en">text</root>"#).unwrap();
        let mut scope = ElementScope::root(&doc);

        assert_eq!(scope.take_attribute("lang"), Some("en".to_string()));
        assert_eq!(scope.take_attribute("lang"), None);
        scope.finish().unwrap();
    }

    #[test]
    fn test_take_child_text_empty_element() {
        let doc = Document::parse("<root><iri></iri></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        assert_eq!(scope.take_child_text("iri").unwrap(), Some(String::new()));
        assert_eq!(scope.take_child_text("iri").unwrap(), None);
        scope.finish().unwrap();
    }

    #[test]
    fn test_take_child_text_trims() {
        let doc = Document::parse("<root><title>  spaced out  </title></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        assert_eq!(
            scope.take_child_text("title").unwrap(),
            Some("spaced out".to_string())
        );
        scope.finish().unwrap();
    }

    #[test]
    fn test_raw_xml_returns_markup() {
        let doc =
            Document::parse("<root><geom srs=\"x\"><inner>1 2</inner></geom></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        let geom = scope.take_child("geom").unwrap();
        assert_eq!(geom.raw_xml(), "<geom srs=\"x\"><inner>1 2</inner></geom>");
    }

    #[test]
    fn test_take_any_child() {
        let doc = Document::parse("<root><first/><second/></root>").unwrap();
        let mut scope = ElementScope::root(&doc);

        let first = scope.take_any_child().unwrap();
        assert_eq!(first.tag(), "first");
        let second = scope.take_any_child().unwrap();
        assert_eq!(second.tag(), "second");
        assert!(scope.take_any_child().is_none());
        scope.finish().unwrap();
    }

    #[test]
    fn test_tag_name_ignores_namespace() {
        let doc =
            Document::parse(r#"<ns:root xmlns:ns="https://example.com"><ns:child/></ns:root>"#)
                .unwrap();
        let mut scope = ElementScope::root(&doc);
        assert_eq!(scope.tag(), "root");
        assert!(scope.take_child("child").is_some());
        scope.finish().unwrap();
    }
}
