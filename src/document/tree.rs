//! Owned, read-only element tree.
//!
//! The Lattes dialect carries every leaf value as an attribute, so the tree
//! keeps element names, ordered attributes and ordered element children and
//! drops text nodes entirely.

/// Shared empty element returned when navigation walks off the tree.
static EMPTY: Element = Element {
    name: String::new(),
    attributes: Vec::new(),
    children: Vec::new(),
};

/// A single XML element with its attributes and element children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, or `""` when the attribute is absent.
    pub fn attr(&self, name: &str) -> &str {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Element children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child with the given tag name, or a shared empty element.
    ///
    /// Reading attributes off the empty element yields `""`, which lets
    /// extractors read optional sub-blocks without branching.
    pub fn child_or_empty(&self, name: &str) -> &Element {
        self.child(name).unwrap_or(&EMPTY)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a chain of first-match child names.
    pub fn path(&self, names: &[&str]) -> Option<&Element> {
        names.iter().try_fold(self, |el, name| el.child(name))
    }

    /// First child satisfying a predicate.
    pub fn find_child(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.children.iter().find(|c| pred(c))
    }

    /// Whether this is the shared empty placeholder (or an equally empty node).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.attributes.is_empty() && self.children.is_empty()
    }
}

impl From<roxmltree::Node<'_, '_>> for Element {
    fn from(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
            children: node
                .children()
                .filter(|n| n.is_element())
                .map(Element::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("CURRICULO-VITAE").with_child(
            Element::new("DADOS-GERAIS")
                .with_attr("NOME-COMPLETO", "Maria Silva")
                .with_child(Element::new("IDIOMAS").with_child(
                    Element::new("IDIOMA").with_attr("DESCRICAO-DO-IDIOMA", "Inglês"),
                )),
        )
    }

    #[test]
    fn missing_attribute_reads_empty() {
        let root = sample();
        let dados = root.child("DADOS-GERAIS").unwrap();
        assert_eq!(dados.attr("NOME-COMPLETO"), "Maria Silva");
        assert_eq!(dados.attr("NOME-EM-CITACOES-BIBLIOGRAFICAS"), "");
    }

    #[test]
    fn path_walks_and_stops_on_gap() {
        let root = sample();
        assert!(root.path(&["DADOS-GERAIS", "IDIOMAS", "IDIOMA"]).is_some());
        assert!(root.path(&["DADOS-GERAIS", "AREAS-DE-ATUACAO"]).is_none());
    }

    #[test]
    fn child_or_empty_yields_blank_attributes() {
        let root = sample();
        let missing = root.child_or_empty("PRODUCAO-TECNICA");
        assert!(missing.is_empty());
        assert_eq!(missing.attr("ANY"), "");
        assert_eq!(missing.child_or_empty("DEEPER").attr("X"), "");
    }

    #[test]
    fn converts_from_roxmltree_dropping_text() {
        let xml = r#"<A X="1"> text <B Y="2"/><!-- c --><B Y="3"/></A>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let el = Element::from(doc.root_element());
        assert_eq!(el.name(), "A");
        assert_eq!(el.attr("X"), "1");
        let ys: Vec<_> = el.children_named("B").map(|b| b.attr("Y")).collect();
        assert_eq!(ys, vec!["2", "3"]);
    }
}
