//! Namespace-aware element lookups over the MPD tree
//!
//! Lookups follow ElementTree path semantics: `children` is `dash:X`,
//! `descendants` is `.//dash:X` (the starting node itself never matches),
//! and the `_unqualified` variants match elements carrying no namespace.

use roxmltree::Node;

use super::MpdNamespace;

/// Read-only view of a parsed MPD handed to every extractor
#[derive(Debug, Clone, Copy)]
pub struct MpdTree<'a, 'input> {
    root: Node<'a, 'input>,
    ns: &'a MpdNamespace,
}

impl<'a, 'input: 'a> MpdTree<'a, 'input> {
    pub fn new(doc: &'a roxmltree::Document<'input>, ns: &'a MpdNamespace) -> Self {
        Self {
            root: doc.root_element(),
            ns,
        }
    }

    /// The `<MPD>` element
    pub fn root(&self) -> Node<'a, 'input> {
        self.root
    }

    pub fn namespace(&self) -> &'a MpdNamespace {
        self.ns
    }

    fn is_qualified(&self, node: &Node, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == Some(self.ns.uri.as_str())
    }

    fn is_unqualified(node: &Node, name: &str) -> bool {
        node.is_element() && node.tag_name().name() == name && node.tag_name().namespace().is_none()
    }

    /// Direct children named `name` in the DASH namespace
    pub fn children(
        self,
        node: Node<'a, 'input>,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> {
        node.children().filter(move |n| self.is_qualified(n, name))
    }

    /// Direct children named `name` without any namespace
    pub fn children_unqualified(
        self,
        node: Node<'a, 'input>,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> {
        node.children().filter(move |n| Self::is_unqualified(n, name))
    }

    /// Strict descendants named `name` in the DASH namespace, in document order
    pub fn descendants(
        self,
        node: Node<'a, 'input>,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> {
        node.descendants()
            .skip(1)
            .filter(move |n| self.is_qualified(n, name))
    }

    /// Strict descendants named `name` without any namespace
    pub fn descendants_unqualified(
        self,
        node: Node<'a, 'input>,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> {
        node.descendants()
            .skip(1)
            .filter(move |n| Self::is_unqualified(n, name))
    }

    /// `.//dash:AdaptationSet[@contentType='…']` below `node`
    ///
    /// Adaptation sets without a `contentType` attribute never match.
    pub fn adaptation_sets_of_type(
        self,
        node: Node<'a, 'input>,
        content_type: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> {
        self.descendants(node, "AdaptationSet")
            .filter(move |n| n.attribute("contentType") == Some(content_type))
    }

    /// All `dash:Period` children of the root, in document order
    pub fn periods(self) -> impl Iterator<Item = Node<'a, 'input>> {
        self.children(self.root, "Period")
    }

    /// Whether `node` has a ContentProtection child, with or without namespace
    pub fn has_content_protection(self, node: Node<'a, 'input>) -> bool {
        self.children(node, "ContentProtection").next().is_some()
            || self
                .children_unqualified(node, "ContentProtection")
                .next()
                .is_some()
    }
}

/// Parse an optional unsigned integer attribute
///
/// Present-but-invalid values are treated as absent.
pub fn attribute_u64(node: &Node, name: &str) -> Option<u64> {
    let raw = node.attribute(name)?;
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::debug!(
                "Ignoring non-integer {}=\"{}\" on <{}>",
                name,
                raw,
                node.tag_name().name()
            );
            None
        }
    }
}
