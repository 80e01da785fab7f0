use std::collections::HashSet;

use roxmltree::{Node, NodeId};

pub const SUITE_TAG: &str = "testsuite";
pub const SUITES_TAG: &str = "testsuites";
pub const CASE_TAG: &str = "testcase";

pub fn is_element_named(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

/// Every element named `local_name` strictly below `root`, in document order.
pub fn find_descendants<'a, 'input>(
    root: Node<'a, 'input>,
    local_name: &str,
) -> Vec<Node<'a, 'input>> {
    root.descendants()
        .skip(1)
        .filter(|node| is_element_named(*node, local_name))
        .collect()
}

pub fn find_children<'a, 'input>(
    parent: Node<'a, 'input>,
    local_name: &str,
) -> Vec<Node<'a, 'input>> {
    parent
        .children()
        .filter(|node| is_element_named(*node, local_name))
        .collect()
}

pub fn first_child<'a, 'input>(
    parent: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    parent
        .children()
        .find(|node| is_element_named(*node, local_name))
}

/// Concatenates node lists keeping the first occurrence of each node.
pub fn dedup_nodes<'a, 'input>(
    groups: impl IntoIterator<Item = Vec<Node<'a, 'input>>>,
) -> Vec<Node<'a, 'input>> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    groups
        .into_iter()
        .flatten()
        .filter(|node| seen.insert(node.id()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootShape {
    SingleSuite,
    SuiteCollection,
    Foreign,
}

pub fn classify_root(root: Node<'_, '_>) -> RootShape {
    if is_element_named(root, SUITE_TAG) {
        return RootShape::SingleSuite;
    }
    if is_element_named(root, SUITES_TAG) {
        return RootShape::SuiteCollection;
    }
    RootShape::Foreign
}

/// Suite elements for a document root; empty only for a foreign root with no suites.
pub fn collect_suites<'a, 'input>(root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    match classify_root(root) {
        RootShape::SingleSuite => vec![root],
        RootShape::SuiteCollection => dedup_nodes([
            find_children(root, SUITE_TAG),
            find_descendants(root, SUITE_TAG),
        ]),
        RootShape::Foreign => find_descendants(root, SUITE_TAG),
    }
}
