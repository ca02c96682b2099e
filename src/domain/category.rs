use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Node of the marketplace category tree.
///
/// Children are owned by their parent, so a forest is simply a
/// `Vec<CategoryNode>` of roots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: CategoryName,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node.
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self {
            id,
            name,
            children: Vec::new(),
        }
    }

    /// Attach children to the node.
    pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> CategoryIter<'_> {
        CategoryIter { stack: vec![self] }
    }
}

/// Pre-order iterator over one or more category trees.
///
/// Roots and children are visited left to right.
pub struct CategoryIter<'a> {
    stack: Vec<&'a CategoryNode>,
}

impl<'a> Iterator for CategoryIter<'a> {
    type Item = &'a CategoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Iterate every node of `forest` in root-list, pre-order, left-to-right order.
pub fn walk_forest(forest: &[CategoryNode]) -> CategoryIter<'_> {
    CategoryIter {
        stack: forest.iter().rev().collect(),
    }
}

/// Find the first node whose id equals `id`.
///
/// Duplicate ids are not expected; if present, the first one reached in
/// traversal order is returned.
pub fn find_category<'a>(forest: &'a [CategoryNode], id: &str) -> Option<&'a CategoryNode> {
    walk_forest(forest).find(|node| node.id.as_str() == id)
}

/// Chain of nodes from a root down to the node with `id`, inclusive.
pub fn category_path<'a>(forest: &'a [CategoryNode], id: &str) -> Option<Vec<&'a CategoryNode>> {
    fn descend<'a>(
        node: &'a CategoryNode,
        id: &str,
        path: &mut Vec<&'a CategoryNode>,
    ) -> bool {
        path.push(node);
        if node.id.as_str() == id {
            return true;
        }
        for child in &node.children {
            if descend(child, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    let found = forest.iter().any(|root| descend(root, id, &mut path));
    found.then_some(path)
}

/// Nodes whose name contains `term`, ignoring case, in traversal order.
pub fn search_categories<'a>(forest: &'a [CategoryNode], term: &str) -> Vec<&'a CategoryNode> {
    search_category_paths(forest, term)
        .into_iter()
        .filter_map(|path| path.last().copied())
        .collect()
}

/// Breadcrumb paths of every node whose name contains `term`, ignoring case.
///
/// Each path ends at the matching node itself, so duplicate ids still get
/// their own breadcrumbs. The forest is walked once.
pub fn search_category_paths<'a>(
    forest: &'a [CategoryNode],
    term: &str,
) -> Vec<Vec<&'a CategoryNode>> {
    fn collect<'a>(
        node: &'a CategoryNode,
        needle: &str,
        path: &mut Vec<&'a CategoryNode>,
        hits: &mut Vec<Vec<&'a CategoryNode>>,
    ) {
        path.push(node);
        if node.name.to_lowercase().contains(needle) {
            hits.push(path.clone());
        }
        for child in &node.children {
            collect(child, needle, path, hits);
        }
        path.pop();
    }

    let needle = term.trim().to_lowercase();
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }
    let mut path = Vec::new();
    for root in forest {
        collect(root, &needle, &mut path, &mut hits);
    }
    hits
}
