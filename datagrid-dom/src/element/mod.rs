mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every descendant of `root` (excluding `root` itself), depth-first
/// in document order.
pub fn descendants(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect_descendants(root, &mut out);
    out
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    if let Content::Children(children) = &element.content {
        for child in children {
            out.push(child);
            collect_descendants(child, out);
        }
    }
}
