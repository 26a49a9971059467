//! Lightweight document model standing in for the live DOM
//!
//! The reconciler and prober operate on this tree. In the shipped extension
//! the same operations map 1:1 onto real DOM calls; here they are plain data
//! so every heuristic stays testable outside a browser.

use crate::classifier::hostname_of;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// One element in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first lookup by id, including this element itself.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.has_id(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Remove every descendant carrying the given id. Returns true if
    /// anything was removed.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.children.len();
        self.children.retain(|c| !c.has_id(id));
        let mut removed = self.children.len() != before;
        for child in &mut self.children {
            removed |= child.remove_by_id(id);
        }
        removed
    }

    /// Insert `element` as the next sibling of the descendant with
    /// `anchor_id`. Returns false when no such anchor exists.
    pub fn insert_after(&mut self, anchor_id: &str, element: Element) -> bool {
        if let Some(pos) = self.children.iter().position(|c| c.has_id(anchor_id)) {
            self.children.insert(pos + 1, element);
            return true;
        }
        for child in &mut self.children {
            if child.insert_after(anchor_id, element.clone()) {
                return true;
            }
        }
        false
    }

    /// Append `element` as the last child of the descendant with `parent_id`.
    pub fn append_into(&mut self, parent_id: &str, element: Element) -> bool {
        if let Some(parent) = self.find_mut(parent_id) {
            parent.children.push(element);
            return true;
        }
        false
    }

    /// Number of descendants (plus self) carrying the given id.
    pub fn count_by_id(&self, id: &str) -> usize {
        let own = usize::from(self.has_id(id));
        own + self.children.iter().map(|c| c.count_by_id(id)).sum::<usize>()
    }
}

/// Snapshot of one loaded page: document-level metadata plus the body tree.
/// Constructed fresh per navigation, never cached across them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    pub url: String,
    pub lang: Option<String>,
    pub xml_lang: Option<String>,
    pub meta: Vec<MetaTag>,
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub body: Element,
}

impl PageDocument {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lang: None,
            xml_lang: None,
            meta: Vec::new(),
            scripts: Vec::new(),
            stylesheets: Vec::new(),
            body: Element::new("body"),
        }
    }

    /// Lowercased hostname of the document URL, or `None` when the URL is
    /// malformed or not HTTP(S).
    pub fn hostname(&self) -> Option<String> {
        hostname_of(&self.url)
    }

    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .map(|m| m.content.as_str())
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body.has_class(class)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.body.find(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.body.remove_by_id(id)
    }

    pub fn insert_after(&mut self, anchor_id: &str, element: Element) -> bool {
        self.body.insert_after(anchor_id, element)
    }

    pub fn append_into(&mut self, parent_id: &str, element: Element) -> bool {
        self.body.append_into(parent_id, element)
    }

    pub fn count_by_id(&self, id: &str) -> usize {
        self.body.count_by_id(id)
    }
}
