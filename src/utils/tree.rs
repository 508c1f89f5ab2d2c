// src/utils/tree.rs

//! Predicate-based search over a parsed HTML tree.
//!
//! Matchers test a single node; `find` and `find_all` walk a subtree in
//! document order (pre-order, the node itself before its children).

use regex::Regex;
use scraper::{Html, Node};

/// A node of a parsed document.
pub type NodeRef<'a> = ego_tree::NodeRef<'a, Node>;

/// Tests a single node.
pub trait Matcher {
    fn matches(&self, node: NodeRef<'_>) -> bool;

    /// Match nodes accepted by both matchers.
    fn and<M: Matcher>(self, other: M) -> And<Self, M>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Match nodes accepted by either matcher.
    fn or<M: Matcher>(self, other: M) -> Or<Self, M>
    where
        Self: Sized,
    {
        Or(self, other)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn matches(&self, node: NodeRef<'_>) -> bool {
        (**self).matches(node)
    }
}

/// Conjunction of two matchers.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

impl<A: Matcher, B: Matcher> Matcher for And<A, B> {
    fn matches(&self, node: NodeRef<'_>) -> bool {
        self.0.matches(node) && self.1.matches(node)
    }
}

/// Disjunction of two matchers.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

impl<A: Matcher, B: Matcher> Matcher for Or<A, B> {
    fn matches(&self, node: NodeRef<'_>) -> bool {
        self.0.matches(node) || self.1.matches(node)
    }
}

/// A matcher backed by a plain function or closure.
#[derive(Clone)]
pub struct Predicate<F>(F);

impl<F> Matcher for Predicate<F>
where
    F: Fn(NodeRef<'_>) -> bool,
{
    fn matches(&self, node: NodeRef<'_>) -> bool {
        (self.0)(node)
    }
}

/// Wrap a closure as a matcher.
pub fn predicate<F>(f: F) -> Predicate<F>
where
    F: Fn(NodeRef<'_>) -> bool,
{
    Predicate(f)
}

#[derive(Debug, Clone)]
enum AttrRule {
    Present,
    Equals(String),
    Pattern(Regex),
}

/// Matches element nodes by one attribute.
#[derive(Debug, Clone)]
pub struct AttrMatcher {
    name: &'static str,
    rule: AttrRule,
}

impl Matcher for AttrMatcher {
    fn matches(&self, node: NodeRef<'_>) -> bool {
        let Some(value) = attr(node, self.name) else {
            return false;
        };
        match &self.rule {
            AttrRule::Present => true,
            AttrRule::Equals(expected) => value == expected,
            AttrRule::Pattern(re) => re.is_match(value),
        }
    }
}

/// Matches text leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNode;

impl Matcher for TextNode {
    fn matches(&self, node: NodeRef<'_>) -> bool {
        node.value().is_text()
    }
}

/// Node carrying attribute `name`, whatever its value.
pub fn has_attr(name: &'static str) -> AttrMatcher {
    AttrMatcher {
        name,
        rule: AttrRule::Present,
    }
}

/// Attribute `name` equal to `value`.
pub fn with_attr(name: &'static str, value: impl Into<String>) -> AttrMatcher {
    AttrMatcher {
        name,
        rule: AttrRule::Equals(value.into()),
    }
}

/// Attribute `name` matching `re`.
pub fn with_attr_re(name: &'static str, re: &Regex) -> AttrMatcher {
    AttrMatcher {
        name,
        rule: AttrRule::Pattern(re.clone()),
    }
}

pub fn with_id(id: impl Into<String>) -> AttrMatcher {
    with_attr("id", id)
}

pub fn with_id_re(re: &Regex) -> AttrMatcher {
    with_attr_re("id", re)
}

/// The whole `class` attribute equal to `class`, not one class among many.
pub fn with_class(class: impl Into<String>) -> AttrMatcher {
    with_attr("class", class)
}

pub fn with_data_test(value: impl Into<String>) -> AttrMatcher {
    with_attr("data-test", value)
}

pub fn with_data_test_re(re: &Regex) -> AttrMatcher {
    with_attr_re("data-test", re)
}

pub fn is_text() -> TextNode {
    TextNode
}

/// Root node of a parsed document.
pub fn root(document: &Html) -> NodeRef<'_> {
    document.tree.root()
}

/// Attribute value of an element node. Non-element nodes have none.
pub fn attr<'a>(node: NodeRef<'a>, name: &str) -> Option<&'a str> {
    node.value().as_element()?.attr(name)
}

/// Named capture group of `re` applied to attribute `name`.
pub fn capture<'a>(node: NodeRef<'a>, name: &str, re: &Regex, group: &str) -> Option<&'a str> {
    let value = attr(node, name)?;
    re.captures(value)?.name(group).map(|m| m.as_str())
}

/// First node in the subtree for which `matcher` holds.
pub fn find<'a, M: Matcher>(root: NodeRef<'a>, matcher: M) -> Option<NodeRef<'a>> {
    root.descendants().find(|node| matcher.matches(*node))
}

/// Every matching node in the subtree, in document order.
pub fn find_all<'a, M: Matcher>(root: NodeRef<'a>, matcher: M) -> Vec<NodeRef<'a>> {
    root.descendants()
        .filter(|node| matcher.matches(*node))
        .collect()
}

/// First capture of `group` over the subtree's `name` attributes.
pub fn find_capture<'a>(
    root: NodeRef<'a>,
    name: &str,
    re: &Regex,
    group: &str,
) -> Option<&'a str> {
    root.descendants()
        .find_map(|node| capture(node, name, re, group))
}
