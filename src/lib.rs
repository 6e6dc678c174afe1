//! An HTML renderer for CommonMark document trees, extended with inline
//! style directives.
//!
//! The tree is built by a parser (or by hand) out of [`nodes::AstNode`]s
//! allocated in an [`Arena`].  Besides the usual CommonMark nodes it may
//! hold [`NodeValue::Directive`](nodes::NodeValue::Directive) nodes, which
//! change the style attached to the blocks rendered after them:
//!
//! * `!color`, `!background-color`, `!font-size`, `!font-family` set a
//!   style property;
//! * `!reset` clears the style;
//! * `!push` and `!pop` save and restore it;
//! * `!section .class #id prop: value;` opens a `<div>` and `!end` closes it.
//!
//! ```
//! use styledmark::{render_html, Arena, Options};
//! use styledmark::nodes::{AstNode, NodeDirective, NodeValue};
//!
//! # fn main() {
//! let arena = Arena::new();
//! let node = |value: NodeValue| arena.alloc(AstNode::from(value));
//! let directive = |name: &str, args: &str| {
//!     node(NodeValue::Directive(NodeDirective {
//!         name: name.to_string(),
//!         args: args.to_string(),
//!     }))
//! };
//!
//! let root = node(NodeValue::Document);
//! root.append(directive("section", ".note"));
//! root.append(directive("font-size", "2em"));
//! let para = node(NodeValue::Paragraph);
//! para.append(node(NodeValue::Text("Hello, pâté!".to_string())));
//! root.append(para);
//! root.append(directive("end", ""));
//!
//! assert_eq!(
//!     render_html(root, &Options::default()),
//!     "<div class=\"note\">\n<p style=\"font-size:2em;\">Hello, pâté!</p>\n</div>"
//! );
//! # }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(unknown_lints, clippy::doc_markdown)]

pub mod arena_tree;
pub mod html;
pub mod nodes;
mod options;
#[cfg(test)]
mod tests;

pub use html::{format_document as format_html, Diagnostic, HtmlRenderer};
pub use options::{Escaper, Options};
pub use typed_arena::Arena;

/// Render a document tree to an HTML string.
pub fn render_html<'a>(root: &'a nodes::AstNode<'a>, options: &Options) -> String {
    HtmlRenderer::new(options).render(root)
}
