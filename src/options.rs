//! Configuration for the renderer.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};
use std::panic::RefUnwindSafe;
use std::sync::Arc;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for the HTML renderer.
pub struct Options<'c> {
    /// The string substituted for each soft line break.
    ///
    /// Defaults to `"\n"`.  Set to `"<br />"` to make soft breaks hard, or
    /// to `" "` to ignore line wrapping in the source.
    ///
    /// ```rust
    /// # use styledmark::{render_html, Arena, Options};
    /// # use styledmark::nodes::{AstNode, NodeValue};
    /// let arena = Arena::new();
    /// let root = arena.alloc(AstNode::from(NodeValue::Document));
    /// let para = arena.alloc(AstNode::from(NodeValue::Paragraph));
    /// root.append(para);
    /// para.append(arena.alloc(AstNode::from(NodeValue::Text("Hello.".to_string()))));
    /// para.append(arena.alloc(AstNode::from(NodeValue::SoftBreak)));
    /// para.append(arena.alloc(AstNode::from(NodeValue::Text("World.".to_string()))));
    ///
    /// let mut options = Options::default();
    /// assert_eq!(render_html(root, &options), "<p>Hello.\nWorld.</p>\n");
    ///
    /// options.softbreak = "<br />".to_string();
    /// assert_eq!(render_html(root, &options), "<p>Hello.<br />World.</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = "\n".to_string()))]
    pub softbreak: String,

    /// Sanitize potentially dangerous link and image destinations, and
    /// replace raw HTML with a placeholder comment.
    ///
    /// Destinations using the `javascript:`, `vbscript:`, `file:` or
    /// `data:` schemes are dropped, except for `data:image/png`,
    /// `data:image/gif`, `data:image/jpeg` and `data:image/webp`.
    ///
    /// ```rust
    /// # use styledmark::{render_html, Arena, Options};
    /// # use styledmark::nodes::{AstNode, NodeLink, NodeValue};
    /// let arena = Arena::new();
    /// let root = arena.alloc(AstNode::from(NodeValue::Document));
    /// let para = arena.alloc(AstNode::from(NodeValue::Paragraph));
    /// let link = arena.alloc(AstNode::from(NodeValue::Link(NodeLink {
    ///     url: "javascript:alert(1)".to_string(),
    ///     title: String::new(),
    /// })));
    /// root.append(para);
    /// para.append(link);
    /// link.append(arena.alloc(AstNode::from(NodeValue::Text("Dangerous".to_string()))));
    ///
    /// let mut options = Options::default();
    /// assert_eq!(render_html(root, &options),
    ///            "<p><a href=\"javascript:alert(1)\">Dangerous</a></p>\n");
    ///
    /// options.safe = true;
    /// assert_eq!(render_html(root, &options), "<p><a>Dangerous</a></p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub safe: bool,

    /// Include source position attributes in HTML output.
    ///
    /// Nodes without a recorded position get no attribute.
    #[cfg_attr(feature = "bon", builder(default))]
    pub sourcepos: bool,

    /// Replaces the escaping applied to text, code, destinations, titles and
    /// style values.  Defaults to [`escape_xml`](crate::html::escape_xml).
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use styledmark::{render_html, Arena, Options};
    /// # use styledmark::nodes::{AstNode, NodeValue};
    /// let arena = Arena::new();
    /// let root = arena.alloc(AstNode::from(NodeValue::Document));
    /// let para = arena.alloc(AstNode::from(NodeValue::Paragraph));
    /// root.append(para);
    /// para.append(arena.alloc(AstNode::from(NodeValue::Text("a < b".to_string()))));
    ///
    /// let mut options = Options::default();
    /// options.esc = Some(Arc::new(|text: &str| text.to_uppercase()));
    /// assert_eq!(render_html(root, &options), "<p>A < B</p>\n");
    /// ```
    #[cfg_attr(feature = "arbitrary", arbitrary(value = None))]
    pub esc: Option<Arc<dyn Escaper + 'c>>,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Options {
            softbreak: "\n".to_string(),
            safe: false,
            sourcepos: false,
            esc: None,
        }
    }
}

/// Trait for replacing the text escaping used by the renderer.
pub trait Escaper: RefUnwindSafe + Send + Sync {
    /// Converts raw text into text safe to embed in markup.
    fn escape(&self, text: &str) -> String;
}

impl<'c> Debug for dyn Escaper + 'c {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        formatter.write_str("<dyn Escaper>")
    }
}

impl<F> Escaper for F
where
    F: for<'a> Fn(&'a str) -> String,
    F: RefUnwindSafe + Send + Sync,
{
    fn escape(&self, text: &str) -> String {
        self(text)
    }
}
