//! The document tree consumed by the renderer.

use crate::arena_tree::Node;
use std::cell::RefCell;

/// The core AST node enum.
#[derive(Debug, Clone)]
pub enum NodeValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**. A block quote.  Contains other **blocks**.  Opens a
    /// style-neutral scope: directives inside the quote do not leak out.
    BlockQuote,

    /// **Block**.  A list.  Contains list items.
    List(NodeList),

    /// **Block**.  A list item.  Contains other **blocks**.
    Item,

    /// **Block**. A code block; fenced or indented.  Contains raw text which
    /// is escaped on output.
    CodeBlock(NodeCodeBlock),

    /// **Block**. A raw HTML block.  Written verbatim unless rendering in
    /// safe mode.
    HtmlBlock(String),

    /// **Block**. A block whose opening and closing markup is supplied by
    /// the caller.  Contains other **blocks**.
    CustomBlock(NodeCustom),

    /// **Block**. A paragraph.  Contains **inlines**.
    Paragraph,

    /// **Block**. A heading.  Contains **inlines**.
    Heading(NodeHeading),

    /// **Block**. A thematic break.  Has no children.
    ThematicBreak,

    /// **Inline**.  Textual content.
    Text(String),

    /// **Inline**.  A soft line break.  Rendered as the configured
    /// `softbreak` string.
    SoftBreak,

    /// **Inline**.  A hard line break.
    LineBreak,

    /// **Inline**.  A code span.
    Code(String),

    /// **Inline**.  Raw HTML contained inline.
    HtmlInline(String),

    /// **Inline**. A custom inline whose markup is supplied by the caller.
    CustomInline(NodeCustom),

    /// **Inline**.  Emphasized text.
    Emph,

    /// **Inline**.  Strong text.
    Strong,

    /// **Inline**.  A link to some URL, with possible title.
    Link(NodeLink),

    /// **Inline**.  An image.  Its children are rendered as plain alt text.
    Image(NodeLink),

    /// **Inline**.  An authoring directive such as `!color red` or
    /// `!section .note`.  Changes renderer state rather than producing
    /// content.
    Directive(NodeDirective),
}

/// The details of a link's destination, or an image's source.
#[derive(Debug, Clone, Default)]
pub struct NodeLink {
    /// The URL for the link destination or image source.
    pub url: String,

    /// The title for the link or image.
    ///
    /// Note this field is used for the `title` attribute by the HTML
    /// formatter even for images; `alt` text is supplied in the image inline
    /// text.
    pub title: String,
}

/// The metadata of a list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeList {
    /// The kind of list (bullet (unordered) or ordered).
    pub list_type: ListType,

    /// For ordered lists, the ordinal the list starts at.
    pub start: Option<usize>,

    /// Whether the list is [tight](https://github.github.com/gfm/#tight), i.e. whether the
    /// paragraphs are wrapped in `<p>` tags when formatted as HTML.
    pub tight: bool,
}

/// The type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    /// A bullet list, i.e. an unordered list.
    Bullet,

    /// An ordered list.
    Ordered,
}

impl Default for ListType {
    fn default() -> ListType {
        ListType::Bullet
    }
}

/// The metadata and data of a code block.
#[derive(Default, Debug, Clone)]
pub struct NodeCodeBlock {
    /// The info string after the opening fence, if any.  Only its first word
    /// is used, as the language class.
    pub info: String,

    /// The literal contents of the code block.
    pub literal: String,
}

/// The metadata of a heading.
#[derive(Default, Debug, Clone, Copy)]
pub struct NodeHeading {
    /// The level of the header; from 1 to 6.
    pub level: u8,
}

/// A directive embedded in the document.
#[derive(Default, Debug, Clone)]
pub struct NodeDirective {
    /// The directive's name, without the leading `!`.
    pub name: String,

    /// Everything after the name, unparsed.
    pub args: String,
}

/// Caller-supplied markup for custom nodes.
#[derive(Default, Debug, Clone)]
pub struct NodeCustom {
    /// Written verbatim when the node is entered.
    pub on_enter: String,

    /// Written verbatim when the node is left.
    pub on_exit: String,
}

impl NodeValue {
    /// Indicates whether this node is a block node or inline node.
    pub fn block(&self) -> bool {
        matches!(
            *self,
            NodeValue::Document
                | NodeValue::BlockQuote
                | NodeValue::List(..)
                | NodeValue::Item
                | NodeValue::CodeBlock(..)
                | NodeValue::HtmlBlock(..)
                | NodeValue::CustomBlock(..)
                | NodeValue::Paragraph
                | NodeValue::Heading(..)
                | NodeValue::ThematicBreak
        )
    }

    /// Indicates whether the renderer visits this node on both entering and
    /// leaving.  Leaf nodes are visited once.
    pub fn is_container(&self) -> bool {
        matches!(
            *self,
            NodeValue::Document
                | NodeValue::BlockQuote
                | NodeValue::List(..)
                | NodeValue::Item
                | NodeValue::CustomBlock(..)
                | NodeValue::Paragraph
                | NodeValue::Heading(..)
                | NodeValue::CustomInline(..)
                | NodeValue::Emph
                | NodeValue::Strong
                | NodeValue::Link(..)
                | NodeValue::Image(..)
        )
    }

    /// Return a reference to the text of a `Text` inline, if this node is one.
    pub fn text(&self) -> Option<&String> {
        match *self {
            NodeValue::Text(ref t) => Some(t),
            _ => None,
        }
    }

    /// The name of the node type, e.g. `"code_block"`.
    pub fn type_name(&self) -> &'static str {
        match *self {
            NodeValue::Document => "document",
            NodeValue::BlockQuote => "block_quote",
            NodeValue::List(..) => "list",
            NodeValue::Item => "item",
            NodeValue::CodeBlock(..) => "code_block",
            NodeValue::HtmlBlock(..) => "html_block",
            NodeValue::CustomBlock(..) => "custom_block",
            NodeValue::Paragraph => "paragraph",
            NodeValue::Heading(..) => "heading",
            NodeValue::ThematicBreak => "thematic_break",
            NodeValue::Text(..) => "text",
            NodeValue::SoftBreak => "softbreak",
            NodeValue::LineBreak => "linebreak",
            NodeValue::Code(..) => "code",
            NodeValue::HtmlInline(..) => "html_inline",
            NodeValue::CustomInline(..) => "custom_inline",
            NodeValue::Emph => "emph",
            NodeValue::Strong => "strong",
            NodeValue::Link(..) => "link",
            NodeValue::Image(..) => "image",
            NodeValue::Directive(..) => "directive",
        }
    }
}

/// A single node in the document tree.
#[derive(Debug, Clone)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,

    /// The positions in the source document this node comes from.  A zero
    /// start line means the position is unknown.
    pub sourcepos: Sourcepos,
}

/// Represents the position in the source document a node was parsed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sourcepos {
    /// The line and column of the first character of this node.
    pub start: LineColumn,
    /// The line and column of the last character of this node.
    pub end: LineColumn,
}

impl Sourcepos {
    /// Whether a parser actually recorded this position.
    pub fn is_known(&self) -> bool {
        self.start.line != 0
    }
}

impl std::fmt::Display for Sourcepos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column,
        )
    }
}

impl From<(usize, usize, usize, usize)> for Sourcepos {
    fn from(sp: (usize, usize, usize, usize)) -> Sourcepos {
        Sourcepos {
            start: LineColumn {
                line: sp.0,
                column: sp.1,
            },
            end: LineColumn {
                line: sp.2,
                column: sp.3,
            },
        }
    }
}

/// Represents the 1-based line and column positions of a given character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    /// The 1-based line number of the character.
    pub line: usize,
    /// The 1-based column number of the character.
    pub column: usize,
}

impl From<(usize, usize)> for LineColumn {
    fn from(lc: (usize, usize)) -> LineColumn {
        LineColumn {
            line: lc.0,
            column: lc.1,
        }
    }
}

impl Ast {
    /// Create a new AST node with the given value and no source position.
    pub fn new(value: NodeValue) -> Self {
        Ast {
            value,
            sourcepos: Sourcepos::default(),
        }
    }

    /// Create a new AST node with the given value and source position.
    pub fn with_sourcepos(value: NodeValue, sourcepos: Sourcepos) -> Self {
        Ast { value, sourcepos }
    }
}

impl From<NodeValue> for Ast {
    fn from(value: NodeValue) -> Self {
        Ast::new(value)
    }
}

/// The type of a node within the document.
///
/// It is bound by the lifetime `'a`, which corresponds to the `Arena` nodes are
/// allocated in.  Child `Ast`s are wrapped in `RefCell` for interior
/// mutability.
///
/// You can construct a new `AstNode` from a `NodeValue` using the `From`
/// trait:
///
/// ```no_run
/// # use styledmark::nodes::{AstNode, NodeValue};
/// let root = AstNode::from(NodeValue::Document);
/// ```
pub type AstNode<'a> = Node<'a, RefCell<Ast>>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new AST node with the given value.
    fn from(value: NodeValue) -> Self {
        Node::new(RefCell::new(Ast::new(value)))
    }
}

impl<'a> From<Ast> for AstNode<'a> {
    /// Create a new AST node with the given Ast.
    fn from(ast: Ast) -> Self {
        Node::new(RefCell::new(ast))
    }
}

/// Whether this paragraph sits directly in an item of a tight list.
pub(crate) fn in_tight_list<'a>(node: &'a AstNode<'a>) -> bool {
    match node.parent().and_then(|n| n.parent()) {
        Some(grandparent) => match grandparent.data.borrow().value {
            NodeValue::List(ref nl) => nl.tight,
            _ => false,
        },
        None => false,
    }
}
