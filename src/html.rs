//! The HTML renderer for the document tree, and the pieces it is built from.

mod context;
mod directive;
mod escape;
mod scope;
mod url;

use std::fmt;

use crate::arena_tree::NodeEdge;
use crate::nodes::{
    in_tight_list, Ast, AstNode, ListType, NodeCodeBlock, NodeCustom, NodeDirective, NodeLink,
    NodeValue, Sourcepos,
};
use crate::Options;

use self::context::{Attributes, Context};
pub use self::directive::{Directive, SectionArgs};
pub use self::escape::escape_xml;
pub use self::scope::{ScopeKind, ScopeStack, StyleMap, UnbalancedScope};
pub use self::url::is_potentially_unsafe;

const RAW_HTML_OMITTED: &str = "<!-- raw HTML omitted -->";

/// Formats an AST as HTML, modified by the given options.
///
/// Unbalanced directives are only logged here.  To inspect them, render with
/// an [`HtmlRenderer`] and read [`HtmlRenderer::diagnostics`].
pub fn format_document<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn fmt::Write,
) -> fmt::Result {
    let mut renderer = HtmlRenderer::new(options);
    output.write_str(&renderer.render(root))
}

/// An unbalanced `!pop` or `!end` found while rendering.
///
/// Rendering carries on past it; a visible error element is written in its
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unbalanced !{directive} directive at {sourcepos}")]
pub struct Diagnostic {
    /// The directive's name.
    pub directive: &'static str,
    /// Where the directive appeared.
    pub sourcepos: Sourcepos,
    /// What the scope stack held instead.
    #[source]
    pub cause: UnbalancedScope,
}

/// Renders document trees to HTML.
///
/// A renderer may be reused; each [`render`](HtmlRenderer::render) starts
/// from a clean state.  Use one renderer per thread.
///
/// ```rust
/// # use styledmark::{Arena, HtmlRenderer, Options};
/// # use styledmark::nodes::{AstNode, NodeDirective, NodeValue};
/// let arena = Arena::new();
/// let root = arena.alloc(AstNode::from(NodeValue::Document));
/// let directive = arena.alloc(AstNode::from(NodeValue::Directive(NodeDirective {
///     name: "color".to_string(),
///     args: "red".to_string(),
/// })));
/// let para = arena.alloc(AstNode::from(NodeValue::Paragraph));
/// root.append(directive);
/// root.append(para);
/// para.append(arena.alloc(AstNode::from(NodeValue::Text("Hi".to_string()))));
///
/// let options = Options::default();
/// let mut renderer = HtmlRenderer::new(&options);
/// assert_eq!(renderer.render(root), "<p style=\"color:red;\">Hi</p>\n");
/// assert!(renderer.diagnostics().is_empty());
/// ```
#[derive(Debug)]
pub struct HtmlRenderer<'o, 'c> {
    options: &'o Options<'c>,
    context: Context,
    scopes: ScopeStack,
    diagnostics: Vec<Diagnostic>,
}

impl<'o, 'c> HtmlRenderer<'o, 'c> {
    /// Creates a renderer with the given options.
    pub fn new(options: &'o Options<'c>) -> Self {
        HtmlRenderer {
            options,
            context: Context::new(),
            scopes: ScopeStack::new(),
            diagnostics: vec![],
        }
    }

    /// Renders the tree under `root` and returns the HTML.
    pub fn render<'a>(&mut self, root: &'a AstNode<'a>) -> String {
        self.context.reset();
        self.scopes.reset();
        self.diagnostics.clear();

        for edge in root.traverse() {
            match edge {
                NodeEdge::Start(node) => self.format_node(node, true),
                NodeEdge::End(node) => {
                    if node.data.borrow().value.is_container() {
                        self.format_node(node, false);
                    }
                }
            }
        }

        log::trace!(
            "rendered {} bytes, {} unbalanced directive(s)",
            self.context.len(),
            self.diagnostics.len()
        );
        self.context.take()
    }

    /// The unbalanced directives found by the last render.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The ambient style and open scopes as the last render left them.
    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    fn esc(&self, text: &str) -> String {
        match self.options.esc {
            Some(ref esc) => esc.escape(text),
            None => escape_xml(text),
        }
    }

    fn out(&mut self, text: &str) {
        let escaped = self.esc(text);
        self.context.lit(&escaped);
    }

    fn css(&self, style: &StyleMap) -> Option<String> {
        if style.is_empty() {
            None
        } else {
            Some(style.to_css(&|value: &str| self.esc(value)))
        }
    }

    fn attrs(&self, ast: &Ast) -> Attributes {
        let mut attrs = Attributes::new();
        if self.options.sourcepos && ast.sourcepos.is_known() {
            attrs.push(("data-sourcepos", ast.sourcepos.to_string()));
        }
        if let NodeValue::Paragraph
        | NodeValue::CodeBlock(..)
        | NodeValue::BlockQuote
        | NodeValue::List(..)
        | NodeValue::Heading(..) = ast.value
        {
            if let Some(css) = self.css(self.scopes.style()) {
                attrs.push(("style", css));
            }
        }
        attrs
    }

    fn format_node<'a>(&mut self, node: &'a AstNode<'a>, entering: bool) {
        let ast = node.data.borrow();
        match ast.value {
            NodeValue::Document => self.scopes.reset(),
            NodeValue::Text(ref literal) => self.out(literal),
            NodeValue::SoftBreak => self.context.lit(&self.options.softbreak),
            NodeValue::LineBreak => {
                self.context.tag("br", &[], true);
                self.context.cr();
            }
            NodeValue::Link(ref nl) => self.format_link(&ast, nl, entering),
            NodeValue::Image(ref nl) => self.format_image(nl, entering),
            NodeValue::Emph => {
                self.context
                    .tag(if entering { "em" } else { "/em" }, &[], false);
            }
            NodeValue::Strong => {
                self.context
                    .tag(if entering { "strong" } else { "/strong" }, &[], false);
            }
            NodeValue::Paragraph => {
                if in_tight_list(node) {
                    return;
                }
                let attrs = self.attrs(&ast);
                if entering {
                    self.context.cr();
                    self.context.tag("p", &attrs, false);
                } else {
                    self.context.tag("/p", &[], false);
                    self.context.cr();
                }
            }
            NodeValue::Heading(ref nh) => {
                let attrs = self.attrs(&ast);
                if entering {
                    self.context.cr();
                    self.context.tag(&format!("h{}", nh.level), &attrs, false);
                } else {
                    self.context.tag(&format!("/h{}", nh.level), &[], false);
                    self.context.cr();
                }
            }
            NodeValue::Directive(ref nd) => self.format_directive(&ast, nd),
            NodeValue::Code(ref literal) => {
                self.context.tag("code", &[], false);
                self.out(literal);
                self.context.tag("/code", &[], false);
            }
            NodeValue::CodeBlock(ref ncb) => self.format_code_block(&ast, ncb),
            NodeValue::ThematicBreak => {
                let attrs = self.attrs(&ast);
                self.context.cr();
                self.context.tag("hr", &attrs, true);
                self.context.cr();
            }
            NodeValue::BlockQuote => {
                let attrs = self.attrs(&ast);
                if entering {
                    self.scopes.push(ScopeKind::BlockQuote);
                    self.scopes.style_mut().clear();
                    self.context.cr();
                    self.context.tag("blockquote", &attrs, false);
                    self.context.cr();
                } else {
                    // Pushes and sections left open inside the quote end with it.
                    if let Err(err) = self
                        .scopes
                        .pop_matching(ScopeKind::BlockQuote, &[ScopeKind::Push, ScopeKind::Section])
                    {
                        log::warn!("block quote closed without its scope: {}", err);
                    }
                    self.context.cr();
                    self.context.tag("/blockquote", &[], false);
                    self.context.cr();
                }
            }
            NodeValue::List(ref nl) => {
                let tagname = match nl.list_type {
                    ListType::Bullet => "ul",
                    ListType::Ordered => "ol",
                };
                let mut attrs = self.attrs(&ast);
                if entering {
                    if let Some(start) = nl.start.filter(|&start| start != 1) {
                        attrs.push(("start", start.to_string()));
                    }
                    self.context.cr();
                    self.context.tag(tagname, &attrs, false);
                    self.context.cr();
                } else {
                    self.context.cr();
                    self.context.tag(&format!("/{}", tagname), &[], false);
                    self.context.cr();
                }
            }
            NodeValue::Item => {
                let attrs = self.attrs(&ast);
                if entering {
                    self.context.tag("li", &attrs, false);
                } else {
                    self.context.tag("/li", &[], false);
                    self.context.cr();
                }
            }
            NodeValue::HtmlInline(ref literal) => self.format_raw(literal),
            NodeValue::HtmlBlock(ref literal) => {
                self.context.cr();
                self.format_raw(literal);
                self.context.cr();
            }
            NodeValue::CustomInline(ref custom) => self.format_custom(custom, entering),
            NodeValue::CustomBlock(ref custom) => {
                self.context.cr();
                self.format_custom(custom, entering);
                self.context.cr();
            }
        }
    }

    fn format_link(&mut self, ast: &Ast, nl: &NodeLink, entering: bool) {
        if !entering {
            self.context.tag("/a", &[], false);
            return;
        }

        let mut attrs = self.attrs(ast);
        if self.options.safe && is_potentially_unsafe(&nl.url) {
            log::debug!("omitting unsafe link destination {:?}", nl.url);
        } else {
            attrs.push(("href", self.esc(&nl.url)));
        }
        if !nl.title.is_empty() {
            attrs.push(("title", self.esc(&nl.title)));
        }
        self.context.tag("a", &attrs, false);
    }

    fn format_image(&mut self, nl: &NodeLink, entering: bool) {
        if entering {
            if self.context.disable_tags() {
                let src = if self.options.safe && is_potentially_unsafe(&nl.url) {
                    log::debug!("omitting unsafe image source {:?}", nl.url);
                    String::new()
                } else {
                    self.esc(&nl.url)
                };
                self.context.lit("<img src=\"");
                self.context.lit(&src);
                self.context.lit("\" alt=\"");
            }
        } else if self.context.enable_tags() {
            if !nl.title.is_empty() {
                let title = self.esc(&nl.title);
                self.context.lit("\" title=\"");
                self.context.lit(&title);
            }
            self.context.lit("\" />");
        }
    }

    fn format_code_block(&mut self, ast: &Ast, ncb: &NodeCodeBlock) {
        let mut attrs = self.attrs(ast);
        let lang = ncb.info.split(char::is_whitespace).next().unwrap_or("");
        if !lang.is_empty() {
            let mut class = self.esc(lang);
            if !class.starts_with("language-") {
                class.insert_str(0, "language-");
            }
            attrs.push(("class", class));
        }

        self.context.cr();
        self.context.tag("pre", &[], false);
        self.context.tag("code", &attrs, false);
        self.out(&ncb.literal);
        self.context.tag("/code", &[], false);
        self.context.tag("/pre", &[], false);
        self.context.cr();
    }

    fn format_directive(&mut self, ast: &Ast, nd: &NodeDirective) {
        let directive = match Directive::from_name(&nd.name) {
            Some(directive) => directive,
            None => {
                log::debug!("ignoring unknown directive !{}", nd.name);
                return;
            }
        };

        match directive {
            Directive::Style(property) => self.scopes.style_mut().set(property, &nd.args),
            Directive::Reset => self.scopes.style_mut().clear(),
            Directive::Push => self.scopes.push(ScopeKind::Push),
            Directive::Pop => {
                if let Err(cause) = self.scopes.pop_matching(ScopeKind::Push, &[]) {
                    self.unbalanced("pop", ast.sourcepos, cause);
                }
            }
            Directive::Section => {
                let args = SectionArgs::parse(&nd.args);
                let mut style = self.scopes.snapshot();
                style.extend(&args.styles);
                self.scopes.push(ScopeKind::Section);

                let mut attrs = Attributes::new();
                if !args.classes.is_empty() {
                    attrs.push(("class", args.classes.join(" ")));
                }
                if let Some(id) = args.id {
                    attrs.push(("id", id));
                }
                if let Some(css) = self.css(&style) {
                    attrs.push(("style", css));
                }
                self.context.cr();
                self.context.tag("div", &attrs, false);

                // Section styling applies to the container only.
                self.scopes.style_mut().clear();
            }
            Directive::End => {
                match self
                    .scopes
                    .pop_matching(ScopeKind::Section, &[ScopeKind::Push])
                {
                    Ok(()) => self.context.tag("/div", &[], false),
                    Err(cause) => self.unbalanced("end", ast.sourcepos, cause),
                }
            }
        }
    }

    fn unbalanced(&mut self, directive: &'static str, sourcepos: Sourcepos, cause: UnbalancedScope) {
        let diagnostic = Diagnostic {
            directive,
            sourcepos,
            cause,
        };
        log::warn!("{}: {}", diagnostic, cause);

        self.context
            .tag("div", &[("class", "error".to_string())], false);
        self.out(&format!(
            "error: unbalanced <code>!{}</code> directive",
            directive
        ));
        self.context.tag("/div", &[], false);
        self.diagnostics.push(diagnostic);
    }

    fn format_raw(&mut self, literal: &str) {
        if self.options.safe {
            self.context.lit(RAW_HTML_OMITTED);
        } else {
            self.context.lit(literal);
        }
    }

    fn format_custom(&mut self, custom: &NodeCustom, entering: bool) {
        let markup = if entering {
            &custom.on_enter
        } else {
            &custom.on_exit
        };
        if !markup.is_empty() {
            self.context.lit(markup);
        }
    }
}
