use crate::nodes::{
    Ast, AstNode, ListType, NodeCodeBlock, NodeCustom, NodeDirective, NodeHeading, NodeLink,
    NodeList, NodeValue, Sourcepos,
};
use crate::*;

/// Builds a tree in `$arena`.  Each node is written `(value, children...)`,
/// where `value` is anything convertible into an [`Ast`].
macro_rules! ast {
    ($arena:expr, ($value:expr $(, $child:tt)*)) => {{
        let node = $crate::tests::alloc($arena, $value);
        $( node.append(ast!($arena, $child)); )*
        node
    }};
}

mod api;

pub(crate) fn alloc<'a>(arena: &'a Arena<AstNode<'a>>, ast: impl Into<Ast>) -> &'a AstNode<'a> {
    arena.alloc(AstNode::from(ast.into()))
}

#[track_caller]
fn compare_strs(output: &str, expected: &str, kind: &str) {
    if output != expected {
        println!("Running {} test", kind);
        println!("Got:");
        println!("==============================");
        println!("{}", output);
        println!("==============================");
        println!();
        println!("Expected:");
        println!("==============================");
        println!("{}", expected);
        println!("==============================");
        println!();
    }
    pretty_assertions::assert_eq!(output, expected);
}

#[track_caller]
fn html<'a>(root: &'a AstNode<'a>, expected: &str) {
    html_opts(root, &Options::default(), expected);
}

#[track_caller]
fn html_opts<'a>(root: &'a AstNode<'a>, options: &Options, expected: &str) {
    let output = render_html(root, options);
    compare_strs(&output, expected, "regular");

    let mut written = String::new();
    format_html(root, options, &mut written).unwrap();
    compare_strs(&written, expected, "format_html");
}

fn doc() -> NodeValue {
    NodeValue::Document
}

fn para() -> NodeValue {
    NodeValue::Paragraph
}

fn text(literal: &str) -> NodeValue {
    NodeValue::Text(literal.to_string())
}

fn heading(level: u8) -> NodeValue {
    NodeValue::Heading(NodeHeading { level })
}

fn bullet_list(tight: bool) -> NodeValue {
    NodeValue::List(NodeList {
        list_type: ListType::Bullet,
        start: None,
        tight,
    })
}

fn ordered_list(start: usize, tight: bool) -> NodeValue {
    NodeValue::List(NodeList {
        list_type: ListType::Ordered,
        start: Some(start),
        tight,
    })
}

fn item() -> NodeValue {
    NodeValue::Item
}

fn code_block(info: &str, literal: &str) -> NodeValue {
    NodeValue::CodeBlock(NodeCodeBlock {
        info: info.to_string(),
        literal: literal.to_string(),
    })
}

fn link(url: &str, title: &str) -> NodeValue {
    NodeValue::Link(NodeLink {
        url: url.to_string(),
        title: title.to_string(),
    })
}

fn image(url: &str, title: &str) -> NodeValue {
    NodeValue::Image(NodeLink {
        url: url.to_string(),
        title: title.to_string(),
    })
}

fn custom(on_enter: &str, on_exit: &str) -> NodeCustom {
    NodeCustom {
        on_enter: on_enter.to_string(),
        on_exit: on_exit.to_string(),
    }
}

fn directive(name: &str, args: &str) -> NodeValue {
    NodeValue::Directive(NodeDirective {
        name: name.to_string(),
        args: args.to_string(),
    })
}

/// Attaches a source position to a node value.
fn at(value: NodeValue, sourcepos: (usize, usize, usize, usize)) -> Ast {
    Ast::with_sourcepos(value, Sourcepos::from(sourcepos))
}
