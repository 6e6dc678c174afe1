use std::sync::Arc;

use crate::html::{
    escape_xml, is_potentially_unsafe, Directive, ScopeKind, ScopeStack, SectionArgs, StyleMap,
    UnbalancedScope,
};

use super::*;

#[test]
fn exercise_full_api() {
    let arena = Arena::new();
    let node = ast!(&arena, (doc(), (heading(1), (text("My document")))));
    let default_options = Options::default();
    let mut buffer = String::new();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: std::fmt::Result = format_html(node, &default_options, &mut buffer);
    let _: std::fmt::Result = html::format_document(node, &default_options, &mut buffer);
    let _: String = render_html(node, &default_options);

    let mut renderer: HtmlRenderer = HtmlRenderer::new(&default_options);
    let _: String = renderer.render(node);
    let _: &[Diagnostic] = renderer.diagnostics();
    let _: &ScopeStack = renderer.scopes();

    let mut options = Options::default();
    options.softbreak = "<br />".to_string();
    options.safe = true;
    options.sourcepos = true;
    options.esc = Some(Arc::new(escape_xml));
    let _: String = render_html(node, &options);

    let _: String = escape_xml("<");
    let _: bool = is_potentially_unsafe("javascript:");
    let _: Option<Directive> = Directive::from_name("section");
    let _: SectionArgs = SectionArgs::parse(".a #b c: d;");

    let mut style = StyleMap::new();
    style.set("color", "red");
    let _: Option<&str> = style.get("color");
    let _: String = style.to_css(&|value: &str| value.to_string());

    let mut scopes = ScopeStack::new();
    scopes.push(ScopeKind::Section);
    let _: Result<(), UnbalancedScope> = scopes.pop_matching(ScopeKind::Section, &[ScopeKind::Push]);

    let _: &AstNode = node;
    let ast = node.data.borrow();
    let _: &NodeValue = &ast.value;
    let _: Sourcepos = ast.sourcepos;
    let _: &'static str = ast.value.type_name();
    let _: bool = ast.value.block();
}

#[test]
#[cfg(feature = "bon")]
fn options_builder() {
    let options = Options::builder().build();
    assert_eq!(options.softbreak, "\n");
    assert!(!options.safe);
    assert!(!options.sourcepos);
    assert!(options.esc.is_none());

    let arena = Arena::new();
    let root = ast!(&arena, (doc(),
        (at(para(), (1, 1, 1, 7)),
            (link("file:///x", ""), (text("a"))),
            (NodeValue::SoftBreak),
            (text("b")))
    ));
    let options = Options::builder()
        .safe(true)
        .sourcepos(true)
        .softbreak(" ".to_string())
        .build();
    html_opts(
        root,
        &options,
        "<p data-sourcepos=\"1:1-1:7\"><a>a</a> b</p>\n",
    );
}

#[test]
fn options_debug_hides_escaper() {
    let mut options = Options::default();
    options.esc = Some(Arc::new(|text: &str| text.to_string()));
    let debug = format!("{:?}", options);
    assert!(debug.contains("<dyn Escaper>"));
}

#[test]
fn type_names() {
    assert_eq!(doc().type_name(), "document");
    assert_eq!(code_block("", "").type_name(), "code_block");
    assert_eq!(directive("push", "").type_name(), "directive");
    assert!(NodeValue::BlockQuote.block());
    assert!(!NodeValue::Emph.block());
    assert!(NodeValue::Image(NodeLink::default()).is_container());
    assert!(!directive("section", "").is_container());
    assert_eq!(text("t").text().map(String::as_str), Some("t"));
}

#[test]
fn renderer_is_reusable() {
    let arena = Arena::new();
    let first = ast!(&arena, (doc(), (directive("color", "red")), (para(), (text("1")))));
    let second = ast!(&arena, (doc(), (para(), (text("2")))));

    let options = Options::default();
    let mut renderer = HtmlRenderer::new(&options);
    let once = renderer.render(first);
    assert_eq!(once, "<p style=\"color:red;\">1</p>\n");
    assert_eq!(renderer.render(second), "<p>2</p>\n");
    assert_eq!(renderer.render(first), once);
    assert_eq!(HtmlRenderer::new(&options).render(first), once);
}

#[test]
fn renders_a_subtree() {
    let arena = Arena::new();
    let quote = ast!(&arena, (NodeValue::BlockQuote, (para(), (text("q")))));
    let root = ast!(&arena, (doc(), (directive("color", "red"))));
    root.append(quote);

    html(quote, "<blockquote>\n<p>q</p>\n</blockquote>\n");
}
