use divan::Bencher;
use styledmark::nodes::{AstNode, NodeDirective, NodeLink, NodeValue};
use styledmark::{format_html, Arena, Options};

fn main() {
    divan::main();
}

fn directive(name: &str, args: &str) -> NodeValue {
    NodeValue::Directive(NodeDirective {
        name: name.to_string(),
        args: args.to_string(),
    })
}

fn build<'a>(arena: &'a Arena<AstNode<'a>>, sections: usize) -> &'a AstNode<'a> {
    let node = |value: NodeValue| -> &'a AstNode<'a> { arena.alloc(AstNode::from(value)) };
    let text = |s: &str| node(NodeValue::Text(s.to_string()));

    let root = node(NodeValue::Document);
    for i in 0..sections {
        root.append(node(directive("section", &format!(".chapter #c{} color: #333;", i))));
        root.append(node(directive("push", "")));
        root.append(node(directive("font-size", "1.2em")));

        let quote = node(NodeValue::BlockQuote);
        for _ in 0..8 {
            let para = node(NodeValue::Paragraph);
            para.append(text("Some <text> & more text, "));
            let link = node(NodeValue::Link(NodeLink {
                url: "https://example.com/?a=1&b=2".to_string(),
                title: "a \"title\"".to_string(),
            }));
            link.append(text("a link"));
            para.append(link);
            para.append(node(NodeValue::SoftBreak));
            let emph = node(NodeValue::Emph);
            emph.append(text("emphasis"));
            para.append(emph);
            quote.append(para);
        }
        root.append(quote);

        root.append(node(directive("pop", "")));
        root.append(node(directive("end", "")));
    }
    root
}

#[divan::bench(args = [10, 1_000])]
fn bench_render(b: Bencher, sections: usize) {
    let arena = Arena::new();
    let root = build(&arena, sections);

    b.bench(|| {
        let mut output = String::new();
        format_html(root, &Options::default(), &mut output).unwrap();
        output
    });
}
