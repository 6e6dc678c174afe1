const fn byte_set(bytes: &[u8]) -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        set[bytes[i] as usize] = true;
        i += 1;
    }
    set
}

const XML_UNSAFE: [bool; 256] = byte_set(b"&<>\"");

/// Escapes `&`, `<`, `>` and `"` so that `text` may be placed in element
/// content or a double-quoted attribute value.
///
/// ```rust
/// # use styledmark::html::escape_xml;
/// assert_eq!(escape_xml("<a href=\"x\">&</a>"),
///            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());

    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if XML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => unreachable!(),
            };
            out.push_str(&text[offset..i]);
            out.push_str(esc);
            offset = i + 1;
        }
    }
    out.push_str(&text[offset..]);
    out
}
