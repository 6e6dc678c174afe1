//! Recognition of directive names and parsing of `!section` arguments.

use super::scope::StyleMap;

/// The directives the renderer acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Sets one style property to the directive's arguments.
    Style(&'static str),
    /// Clears the ambient style.
    Reset,
    /// Saves the ambient style.
    Push,
    /// Restores the style saved by the matching `Push`.
    Pop,
    /// Opens a styled container.
    Section,
    /// Closes the innermost `Section`.
    End,
}

impl Directive {
    /// Looks up a directive by name.  Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Directive> {
        Some(match name {
            "color" => Directive::Style("color"),
            "background-color" => Directive::Style("background-color"),
            "font-size" => Directive::Style("font-size"),
            "font-family" => Directive::Style("font-family"),
            "reset" => Directive::Reset,
            "push" => Directive::Push,
            "pop" => Directive::Pop,
            "section" => Directive::Section,
            "end" => Directive::End,
            _ => return None,
        })
    }
}

/// The classes, id and styles given to a `!section`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionArgs {
    /// `.class` tokens, in order.
    pub classes: Vec<String>,
    /// The last `#id` token.
    pub id: Option<String>,
    /// `property: value;` tokens.  Later values replace earlier ones.
    pub styles: StyleMap,
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn ident_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_ident_byte(b)).count()
}

impl SectionArgs {
    /// Scans `args` for `.class`, `#id` and `property: value;` tokens.
    ///
    /// Tokens may appear in any order and repeat.  A style value runs to the
    /// next `;` or the end of the input, and has leading whitespace removed.
    /// Anything that does not start a token is skipped.
    ///
    /// ```rust
    /// # use styledmark::html::SectionArgs;
    /// let args = SectionArgs::parse(".note.wide #intro color: red; font-size:2em");
    /// assert_eq!(args.classes, ["note", "wide"]);
    /// assert_eq!(args.id.as_deref(), Some("intro"));
    /// assert_eq!(args.styles.get("color"), Some("red"));
    /// assert_eq!(args.styles.get("font-size"), Some("2em"));
    /// ```
    pub fn parse(args: &str) -> SectionArgs {
        let bytes = args.as_bytes();
        let mut result = SectionArgs::default();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'.' | b'#' => {
                    let len = ident_len(&bytes[i + 1..]);
                    if len == 0 {
                        i += 1;
                        continue;
                    }
                    let ident = &args[i + 1..i + 1 + len];
                    if bytes[i] == b'.' {
                        result.classes.push(ident.to_string());
                    } else {
                        result.id = Some(ident.to_string());
                    }
                    i += 1 + len;
                }
                b if is_ident_byte(b) => {
                    let len = ident_len(&bytes[i..]);
                    if bytes.get(i + len) != Some(&b':') {
                        i += 1;
                        continue;
                    }
                    let property = &args[i..i + len];
                    let rest = &args[i + len + 1..];
                    let value_start = rest.len() - rest.trim_start().len();
                    let value_len = rest[value_start..].find(';').unwrap_or(rest.len() - value_start);
                    result
                        .styles
                        .set(property, &rest[value_start..value_start + value_len]);

                    i += len + 1 + value_start + value_len;
                    if bytes.get(i) == Some(&b';') {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        result
    }
}
