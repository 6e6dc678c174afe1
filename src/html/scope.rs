//! The ambient style and the stack of scopes that save and restore it.

/// Style properties in effect at the current point of the render.
///
/// Iterates in insertion order; overwriting a property keeps its original
/// position, so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    /// An empty style.
    pub fn new() -> Self {
        StyleMap(Vec::new())
    }

    /// Sets `property` to `value`, replacing any earlier value.
    pub fn set(&mut self, property: &str, value: &str) {
        match self.0.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((property.to_string(), value.to_string())),
        }
    }

    /// The value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Applies every property of `other` on top of this style.
    pub fn extend(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Removes every property.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// The style as an inline CSS declaration list, `prop:value;` for each
    /// property, with each value passed through `esc`.
    pub fn to_css(&self, esc: &dyn Fn(&str) -> String) -> String {
        let mut css = String::new();
        for (property, value) in self.iter() {
            css.push_str(property);
            css.push(':');
            css.push_str(&esc(value));
            css.push(';');
        }
        css
    }
}

/// The construct that opened a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A `!push` directive.
    Push,
    /// A `!section` directive.
    Section,
    /// A block quote.
    BlockQuote,
}

impl ScopeKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ScopeKind::Push => "push",
            ScopeKind::Section => "section",
            ScopeKind::BlockQuote => "block_quote",
        }
    }
}

#[derive(Debug, Clone)]
struct ScopeFrame {
    kind: ScopeKind,
    saved: StyleMap,
}

/// A close that found no open scope of the kind it wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no open {} scope to close (found {})", .expected.name(), .found.map_or("nothing", ScopeKind::name))]
pub struct UnbalancedScope {
    /// The kind of scope the close was for.
    pub expected: ScopeKind,
    /// The kind of scope on top of the stack, if any.
    pub found: Option<ScopeKind>,
}

/// The ambient style together with the stack of saved styles.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    style: StyleMap,
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    /// An empty stack with no ambient style.
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Clears the ambient style and discards every open scope.
    pub fn reset(&mut self) {
        self.style.clear();
        self.frames.clear();
    }

    /// The ambient style.
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// The ambient style, for directives to modify.
    pub fn style_mut(&mut self) -> &mut StyleMap {
        &mut self.style
    }

    /// A copy of the ambient style.
    pub fn snapshot(&self) -> StyleMap {
        self.style.clone()
    }

    /// Replaces the ambient style.
    pub fn restore(&mut self, style: StyleMap) {
        self.style = style;
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The kind of the innermost open scope.
    pub fn top(&self) -> Option<ScopeKind> {
        self.frames.last().map(|f| f.kind)
    }

    /// Opens a scope of `kind`, saving a copy of the ambient style.
    pub fn push(&mut self, kind: ScopeKind) {
        let saved = self.snapshot();
        self.frames.push(ScopeFrame { kind, saved });
    }

    /// Closes the innermost scope of `kind` and restores the style it saved.
    ///
    /// Scopes of any kind in `skip` lying above it are discarded without
    /// restoring their styles.  If, after skipping, the innermost scope is
    /// not of `kind`, nothing further is popped and the ambient style is
    /// left as it was.
    pub fn pop_matching(&mut self, kind: ScopeKind, skip: &[ScopeKind]) -> Result<(), UnbalancedScope> {
        while self.top().map_or(false, |top| skip.contains(&top)) {
            self.frames.pop();
        }

        match self.frames.last() {
            Some(frame) if frame.kind == kind => {}
            _ => {
                return Err(UnbalancedScope {
                    expected: kind,
                    found: self.top(),
                })
            }
        }

        if let Some(frame) = self.frames.pop() {
            self.style = frame.saved;
        }
        Ok(())
    }
}
