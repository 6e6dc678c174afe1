use smallvec::SmallVec;

/// Attributes for a single tag, in output order.  Values must already be
/// escaped.
pub(crate) type Attributes = SmallVec<[(&'static str, String); 4]>;

/// The output buffer of a render.
///
/// While tags are disabled, [`tag`](Context::tag) writes nothing, but
/// literal text still goes through.  Image alt text is rendered this way.
#[derive(Debug)]
pub(crate) struct Context {
    buffer: String,
    last_out: Option<char>,
    disabled_tags: u32,
}

impl Context {
    pub(crate) fn new() -> Self {
        Context {
            buffer: String::new(),
            last_out: Some('\n'),
            disabled_tags: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.buffer.clear();
        self.last_out = Some('\n');
        self.disabled_tags = 0;
    }

    /// Takes the rendered output, leaving the buffer empty.
    pub(crate) fn take(&mut self) -> String {
        self.last_out = Some('\n');
        std::mem::take(&mut self.buffer)
    }

    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Writes `s` verbatim.
    pub(crate) fn lit(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.last_out = s.chars().next_back();
    }

    /// Ensures the output ends in a newline.
    pub(crate) fn cr(&mut self) {
        if self.last_out != Some('\n') {
            self.lit("\n");
        }
    }

    /// Writes `<name attr="value" ...>`, or `<name ... />` when
    /// `self_closing`.  Closing tags are written by passing `/name`.
    pub(crate) fn tag(&mut self, name: &str, attrs: &[(&'static str, String)], self_closing: bool) {
        if self.disabled_tags > 0 {
            return;
        }

        self.buffer.push('<');
        self.buffer.push_str(name);
        for (attr, value) in attrs {
            self.buffer.push(' ');
            self.buffer.push_str(attr);
            self.buffer.push_str("=\"");
            self.buffer.push_str(value);
            self.buffer.push('"');
        }
        if self_closing {
            self.buffer.push_str(" /");
        }
        self.buffer.push('>');
        self.last_out = Some('>');
    }

    /// Stops tags from being written.  Returns `true` if tags were enabled
    /// until now.
    pub(crate) fn disable_tags(&mut self) -> bool {
        self.disabled_tags += 1;
        self.disabled_tags == 1
    }

    /// Undoes one [`disable_tags`](Context::disable_tags).  Returns `true` if
    /// tags are now enabled again.
    pub(crate) fn enable_tags(&mut self) -> bool {
        self.disabled_tags = self.disabled_tags.saturating_sub(1);
        self.disabled_tags == 0
    }
}
