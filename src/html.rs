//! HTML presentation layer.
//!
//! Wraps each token in `<span style="display:inline-block">…</span>` so that a
//! browser only breaks lines between tokens. Purely a decorator over
//! [`Segmenter::tokenize`](crate::Segmenter::tokenize).

const BASE_STYLE: &str = "display:inline-block";

/// Attributes put on every span.
///
/// Empty `class_name` / `style` strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub class_name: Option<String>,
    /// Appended after the base style, separated by `;`.
    pub style: Option<String>,
    /// Emit `role="presentation"`.
    pub aria: bool,
    /// Escape token text as HTML. Off by default so entities such as `&nbsp;`
    /// already present in the input pass through.
    pub escape_text: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            class_name: None,
            style: None,
            aria: true,
            escape_text: false,
        }
    }
}

impl HtmlOptions {
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn aria(mut self, aria: bool) -> Self {
        self.aria = aria;
        self
    }

    pub fn escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// The attribute string shared by every span, leading space included.
    fn attributes(&self) -> String {
        let mut attr = String::from(" style=\"");
        attr.push_str(BASE_STYLE);
        if let Some(style) = non_empty(&self.style) {
            attr.push(';');
            html_escape::encode_double_quoted_attribute_to_string(style, &mut attr);
        }
        attr.push('"');

        if self.aria {
            attr.push_str(" role=\"presentation\"");
        }

        if let Some(class_name) = non_empty(&self.class_name) {
            attr.push_str(" class=\"");
            html_escape::encode_double_quoted_attribute_to_string(class_name, &mut attr);
            attr.push('"');
        }
        attr
    }
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Wrap already-segmented tokens.
pub fn wrap_tokens<S: AsRef<str>>(tokens: &[S], opts: &HtmlOptions) -> String {
    let attr = opts.attributes();
    let body: usize = tokens.iter().map(|t| t.as_ref().len()).sum();
    let mut out = String::with_capacity(body + tokens.len() * (attr.len() + 13));

    for token in tokens {
        out.push_str("<span");
        out.push_str(&attr);
        out.push('>');
        if opts.escape_text {
            html_escape::encode_text_to_string(token.as_ref(), &mut out);
        } else {
            out.push_str(token.as_ref());
        }
        out.push_str("</span>");
    }
    out
}
