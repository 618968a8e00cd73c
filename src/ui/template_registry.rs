/// Read-only HTML templates, loaded once and handed to the server.
pub struct TemplateRegistry {
    form_page: String,
}

const ERROR_PLACEHOLDER: &str = "{{ERROR_BLOCK}}";

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::from_template(include_str!("static/index.html"))
    }

    pub fn from_template(form_page: &str) -> Self {
        Self {
            form_page: form_page.to_string(),
        }
    }

    /// The submission form, with an error banner when `error` is set.
    pub fn render_form(&self, error: Option<&str>) -> String {
        let block = match error {
            Some(message) => format!(
                "<div class=\"error\" role=\"alert\">{}</div>",
                escape_html(message).replace('\n', "<br>")
            ),
            None => String::new(),
        };
        self.form_page.replace(ERROR_PLACEHOLDER, &block)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
