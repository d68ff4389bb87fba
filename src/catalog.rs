//! The built-in deck of copyable snippets shown by the TUI. Pure data; the
//! interesting behavior lives in the clipboard and notification modules.

#[derive(Debug, Clone)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub language: String,
    pub body: String,
}

impl Snippet {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            language: language.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub snippets: Vec<Snippet>,
}

impl Catalog {
    pub fn new(snippets: Vec<Snippet>) -> Self {
        Self { snippets }
    }

    /// The sample deck: a handful of design-token and component snippets.
    pub fn builtin() -> Self {
        Self::new(vec![
            Snippet::new(
                "color-tokens",
                "Color tokens",
                "css",
                ":root {\n  --color-primary: #2563eb;\n  --color-surface: #f8fafc;\n  --color-danger: #dc2626;\n}",
            ),
            Snippet::new(
                "spacing-scale",
                "Spacing scale",
                "css",
                ":root {\n  --space-1: 0.25rem;\n  --space-2: 0.5rem;\n  --space-4: 1rem;\n  --space-8: 2rem;\n}",
            ),
            Snippet::new(
                "button-primary",
                "Primary button",
                "html",
                "<button class=\"btn btn-primary\">Save changes</button>",
            ),
            Snippet::new(
                "badge",
                "Status badge",
                "html",
                "<span class=\"badge badge-success\">Active</span>",
            ),
            Snippet::new(
                "alert",
                "Inline alert",
                "html",
                "<div class=\"alert alert-warning\" role=\"alert\">\n  Check your input before continuing.\n</div>",
            ),
            Snippet::new(
                "focus-ring",
                "Focus ring",
                "css",
                ".focus-ring:focus-visible {\n  outline: 2px solid var(--color-primary);\n  outline-offset: 2px;\n}",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snippet> {
        self.snippets.get(index)
    }
}
