/// A prompt template with `{name}` placeholders.
///
/// Rendering substitutes each provided variable; placeholders with no
/// matching variable are left intact.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    template: &'static str,
}

impl PromptTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Render the template with the given variables.
    pub fn render(&self, variables: &[(&str, &str)]) -> String {
        let mut rendered = self.template.to_string();
        for (name, value) in variables {
            rendered = rendered.replace(&format!("{{{name}}}"), value);
        }
        rendered
    }
}
