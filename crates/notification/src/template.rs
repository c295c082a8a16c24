use askama::Template;

pub(crate) fn render<T: Template>(template: &T) -> anyhow::Result<String> {
    template
        .render()
        .map_err(|err| anyhow::anyhow!("Failed to render email template. Error: {err}"))
}
