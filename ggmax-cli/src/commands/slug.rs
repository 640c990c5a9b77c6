use ggmax_core::{TemplateResolver, slug};

pub(crate) fn run_slug(resolver: &TemplateResolver, name: &str) {
    println!("{}", slug(name));
    log::info!("Template: {}", resolver.conventional_path(name).display());
}
