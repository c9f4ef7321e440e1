//! Embedded page templates
//!
//! All console pages are compiled into the binary; nothing is read from
//! disk at runtime.

use axum::response::Html;
use tera::{Context, Tera};

use crate::error::Result;

/// Build the Tera instance with every console page registered.
pub fn build_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("home.html", include_str!("../../templates/home.html")),
        ("about.html", include_str!("../../templates/about.html")),
        ("cameras.html", include_str!("../../templates/cameras.html")),
        (
            "manage_cameras.html",
            include_str!("../../templates/manage_cameras.html"),
        ),
        (
            "edit_camera.html",
            include_str!("../../templates/edit_camera.html"),
        ),
    ])?;
    Ok(tera)
}

/// Render a registered template to an HTML response.
pub fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>> {
    Ok(Html(tera.render(name, context)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_parse() {
        build_templates().unwrap();
    }

    #[test]
    fn test_base_shell_renders() {
        let tera = build_templates().unwrap();
        let page = render(&tera, "home.html", &Context::new()).unwrap();
        assert!(page.0.contains("/manage-cameras"));
        assert!(page.0.contains("/assets/console.css"));
    }
}
