use log::debug;

use crate::dom::{Document, Element};
use crate::error::Result;
use crate::models::site::SiteConfig;
use crate::sections::{html_escape, SectionKind};

/// Fill the fixed anchors of the skeleton (title, logos, theme list, footer).
/// Every anchor's content is replaced, so calling this again with the same
/// configuration leaves the page unchanged.
pub fn update_static_elements(config: &SiteConfig, doc: &mut Document) -> Result<()> {
    doc.set_title(&config.site.title)?;
    doc.require_mut(".logo")?.set_text_content(&config.site.logo);

    let options: String = config
        .themes
        .iter()
        .map(|t| {
            format!(
                r#"<option value="{}">{}</option>"#,
                html_escape(&t.value),
                html_escape(&t.label)
            )
        })
        .collect();
    doc.require_mut(".theme-selector select")?.set_inner_html(&options)?;

    doc.require_mut(".footer-logo")?.set_text_content(&config.site.logo);
    doc.require_mut(".footer-bottom p")?
        .set_text_content(&config.site.copyright);

    let links: String = config
        .section_order
        .iter()
        .map(|id| {
            format!(
                r##"<a href="#{}">{}</a>"##,
                html_escape(id),
                html_escape(config.nav_label(id))
            )
        })
        .collect();
    doc.require_mut(".footer-links")?.set_inner_html(&links)?;

    let social: String = config
        .personal
        .social
        .iter()
        .map(|s| {
            format!(
                r#"<a href="{}" title="{}"><i class="{}"></i></a>"#,
                html_escape(&s.url),
                html_escape(&s.platform),
                html_escape(&s.icon)
            )
        })
        .collect();
    doc.require_mut(".footer-social")?.set_inner_html(&social)?;

    Ok(())
}

/// Rebuild `#nav-menu` from the section order. The first entry starts active.
pub fn create_navigation(config: &SiteConfig, doc: &mut Document) -> Result<()> {
    let menu = doc.require_mut("#nav-menu")?;
    menu.clear();

    for (index, id) in config.section_order.iter().enumerate() {
        let mut button = Element::new("button");
        button.add_class("nav-link");
        if index == 0 {
            button.add_class("active");
        }
        button.set_attr("data-section", id);
        button.set_text_content(config.nav_label(id));

        let mut li = Element::new("li");
        li.append_child(button);
        menu.append_child(li);
    }

    debug!("Navigation built with {} items", config.section_order.len());
    Ok(())
}

/// Rebuild `#main-content`: one `<section id=..>` per entry in the section
/// order, filled by that section's template.
pub fn create_sections(config: &SiteConfig, doc: &mut Document) -> Result<()> {
    let main = doc.require_mut("#main-content")?;
    main.clear();

    for id in &config.section_order {
        let kind = SectionKind::from_id(id);
        let mut section = Element::new("section");
        section.set_attr("id", id);
        if let Some(class) = kind.class() {
            section.add_class(class);
        }
        section.set_inner_html(&kind.render(config))?;
        main.append_child(section);
    }

    debug!("Rendered {} sections", config.section_order.len());
    Ok(())
}
