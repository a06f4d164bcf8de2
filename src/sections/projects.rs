use super::html_escape;
use crate::models::site::{Project, SectionMeta};

/// Project grid. The `#filterButtons` container is left empty; the filter
/// controller fills it from the rendered tags once the grid is in the page.
pub fn render(projects: &[Project], meta: &SectionMeta) -> String {
    let mut html = format!(
        r#"<div class="container">
    <h2 class="section-title">{}</h2>
    <div class="filter-buttons" id="filterButtons" style="text-align: center; margin-bottom: 2rem;"></div>
    <div class="projects-grid">"#,
        html_escape(&meta.title)
    );

    for project in projects {
        let tags: String = project
            .technologies
            .iter()
            .map(|t| format!(r#"<span class="tech-tag">{}</span>"#, html_escape(t)))
            .collect();

        html.push_str(&format!(
            r##"
<div class="project-card">
    <h3 class="project-title">{}</h3>
    <p class="project-description">{}</p>
    <div class="project-tech">{}</div>
    <div class="project-links">
        <a href="#" class="project-link"><i class="fab fa-github"></i> GitHub</a>
        <a href="#" class="project-link"><i class="fas fa-external-link-alt"></i> Live Demo</a>
    </div>
</div>"##,
            html_escape(&project.title),
            html_escape(&project.description),
            tags
        ));
    }

    html.push_str("</div></div>");
    html
}
