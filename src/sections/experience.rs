use super::html_escape;
use crate::models::site::{Job, SectionMeta};

pub fn render(jobs: &[Job], meta: &SectionMeta) -> String {
    let mut html = format!(
        r#"<div class="container"><h2 class="section-title">{}</h2><div class="timeline">"#,
        html_escape(&meta.title)
    );

    for job in jobs {
        html.push_str(&format!(
            r#"
<div class="timeline-item">
    <div class="timeline-content">
        <div class="timeline-dot"></div>
        <h3 class="experience-title">{}</h3>
        <h4 class="experience-company">{}</h4>
        <p class="experience-period">{}</p>
        <p class="experience-description">{}</p>
    </div>
</div>"#,
            html_escape(&job.title),
            html_escape(&job.company),
            html_escape(&job.period),
            html_escape(&job.description),
        ));
    }

    html.push_str("</div></div>");
    html
}
