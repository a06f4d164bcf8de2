use super::html_escape;
use crate::models::site::{SectionMeta, SkillCategory};

pub fn render(skills: &[SkillCategory], meta: &SectionMeta) -> String {
    let cards: String = skills
        .iter()
        .map(|skill| {
            let tags: String = skill
                .technologies
                .iter()
                .map(|t| format!(r#"<span class="skill-tag">{}</span>"#, html_escape(t)))
                .collect();
            format!(
                r#"<div class="skill-card"><div class="skill-icon"><i class="{}"></i></div><h3 class="skill-title">{}</h3><div class="skill-tags">{}</div></div>"#,
                html_escape(&skill.icon),
                html_escape(&skill.title),
                tags
            )
        })
        .collect();

    format!(
        r#"<div class="container"><h2 class="section-title">{}</h2><div class="skills-grid">{}</div></div>"#,
        html_escape(&meta.title),
        cards
    )
}
