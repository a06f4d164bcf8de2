use super::{html_escape, TERMINAL_HEADER};
use crate::models::site::{Personal, SectionMeta};

/// Hero banner: name, role, a code-style "developer" object and two CTAs.
pub fn render(personal: &Personal, meta: &SectionMeta) -> String {
    let cta = meta.cta.clone().unwrap_or_default();
    format!(
        r##"<div class="container">
    <div class="hero-content">
        <h1>{name}</h1>
        <p class="subtitle">{title}</p>
        <div class="code-block">
            {header}
            <div>const developer = {{</div>
            <div>&nbsp;&nbsp;name: "{name}",</div>
            <div>&nbsp;&nbsp;role: "{title}",</div>
            <div>&nbsp;&nbsp;location: "{location}",</div>
            <div>&nbsp;&nbsp;experience: "{experience}",</div>
            <div>&nbsp;&nbsp;passion: "{passion}"</div>
            <div>}};</div>
        </div>
        <div class="cta-buttons">
            <a href="#projects" class="btn btn-primary">{primary}</a>
            <a href="#contact" class="btn btn-secondary">{secondary}</a>
        </div>
    </div>
</div>"##,
        name = html_escape(&personal.name),
        title = html_escape(&personal.title),
        location = html_escape(&personal.location),
        experience = html_escape(&personal.experience),
        passion = html_escape(&personal.passion),
        primary = html_escape(&cta.primary),
        secondary = html_escape(&cta.secondary),
        header = TERMINAL_HEADER,
    )
}
