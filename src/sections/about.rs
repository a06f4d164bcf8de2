use super::{html_escape, TERMINAL_HEADER};
use crate::models::site::{Personal, SectionMeta};

/// Decorative shell transcript; not driven by configuration.
const TERMINAL_LINES: &str = r#"<div class="terminal-line"><span class="prompt">dev@portfolio:~$</span> whoami</div>
<div class="terminal-line">Full-Stack Developer</div>
<div class="terminal-line"><span class="prompt">dev@portfolio:~$</span> ls skills/</div>
<div class="terminal-line">frontend/ backend/ devops/ tools/</div>
<div class="terminal-line"><span class="prompt">dev@portfolio:~$</span> cat status.txt</div>
<div class="terminal-line">Currently: Building amazing things</div>
<div class="terminal-line">Status: Available for opportunities</div>
<div class="terminal-line"><span class="prompt">dev@portfolio:~$</span> <span class="cursor">_</span></div>"#;

pub fn render(personal: &Personal, meta: &SectionMeta) -> String {
    let bio: String = personal
        .bio
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    let stats: String = personal
        .stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><div class="stat-number">{}</div><div>{}</div></div>"#,
                html_escape(&s.number),
                html_escape(&s.label)
            )
        })
        .collect();

    format!(
        r#"<div class="container">
    <h2 class="section-title">{title}</h2>
    <div class="about-content">
        <div class="about-text">
            {bio}
            <div class="stats">{stats}</div>
        </div>
        <div class="terminal">
            {header}
            {lines}
        </div>
    </div>
</div>"#,
        title = html_escape(&meta.title),
        header = TERMINAL_HEADER,
        lines = TERMINAL_LINES,
    )
}
