use super::html_escape;
use crate::models::site::{Contact, Personal, SectionMeta};

/// Contact details, social links and the contact form.
/// The form carries `required` attributes and hidden error notes only; it is
/// validated in place and never submitted anywhere.
pub fn render(personal: &Personal, contact: &Contact, meta: &SectionMeta) -> String {
    let item = |icon: &str, label: &str, value: &str| -> String {
        format!(
            r#"<div class="contact-item"><i class="fas {} contact-icon"></i><div><h4>{}</h4><p>{}</p></div></div>"#,
            icon,
            label,
            html_escape(value)
        )
    };

    let social: String = personal
        .social
        .iter()
        .map(|s| {
            format!(
                r#"<a href="{}" class="social-link" title="{}"><i class="{}"></i></a>"#,
                html_escape(&s.url),
                html_escape(&s.platform),
                html_escape(&s.icon)
            )
        })
        .collect();

    format!(
        r#"<div class="container">
    <h2 class="section-title">{title}</h2>
    <div class="contact-content">
        <div class="contact-info">
            {email}
            {phone}
            {location}
            <div class="social-links">{social}</div>
        </div>
        <form class="contact-form" id="contactForm">
            <div class="form-group">
                <label for="name">Name</label>
                <input type="text" id="name" name="name" required="required"/>
                <div class="form-error" id="nameError">Please enter your name</div>
            </div>
            <div class="form-group">
                <label for="email">Email</label>
                <input type="email" id="email" name="email" required="required"/>
                <div class="form-error" id="emailError">Please enter a valid email</div>
            </div>
            <div class="form-group">
                <label for="message">Message</label>
                <textarea id="message" name="message" required="required"></textarea>
                <div class="form-error" id="messageError">Please enter your message</div>
            </div>
            <button type="submit" class="btn btn-primary">Send Message</button>
        </form>
    </div>
    <div class="contact-message" style="text-align: center; margin-top: 2rem; padding: 2rem 0 1rem 0; color: var(--text-secondary);">
        <p style="font-size: 1.2rem; margin-bottom: 1rem;">{heading}</p>
        <p>{subtext}</p>
    </div>
</div>"#,
        title = html_escape(&meta.title),
        email = item("fa-envelope", "Email", &personal.email),
        phone = item("fa-phone", "Phone", &personal.phone),
        location = item("fa-map-marker-alt", "Location", &personal.location),
        heading = html_escape(&contact.message.heading),
        subtext = html_escape(&contact.message.subtext),
    )
}
