//! Static HTML for the two pages. Used by `atlas-cli render` for pre-rendered
//! snapshots; the live site renders the same models through Leptos.

use std::fmt::Write;

use super::{
    CategoryPage, CategorySection, DemoControl, EntryCard, LandingPage, Page, NOT_FOUND_MESSAGE,
    SITE_TITLE,
};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_page(page: &Page) -> String {
    match page {
        Page::Landing(landing) => render_landing(landing),
        Page::Category(category) => render_category(category),
    }
}

pub fn render_landing(page: &LandingPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<main class=\"landing\">");
    let _ = writeln!(out, "<h1>{}</h1>", escape(SITE_TITLE));
    for section in &page.sections {
        push_section(&mut out, section, true);
    }
    out.push_str("</main>\n");
    out
}

pub fn render_category(page: &CategoryPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<main class=\"category\">");
    let _ = writeln!(out, "<a class=\"back\" href=\"#/\">← 返回首頁</a>");
    match page {
        CategoryPage::Found(section) => push_section(&mut out, section, false),
        CategoryPage::NotFound { requested } => {
            let _ = writeln!(
                out,
                "<p class=\"not-found\" data-requested=\"{}\">{}</p>",
                escape(requested),
                NOT_FOUND_MESSAGE
            );
        }
    }
    out.push_str("</main>\n");
    out
}

fn push_section(out: &mut String, section: &CategorySection, link_heading: bool) {
    let _ = writeln!(out, "<section class=\"category-section\" id=\"{}\">", escape(section.id));
    if link_heading {
        let _ = writeln!(
            out,
            "<h2><a href=\"{}\">{}</a></h2>",
            escape(&section.href),
            escape(section.name)
        );
    } else {
        let _ = writeln!(out, "<h2>{}</h2>", escape(section.name));
    }
    let _ = writeln!(out, "<p class=\"category-desc\">{}</p>", escape(section.description));
    out.push_str("<div class=\"cards\">\n");
    for card in &section.cards {
        push_card(out, card);
    }
    out.push_str("</div>\n</section>\n");
}

fn push_card(out: &mut String, card: &EntryCard) {
    let _ = writeln!(out, "<article class=\"api-card\" data-entry=\"{}\">", escape(card.id));
    let _ = writeln!(out, "<h3>{}</h3>", escape(card.name));
    let _ = writeln!(out, "<p>{}</p>", escape(card.description));

    out.push_str("<ul class=\"support\">");
    for badge in &card.badges {
        let _ = write!(
            out,
            "<li class=\"{}\" data-vendor=\"{}\" title=\"{}\">{}: {}</li>",
            badge.state.css_class(),
            badge.vendor.key(),
            escape(&badge.title()),
            badge.vendor.display_name(),
            escape(badge.text)
        );
    }
    out.push_str("</ul>\n");

    out.push_str("<nav class=\"links\">");
    for link in &card.links {
        let _ = write!(
            out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape(link.url),
            escape(link.label)
        );
    }
    out.push_str("</nav>\n");

    match card.demo {
        DemoControl::Available(demo) => {
            let _ = writeln!(
                out,
                "<button class=\"demo-btn\" data-demo=\"{}\">{}</button>",
                demo.key(),
                DemoControl::LABEL
            );
        }
        DemoControl::Absent => {}
    }
    out.push_str("</article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("多媒體"), "多媒體");
    }

    #[test]
    fn not_found_renders_the_message() {
        let reg = Registry::builtin();
        let html = render_category(&CategoryPage::build(&reg, "not-a-real-id"));
        assert!(html.contains(NOT_FOUND_MESSAGE));
        assert!(html.contains("data-requested=\"not-a-real-id\""));
        assert!(!html.contains("api-card"));
    }

    #[test]
    fn unsupported_vendor_gets_its_own_class() {
        let reg = Registry::builtin();
        let html = render_category(&CategoryPage::build(&reg, "device"));
        assert!(html.contains(
            "<li class=\"support-no\" data-vendor=\"safari\" title=\"Safari 不支援\">Safari: 不支援</li>"
        ));
        assert!(html.contains("class=\"support-yes\" data-vendor=\"chrome\""));
    }

    #[test]
    fn demo_button_only_for_entries_with_demos() {
        let reg = Registry::builtin();
        let html = render_landing(&LandingPage::build(&reg));
        let buttons = html.matches("class=\"demo-btn\"").count();
        assert_eq!(buttons, reg.stats().with_demo);
        assert!(html.contains("data-demo=\"web-audio\""));
    }

    #[test]
    fn landing_links_each_category() {
        let reg = Registry::builtin();
        let html = render_landing(&LandingPage::build(&reg));
        for cat in reg.all() {
            assert!(html.contains(&format!("href=\"#/category/{}\"", cat.id)));
        }
    }
}
