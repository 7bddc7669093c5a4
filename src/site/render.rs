use crate::domain::model::{FlowView, SubmissionResult};
use crate::site::content::SiteContent;
use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

const FIELD_CLASS: &str = "w-full rounded-md border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-gray-900/10";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Full HTML document for the page in the given flow state.
pub fn render_document(content: &SiteContent, view: &FlowView, year: i32) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (content.brand) }
            }
            body {
                (render_page(content, view, year))
            }
        }
    };
    markup.into_string()
}

pub fn render_page(content: &SiteContent, view: &FlowView, year: i32) -> Markup {
    html! {
        div class="min-h-screen text-gray-900 bg-white" {
            (header(content, view.menu_open))
            (hero(content))
            (about(content))
            (services(content))
            (work(content))
            (testimonials(content))
            (contact(content, view))
            (footer(content, year))
        }
    }
}

fn header(content: &SiteContent, menu_open: bool) -> Markup {
    html! {
        header class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur border-b border-gray-100" {
            div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between" {
                a href="#home" class="text-xl font-bold tracking-tight" { (content.brand) }
                nav class="hidden md:flex items-center gap-8" {
                    @for item in &content.nav_items {
                        a href=(item.href) class="text-sm font-medium text-gray-600 hover:text-gray-900" { (item.label) }
                    }
                    a href="#contact" class="px-4 py-2 rounded-md bg-gray-900 text-white text-sm font-semibold hover:bg-gray-800" { "Hire Me" }
                }
                button type="button" class="md:hidden inline-flex items-center justify-center w-10 h-10 rounded-md border border-gray-200" aria-label="Toggle menu" aria-expanded=(if menu_open { "true" } else { "false" }) {
                    span class="block w-5 h-[2px] bg-gray-900" {}
                }
            }
            @if menu_open {
                div class="md:hidden border-t border-gray-100" data-menu="mobile" {
                    div class="px-4 py-3 flex flex-col gap-3" {
                        @for item in &content.nav_items {
                            a href=(item.href) class="py-2 text-sm text-gray-700" { (item.label) }
                        }
                    }
                }
            }
        }
    }
}

fn hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    html! {
        section id="home" class="pt-28 md:pt-32 bg-gradient-to-b from-gray-50 to-white" {
            div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-center" {
                div {
                    p class="uppercase tracking-widest text-xs text-gray-500 mb-3" { (hero.eyebrow) }
                    h1 class="text-4xl md:text-6xl font-extrabold leading-tight mb-6" { (hero.headline) }
                    p class="text-gray-600 mb-8" { (hero.lead) }
                    div class="flex flex-wrap gap-3" {
                        a href="#work" class="px-5 py-3 rounded-md bg-gray-900 text-white font-semibold text-sm hover:bg-gray-800" { "View Work" }
                        a href="#contact" class="px-5 py-3 rounded-md border border-gray-300 text-gray-800 font-semibold text-sm hover:bg-gray-100" { "Contact" }
                    }
                }
                div class="relative" {
                    div class="aspect-square rounded-2xl bg-gradient-to-br from-gray-100 to-gray-200 border border-gray-200 shadow-inner" {}
                    div class="absolute -bottom-4 -left-4 bg-white border border-gray-200 shadow rounded-xl px-4 py-3 text-sm" {
                        span class="font-semibold" { (hero.badge_value) }
                        span class="ml-2 text-gray-500" { (hero.badge_label) }
                    }
                }
            }
        }
    }
}

fn about(content: &SiteContent) -> Markup {
    html! {
        section id="about" class="py-20" {
            div class="max-w-6xl mx-auto px-4 grid md:grid-cols-3 gap-10" {
                div class="md:col-span-1" {
                    h2 class="text-2xl font-bold mb-3" { "About" }
                    p class="text-gray-600" { "A short introduction" }
                }
                div class="md:col-span-2 space-y-4 text-gray-700" {
                    @for paragraph in &content.about {
                        p { (paragraph) }
                    }
                }
            }
        }
    }
}

fn section_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="flex items-end justify-between mb-10" {
            div {
                h2 class="text-2xl font-bold" { (title) }
                p class="text-gray-600" { (subtitle) }
            }
        }
    }
}

fn services(content: &SiteContent) -> Markup {
    html! {
        section id="services" class="py-20 bg-gray-50" {
            div class="max-w-6xl mx-auto px-4" {
                (section_heading("Services", "What I can do for you"))
                div class="grid md:grid-cols-3 gap-6" {
                    @for service in &content.services {
                        div class="p-6 rounded-xl border border-gray-200 bg-white hover:shadow-sm transition-shadow" {
                            h3 class="font-semibold text-lg mb-2" { (service.title) }
                            p class="text-gray-600 text-sm" { (service.desc) }
                        }
                    }
                }
            }
        }
    }
}

fn work(content: &SiteContent) -> Markup {
    html! {
        section id="work" class="py-20" {
            div class="max-w-6xl mx-auto px-4" {
                (section_heading("Selected Work", "A snapshot of recent projects"))
                div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6" {
                    @for item in &content.work {
                        a href=(item.href) class="group block rounded-xl overflow-hidden border border-gray-200 bg-white" {
                            div class="aspect-[4/3] bg-gray-100 group-hover:opacity-90 transition-opacity" {}
                            div class="p-4" {
                                h4 class="font-semibold" { (item.title) }
                                p class="text-sm text-gray-500" { (item.tags) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn testimonials(content: &SiteContent) -> Markup {
    html! {
        section id="testimonials" class="py-20 bg-gray-50" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-2xl font-bold mb-10" { "Testimonials" }
                div class="grid md:grid-cols-3 gap-6" {
                    @for t in &content.testimonials {
                        div class="rounded-xl border border-gray-200 bg-white p-6" {
                            p class="text-gray-700" { "“" (t.quote) "”" }
                            div class="mt-4 text-sm text-gray-500" { (t.name) " • " (t.role) }
                        }
                    }
                }
            }
        }
    }
}

fn result_line(result: &SubmissionResult) -> Markup {
    let color = if result.ok { "text-green-600" } else { "text-red-600" };
    html! {
        p class=(format!("{} text-sm", color)) role="status" { (result.message) }
    }
}

fn contact(content: &SiteContent, view: &FlowView) -> Markup {
    let form = &view.form;
    html! {
        section id="contact" class="py-20" {
            div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-start" {
                div {
                    h2 class="text-2xl font-bold mb-3" { "Let’s work together" }
                    p class="text-gray-600 mb-6" { "Tell me about your project and I’ll get back to you soon." }
                    div class="rounded-xl border border-gray-200 p-6" {
                        form method="post" class="space-y-4" {
                            div class="grid sm:grid-cols-2 gap-4" {
                                div {
                                    label class=(LABEL_CLASS) { "Name" }
                                    input required type="text" name="name" value=(form.name) class=(FIELD_CLASS);
                                }
                                div {
                                    label class=(LABEL_CLASS) { "Email" }
                                    input required type="email" name="email" value=(form.email) class=(FIELD_CLASS);
                                }
                            }
                            div {
                                label class=(LABEL_CLASS) { "Subject" }
                                input type="text" name="subject" value=(form.subject) class=(FIELD_CLASS);
                            }
                            div {
                                label class=(LABEL_CLASS) { "Message" }
                                textarea required rows="5" name="message" class=(FIELD_CLASS) { (form.message) }
                            }
                            button type="submit" disabled[view.submitting] class="inline-flex items-center px-5 py-3 rounded-md bg-gray-900 text-white font-semibold text-sm hover:bg-gray-800 disabled:opacity-60" {
                                @if view.submitting { "Sending..." } @else { "Send Message" }
                            }
                            @if let Some(result) = &view.result {
                                (result_line(result))
                            }
                        }
                    }
                }
                div class="space-y-6" {
                    div class="rounded-xl border border-gray-200 p-6" {
                        h3 class="font-semibold mb-2" { "Availability" }
                        p class="text-sm text-gray-600" { (content.availability) }
                    }
                    div class="rounded-xl border border-gray-200 p-6" {
                        h3 class="font-semibold mb-2" { "Contact" }
                        p class="text-sm text-gray-600" { (content.contact_email) }
                        p class="text-sm text-gray-600" { (content.contact_phone) }
                    }
                }
            }
        }
    }
}

fn footer(content: &SiteContent, year: i32) -> Markup {
    html! {
        footer class="border-t border-gray-100 py-8" {
            div class="max-w-6xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4" {
                p class="text-sm text-gray-500" { "© " (year) " " (content.brand) ". All rights reserved." }
                div class="flex gap-4 text-sm text-gray-500" {
                    @for social in &content.socials {
                        a href=(social.href) class="hover:text-gray-900" { (social.label) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FormState;

    fn render(view: &FlowView) -> String {
        render_page(&SiteContent::default(), view, 2026).into_string()
    }

    #[test]
    fn test_renders_every_nav_item_and_section() {
        let html = render(&FlowView::default());

        for label in ["Home", "About", "Services", "Work", "Testimonials", "Contact"] {
            assert!(html.contains(label), "missing nav label {}", label);
        }
        for id in ["home", "about", "services", "work", "testimonials", "contact"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
        assert_eq!(html.matches("Project Title").count(), 6);
        assert!(html.contains("© 2026 Your Brand. All rights reserved."));
    }

    #[test]
    fn test_mobile_menu_only_when_open() {
        let closed = render(&FlowView::default());
        assert!(!closed.contains("data-menu=\"mobile\""));

        let open = render(&FlowView {
            menu_open: true,
            ..FlowView::default()
        });
        assert!(open.contains("data-menu=\"mobile\""));
    }

    #[test]
    fn test_submit_button_disabled_while_submitting() {
        let idle = render(&FlowView::default());
        assert!(idle.contains("Send Message"));
        assert!(!idle.contains("type=\"submit\" disabled"));

        let busy = render(&FlowView {
            submitting: true,
            ..FlowView::default()
        });
        assert!(busy.contains("Sending..."));
        assert!(busy.contains("type=\"submit\" disabled"));
    }

    #[test]
    fn test_result_line_colors() {
        let ok = render(&FlowView {
            result: Some(SubmissionResult::success()),
            ..FlowView::default()
        });
        assert!(ok.contains("text-green-600 text-sm"));
        assert!(ok.contains("Thanks! Your message has been sent."));

        let failed = render(&FlowView {
            result: Some(SubmissionResult::failure("Invalid email")),
            ..FlowView::default()
        });
        assert!(failed.contains("text-red-600 text-sm"));
        assert!(failed.contains("Invalid email"));
    }

    #[test]
    fn test_form_values_are_escaped() {
        let view = FlowView {
            form: FormState {
                name: "<script>alert(1)</script>".to_string(),
                email: "a@b.c".to_string(),
                subject: String::new(),
                message: "Tom & Jerry".to_string(),
            },
            ..FlowView::default()
        };
        let html = render(&view);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_document_has_doctype_and_title() {
        let html = render_document(&SiteContent::default(), &FlowView::default(), 2026);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Your Brand</title>"));
    }
}
