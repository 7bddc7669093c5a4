use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub title: String,
    pub tags: String,
    #[serde(default = "default_work_href")]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub headline: String,
    pub lead: String,
    pub badge_value: String,
    pub badge_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Static presentation data for the page. Defaults reproduce the stock template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub nav_items: Vec<NavItem>,
    pub hero: Hero,
    pub about: Vec<String>,
    pub services: Vec<Service>,
    pub work: Vec<WorkItem>,
    pub testimonials: Vec<Testimonial>,
    pub availability: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub socials: Vec<SocialLink>,
}

fn default_work_href() -> String {
    "#".to_string()
}

fn nav(href: &str, label: &str) -> NavItem {
    NavItem {
        href: href.to_string(),
        label: label.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Your Brand".to_string(),
            nav_items: vec![
                nav("#home", "Home"),
                nav("#about", "About"),
                nav("#services", "Services"),
                nav("#work", "Work"),
                nav("#testimonials", "Testimonials"),
                nav("#contact", "Contact"),
            ],
            hero: Hero {
                eyebrow: "Designer • Developer".to_string(),
                headline: "I craft clean, modern interfaces and delightful web experiences"
                    .to_string(),
                lead: "I help brands and startups turn ideas into polished products. From concept to code, I focus on clarity, performance, and detail.".to_string(),
                badge_value: "10+ Years".to_string(),
                badge_label: "experience".to_string(),
            },
            about: vec![
                "I’m a multidisciplinary designer and developer dedicated to building elegant digital products. I blend thoughtful UX, visual design, and robust front-end engineering.".to_string(),
                "My toolkit includes React, Tailwind, Framer Motion, and modern accessibility-first practices. I collaborate closely with teams to ship fast without sacrificing quality.".to_string(),
            ],
            services: vec![
                Service {
                    title: "Brand & Visual Design".to_string(),
                    desc: "Identity, style guides, and design systems.".to_string(),
                },
                Service {
                    title: "Product UX/UI".to_string(),
                    desc: "User flows, wireframes, and polished interfaces.".to_string(),
                },
                Service {
                    title: "Front-end Development".to_string(),
                    desc: "High-quality, accessible, performant builds.".to_string(),
                },
            ],
            work: (1..=6)
                .map(|i| WorkItem {
                    title: format!("Project Title {}", i),
                    tags: "UI/UX • Web".to_string(),
                    href: default_work_href(),
                })
                .collect(),
            testimonials: vec![
                Testimonial {
                    quote: "A joy to collaborate with — precise and creative.".to_string(),
                    name: "Alex M.".to_string(),
                    role: "Product Lead".to_string(),
                },
                Testimonial {
                    quote: "Delivered beyond expectations, on time.".to_string(),
                    name: "Priya S.".to_string(),
                    role: "Founder".to_string(),
                },
                Testimonial {
                    quote: "Top-notch craft and attention to detail.".to_string(),
                    name: "Diego R.".to_string(),
                    role: "Design Manager".to_string(),
                },
            ],
            availability: "Currently taking on new projects for the next quarter.".to_string(),
            contact_email: "email@yourbrand.com".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            socials: ["Twitter", "Dribbble", "LinkedIn"]
                .into_iter()
                .map(|label| SocialLink {
                    label: label.to_string(),
                    href: "#".to_string(),
                })
                .collect(),
        }
    }
}
