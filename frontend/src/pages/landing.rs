use yew::prelude::*;

use crate::components::admin_hotspot::AdminHotspot;
use crate::components::contact_form::ContactForm;

struct Service {
    title: &'static str,
    desc: &'static str,
}

struct Project {
    title: &'static str,
    stack: &'static str,
    desc: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Web Applications",
        desc: "Solid backends with clean, accessible frontends.",
    },
    Service {
        title: "Mobile Apps",
        desc: "Android and iOS with a focus on performance and UX.",
    },
    Service {
        title: "API Integrations",
        desc: "REST, authentication, ETL, automations and WebSockets.",
    },
    Service {
        title: "Data & SQL",
        desc: "Modeling, complex views and reliable pipelines.",
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Agiliza (Logistics)",
        stack: "Web • SQL • WebSockets",
        desc: "Volume management, dashboards and carrier integrations.",
    },
    Project {
        title: "SAF (HR Reviews)",
        stack: "Web • SQL • Scheduling",
        desc: "45/90-day review module with reminders and PDF reports.",
    },
    Project {
        title: "Notice Board Portal",
        stack: "Web • Automation",
        desc: "Corporate TV screens with dynamic overlays and scheduling.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let page_css = r#"
        .landing {
            max-width: 1040px;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .hero {
            padding: 6rem 0 4rem;
            text-align: center;
        }
        .hero h1 {
            font-size: 2.8rem;
            margin-bottom: 1rem;
        }
        .hero p {
            color: #667;
            max-width: 560px;
            margin: 0 auto;
        }
        .section {
            padding: 3rem 0;
        }
        .section h2 {
            font-size: 1.8rem;
            margin-bottom: 1.5rem;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 1.25rem;
        }
        .card {
            border: 1px solid #e2e5ea;
            border-radius: 12px;
            padding: 1.25rem;
        }
        .card h3 {
            margin: 0 0 0.5rem;
            font-size: 1.05rem;
        }
        .card .stack {
            color: #889;
            font-size: 0.85rem;
        }
        .card p {
            color: #556;
            font-size: 0.95rem;
        }
        .contact-form {
            display: grid;
            gap: 1rem;
            max-width: 480px;
        }
        .contact-form label {
            display: grid;
            gap: 0.35rem;
            font-size: 0.9rem;
        }
        .contact-form input,
        .contact-form textarea {
            padding: 0.6rem 0.75rem;
            border: 1px solid #cdd2da;
            border-radius: 8px;
            font: inherit;
        }
        .contact-form textarea {
            min-height: 7rem;
        }
        .contact-form button {
            justify-self: start;
            padding: 0.6rem 1.5rem;
            border: 0;
            border-radius: 8px;
            background: #1d4ed8;
            color: white;
            cursor: pointer;
        }
        .contact-form button[disabled] {
            opacity: 0.6;
        }
        .contact-website {
            position: absolute;
            left: -9999px;
        }
        .form-notice {
            font-size: 0.9rem;
        }
        .form-notice-ok { color: #15803d; }
        .form-notice-error { color: #b91c1c; }
        .footer {
            padding: 3rem 0 2rem;
            color: #889;
            font-size: 0.85rem;
            text-align: center;
        }
        .admin-hotspot {
            display: inline-block;
            width: 24px;
            height: 24px;
            vertical-align: middle;
            cursor: default;
        }
        .admin-door {
            position: fixed;
            bottom: 0;
            right: 0;
            width: 1px;
            height: 1px;
            border: 0;
            padding: 0;
            background: transparent;
        }
    "#;

    html! {
        <div class="landing">
            <style>{page_css}</style>
            <header class="hero">
                <h1>{"Software that ships."}</h1>
                <p>{"Web applications, mobile apps and integrations built end to end. \
                     Tell me about your project and I'll get back to you within a day."}</p>
            </header>

            <section id="services" class="section">
                <h2>{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="card">
                            <h3>{service.title}</h3>
                            <p>{service.desc}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="projects" class="section">
                <h2>{"Selected work"}</h2>
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class="card">
                            <h3>{project.title}</h3>
                            <span class="stack">{project.stack}</span>
                            <p>{project.desc}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="section">
                <h2>{"Get in touch"}</h2>
                <ContactForm />
            </section>

            <footer class="footer">
                <span>{"© TiDev"}</span>
                <AdminHotspot aux_trigger={true} />
            </footer>
        </div>
    }
}
