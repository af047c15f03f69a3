use yew::prelude::*;

use crate::browser;
use crate::content::{anchor, REASONS, SECTION_CONTACT, SECTION_WHY_US};

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        browser::scroll_to_section(&anchor(SECTION_CONTACT));
    });

    html! {
        <section id={SECTION_WHY_US} class="section-padding why-us">
            <style>
                {r#"
                .why-us { background: linear-gradient(to bottom, rgba(255, 255, 255, 0.03), transparent); }
                .reasons-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .reason { padding: 2rem; }
                .reason-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #a855f7, #22d3ee);
                    font-size: 1.5rem;
                    margin-bottom: 1.25rem;
                    transition: transform 0.5s ease;
                }
                .reason:hover .reason-icon { transform: rotate(360deg); }
                .reason h3 { font-size: 1.2rem; margin: 0 0 0.75rem; }
                .get-started {
                    max-width: 48rem;
                    margin: 4rem auto 0;
                    padding: 3rem;
                    text-align: center;
                }
                .get-started h3 { font-size: 1.8rem; margin: 0 0 1rem; }
                @media (max-width: 1024px) { .reasons-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 768px) { .reasons-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Why Choose Us"}</span>
                    <h2>{"The "}<span class="gradient-text">{"FortiSecure"}</span>{" Advantage"}</h2>
                    <p class="muted">{"Discover why leading institutions trust us with their most critical assessments."}</p>
                </div>
                <div class="reasons-grid">
                    { for REASONS.iter().map(|reason| html! {
                        <div class="reason glass-card-hover" key={reason.title}>
                            <div class="reason-icon">{reason.icon}</div>
                            <h3>{reason.title}</h3>
                            <p class="muted">{reason.description}</p>
                        </div>
                    }) }
                </div>
                <div class="get-started glass-card">
                    <h3>{"Ready to Get Started?"}</h3>
                    <p class="muted">{"Join 100+ organizations that trust FortiSecure for their examination needs."}</p>
                    <a href={anchor(SECTION_CONTACT)} class="btn-primary" onclick={to_contact}>
                        {"Contact Us Today"}
                    </a>
                </div>
            </div>
        </section>
    }
}
