use yew::prelude::*;

use crate::browser;
use crate::content::{anchor, HERO_STATS, SECTION_CONTACT, SECTION_HOME, SECTION_SERVICES};

fn scroll_to(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        browser::scroll_to_section(&anchor(section));
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SECTION_HOME} class="hero">
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 1.5rem 4rem;
                    background: radial-gradient(circle at 25% 25%, rgba(99, 102, 241, 0.25), transparent 50%),
                                radial-gradient(circle at 75% 75%, rgba(34, 211, 238, 0.2), transparent 50%);
                }
                .hero-inner { max-width: 64rem; animation: fadeUp 0.8s ease-out; }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .hero-badge .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #22d3ee;
                    animation: pulse 2s infinite;
                }
                .hero h1 { font-size: 4rem; line-height: 1.15; margin: 0 0 1.5rem; }
                .hero-subtitle { font-size: 1.2rem; max-width: 48rem; margin: 0 auto 2.5rem; }
                .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .hero-stat { padding: 1.5rem; }
                .hero-stat-value { font-size: 1.8rem; font-weight: 700; color: #22d3ee; }
                .hero-stat-label { font-size: 0.85rem; color: #9ca3af; margin-top: 0.25rem; }
                .scroll-indicator {
                    margin-top: 3rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                    animation: bounce 2s infinite;
                }
                @keyframes pulse { 50% { opacity: 0.4; } }
                @keyframes bounce { 50% { transform: translateY(10px); } }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.5rem; }
                    .hero-stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-badge">
                    <span class="dot"></span>
                    <span>{"Trusted by 100+ Organizations"}</span>
                </div>
                <h1>
                    {"End-to-End"}<br />
                    <span class="gradient-text">{"Examination"}</span>{" & "}<br />
                    <span class="gradient-text">{"Technology Solutions"}</span>
                </h1>
                <p class="hero-subtitle muted">
                    {"From secure exam management to cutting-edge IT infrastructure, we empower institutions with reliable technology solutions that transform assessments and operations."}
                </p>
                <div class="hero-actions">
                    <button class="btn-primary" onclick={scroll_to(SECTION_SERVICES)}>
                        {"Explore Services →"}
                    </button>
                    <button class="btn-secondary" onclick={scroll_to(SECTION_CONTACT)}>
                        {"Contact Us"}
                    </button>
                </div>
                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat glass-card" key={stat.label}>
                            <div class="hero-stat-value">{stat.value}</div>
                            <div class="hero-stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
                <button class="scroll-indicator" onclick={scroll_to(SECTION_SERVICES)} aria-label="Scroll to services">
                    {"Scroll ⌄"}
                </button>
            </div>
        </section>
    }
}
