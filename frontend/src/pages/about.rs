use yew::prelude::*;

use crate::content::{ABOUT_FEATURES, SECTION_ABOUT};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SECTION_ABOUT} class="section-padding about">
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about h2 { font-size: 2.5rem; line-height: 1.2; margin: 0 0 1.5rem; }
                .feature-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 2rem; }
                .feature {
                    display: flex;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.03);
                }
                .feature h4 { margin: 0 0 0.25rem; }
                .feature p { margin: 0; font-size: 0.875rem; }
                .about-visual { position: relative; }
                .years-card { padding: 2.5rem; }
                .years-value { font-size: 4.5rem; font-weight: 700; }
                .years-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                .floating-stat {
                    position: absolute;
                    padding: 1rem;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    animation: float 5s ease-in-out infinite;
                }
                .floating-stat.left { left: -2rem; top: 25%; }
                .floating-stat.right { right: -2rem; bottom: 25%; animation-delay: 1s; }
                .floating-stat strong { display: block; font-size: 1.5rem; color: #22d3ee; }
                .floating-stat span { font-size: 0.75rem; color: #9ca3af; }
                @keyframes float { 50% { transform: translateY(-10px); } }
                @media (max-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr; }
                    .floating-stat { display: none; }
                }
                "#}
            </style>
            <div class="container about-grid">
                <div>
                    <span class="section-tag">{"About FortiSecure"}</span>
                    <h2>{"Your Trusted Partner in "}<span class="gradient-text">{"Assessment Excellence"}</span></h2>
                    <p class="muted">
                        {"We specialize in providing end-to-end examination and educational support solutions powered by modern technology and reliable infrastructure. From renting IT equipment to managing entire test centers, we help institutions, universities, corporates, recruitment agencies, and government organizations conduct secure and hassle-free assessments."}
                    </p>
                    <div class="feature-grid">
                        { for ABOUT_FEATURES.iter().map(|feature| html! {
                            <div class="feature" key={feature.title}>
                                <span>{feature.icon}</span>
                                <div>
                                    <h4>{feature.title}</h4>
                                    <p class="muted">{feature.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="about-visual">
                    <div class="glass-card years-card">
                        <div class="years-value gradient-text">{"10+"}</div>
                        <div class="years-title">{"Years of Excellence"}</div>
                        <p class="muted">{"Delivering trusted technology solutions across India"}</p>
                    </div>
                    <div class="glass-card floating-stat left">
                        <strong>{"1M+"}</strong>
                        <span>{"Candidates"}</span>
                    </div>
                    <div class="glass-card floating-stat right">
                        <strong>{"50+"}</strong>
                        <span>{"Cities Covered"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
