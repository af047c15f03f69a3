use yew::prelude::*;

use crate::pages::{
    about::About, contact::Contact, footer::Footer, hero::Hero, services::Services,
    why_choose_us::WhyChooseUs,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing">
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0b0f1a;
                    color: #f3f4f6;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                .landing section { position: relative; overflow: hidden; }
                .section-padding { padding: 6rem 1.5rem; }
                .container { max-width: 72rem; margin: 0 auto; }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 { font-size: 2.5rem; margin: 0 0 1rem; }
                .section-tag {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #22d3ee;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .gradient-text {
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .muted { color: #9ca3af; line-height: 1.7; }
                .glass-card {
                    background: rgba(20, 24, 38, 0.75);
                    border: 1px solid rgba(99, 102, 241, 0.15);
                    border-radius: 16px;
                    backdrop-filter: blur(10px);
                }
                .glass-card-hover {
                    background: rgba(20, 24, 38, 0.75);
                    border: 1px solid rgba(99, 102, 241, 0.15);
                    border-radius: 16px;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .glass-card-hover:hover {
                    transform: translateY(-6px);
                    border-color: rgba(34, 211, 238, 0.4);
                }
                .btn-primary, .btn-secondary, .btn-whatsapp {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.875rem 1.75rem;
                    border-radius: 12px;
                    border: none;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }
                .btn-primary { background: linear-gradient(45deg, #6366f1, #22d3ee); color: #fff; }
                .btn-secondary { background: transparent; color: #fff; border: 1px solid rgba(255, 255, 255, 0.3); }
                .btn-whatsapp { background: linear-gradient(45deg, #22c55e, #16a34a); color: #fff; }
                .btn-primary:hover:not(:disabled), .btn-secondary:hover, .btn-whatsapp:hover { transform: scale(1.02); }
                .btn-primary:disabled { opacity: 0.7; cursor: not-allowed; }
                .full-width { width: 100%; }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .section-padding { padding: 4rem 1rem; }
                    .section-header h2 { font-size: 2rem; }
                }
                "#}
            </style>
            <Hero />
            <Services />
            <About />
            <WhyChooseUs />
            <Contact />
            <Footer />
        </main>
    }
}
