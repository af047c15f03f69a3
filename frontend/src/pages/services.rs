use yew::prelude::*;

use crate::components::service_modal::ServiceModal;
use crate::content::{Service, SECTION_SERVICES, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    // At most one service is open; picking another replaces it.
    let selected = use_state(|| None::<&'static Service>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id={SECTION_SERVICES} class="section-padding services">
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    padding: 2rem;
                    text-align: left;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                    animation: fadeUp 0.6s ease-out both;
                }
                .service-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                    font-size: 1.6rem;
                    margin-bottom: 1.25rem;
                }
                .service-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
                .service-card:hover h3 { color: #22d3ee; }
                .learn-more { color: #22d3ee; font-size: 0.875rem; font-weight: 500; }
                .service-modal-header { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
                .service-modal-header h3 { font-size: 1.75rem; margin: 0 0 0.25rem; }
                @media (max-width: 1024px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 768px) { .services-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Our Services"}</span>
                    <h2>{"Comprehensive "}<span class="gradient-text">{"Solutions"}</span></h2>
                    <p class="muted">
                        {"From equipment rental to complete examination management, we provide end-to-end technology solutions tailored to your needs."}
                    </p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(service)))
                        };
                        let delay = format!("animation-delay: {}ms;", index * 100);
                        html! {
                            <button key={service.id} class="service-card glass-card-hover" style={delay} onclick={onclick}>
                                <span class="service-icon">{service.icon}</span>
                                <h3>{service.title}</h3>
                                <p class="muted">{service.short_description}</p>
                                <span class="learn-more">{"Learn More →"}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
            <ServiceModal service={*selected} on_close={on_close} />
        </section>
    }
}
