use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: Option<&'static Service>,
    pub on_close: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let Some(service) = props.service else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let inquire = Callback::from(move |_: MouseEvent| {
        let link = config::whatsapp().service_inquiry_link(service.title);
        browser::open_in_new_tab(link.url());
    });

    html! {
        <>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 12, 20, 0.8);
                    backdrop-filter: blur(4px);
                    z-index: 50;
                    animation: fadeIn 0.2s ease-out;
                }
                .service-modal {
                    position: fixed;
                    left: 50%;
                    top: 50%;
                    transform: translate(-50%, -50%);
                    width: 95vw;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    z-index: 51;
                    padding: 2rem;
                    animation: modalIn 0.25s ease-out;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .modal-close:hover { color: #fff; }
                .modal-subtitle { color: #22d3ee; font-size: 0.875rem; }
                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 0.75rem;
                    margin: 1rem 0 2rem;
                }
                .benefit {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                }
                .benefit-mark { color: #22d3ee; }
                @keyframes modalIn {
                    from { opacity: 0; transform: translate(-50%, -45%) scale(0.9); }
                    to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                }
                "#}
            </style>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="service-modal glass-card" role="dialog" aria-modal="true">
                <button class="modal-close" onclick={close} aria-label="Close modal">{"✕"}</button>
                <div class="service-modal-header">
                    <span class="service-icon">{service.icon}</span>
                    <div>
                        <h3>{service.title}</h3>
                        <p class="modal-subtitle">{"Premium Service"}</p>
                    </div>
                </div>
                <p class="muted">{service.description}</p>
                <h4>{"Key Features & Benefits"}</h4>
                <div class="benefit-grid">
                    { for service.benefits.iter().map(|benefit| html! {
                        <div class="benefit">
                            <span class="benefit-mark">{"✓"}</span>
                            <span>{*benefit}</span>
                        </div>
                    }) }
                </div>
                <button class="btn-whatsapp full-width" onclick={inquire}>
                    {"Contact on WhatsApp"}
                </button>
            </div>
        </>
    }
}
