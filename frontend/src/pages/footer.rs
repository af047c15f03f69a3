use chrono::Datelike;
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::content::{
    anchor, ADDRESS, BUSINESS_HOURS, EMAIL, FOOTER_SERVICES, PHONE_DISPLAY, SECTION_HOME,
    SECTION_LINKS, SECTION_SERVICES,
};

fn scroll_link(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        browser::scroll_to_section(&anchor(section));
    })
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let socials = [
        ("WhatsApp", "💬", config::whatsapp().chat_url()),
        ("LinkedIn", "in", "#".to_string()),
        ("Twitter", "𝕏", "#".to_string()),
        ("Email", "✉", format!("mailto:{}", EMAIL)),
    ];

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    padding: 5rem 1.5rem 2rem;
                    border-top: 1px solid rgba(34, 211, 238, 0.3);
                    background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.02));
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    margin-bottom: 3rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                }
                .brand-accent { color: #22d3ee; }
                .socials { display: flex; gap: 0.75rem; }
                .socials a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.05);
                    color: #9ca3af;
                    text-decoration: none;
                }
                .socials a:hover { color: #22d3ee; }
                .site-footer h4 { margin: 0 0 1rem; }
                .site-footer ul { list-style: none; padding: 0; margin: 0; }
                .site-footer li { margin-bottom: 0.75rem; font-size: 0.875rem; color: #9ca3af; }
                .site-footer li a { color: #9ca3af; text-decoration: none; }
                .site-footer li a:hover { color: #22d3ee; }
                .info-label { display: block; color: #fff; font-weight: 500; }
                .footer-bottom {
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .footer-bottom a { color: #9ca3af; text-decoration: none; margin-left: 1.5rem; }
                @media (max-width: 1024px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; gap: 1rem; align-items: center; }
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href={anchor(SECTION_HOME)} class="footer-brand" onclick={scroll_link(SECTION_HOME)}>
                            <span class="brand-mark">{"FS"}</span>
                            <span>{"Forti"}<span class="brand-accent">{"Secure"}</span></span>
                        </a>
                        <p class="muted">
                            {"End-to-end examination and technology solutions for institutions, corporates, and government organizations."}
                        </p>
                        <div class="socials">
                            { for socials.into_iter().map(|(label, icon, href)| html! {
                                <a key={label} href={href} target="_blank" rel="noopener noreferrer" aria-label={label}>
                                    {icon}
                                </a>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for SECTION_LINKS.iter().map(|link| html! {
                                <li key={link.name}>
                                    <a href={anchor(link.section)} onclick={scroll_link(link.section)}>{link.name}</a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Our Services"}</h4>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|service| html! {
                                <li key={*service}>
                                    <a href={anchor(SECTION_SERVICES)} onclick={scroll_link(SECTION_SERVICES)}>{*service}</a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact Info"}</h4>
                        <ul>
                            <li><span class="info-label">{"Address:"}</span>{ADDRESS}</li>
                            <li><span class="info-label">{"Phone:"}</span>{PHONE_DISPLAY}</li>
                            <li><span class="info-label">{"Email:"}</span>{EMAIL}</li>
                            <li><span class="info-label">{"Hours:"}</span>{BUSINESS_HOURS}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} FortiSecure. All rights reserved.", year)}</p>
                    <div>
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
