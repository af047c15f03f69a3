use fortisecure_shared::Field;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser;
use crate::components::toast::{notify, Notice, ToastContext};
use crate::config;
use crate::contact::controller::{
    ContactFormController, SubmissionOutcome, SubmissionTicket, SubmitRejected,
};
use crate::contact::transport::{self, DeliveryHandle, SubmissionError};
use crate::content::{CONTACT_CHANNELS, SECTION_CONTACT};

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Completed(SubmissionTicket, Result<(), SubmissionError>),
    Cancel,
    QuickContact,
}

pub struct Contact {
    form: ContactFormController,
    delivery: Option<DeliveryHandle>,
    toasts: Option<ToastContext>,
    _toast_listener: Option<ContextHandle<ToastContext>>,
}

impl Contact {
    fn notify(&self, notice: Notice) {
        match &self.toasts {
            Some(toasts) => notify(toasts, notice),
            None => info!("No toast surface mounted: {}", notice.text),
        }
    }

    fn render_field(&self, field: Field, label: &str, input: Html) -> Html {
        let error = self.form.errors().message(field).map(str::to_owned);
        html! {
            <div class="form-field">
                <label for={field.as_str()}>{label}</label>
                <div class={classes!("input-wrap", error.is_some().then(|| "has-error"))}>
                    { input }
                </div>
                if let Some(message) = error {
                    <p class="field-error" id={format!("{}-error", field.as_str())}>{message}</p>
                }
            </div>
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        });
        html! {
            <input
                id={field.as_str()}
                name={field.as_str()}
                type={kind}
                placeholder={placeholder}
                value={self.form.input().get(field).to_string()}
                aria-invalid={self.form.errors().get(field).is_some().to_string()}
                oninput={oninput}
            />
        }
    }
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (toasts, listener) = match ctx.link().context::<ToastContext>(Callback::noop()) {
            Some((toasts, handle)) => (Some(toasts), Some(handle)),
            None => (None, None),
        };

        Self {
            form: ContactFormController::new(config::whatsapp()),
            delivery: None,
            toasts,
            _toast_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.submit() {
                Ok(pending) => {
                    let ticket = pending.ticket;
                    let (delivery, handle) =
                        transport::start(config::submit_mode(), pending.submission);
                    self.delivery = Some(handle);
                    ctx.link().send_future(async move {
                        ContactMsg::Completed(ticket, delivery.await)
                    });
                    true
                }
                Err(SubmitRejected::InFlight) => false,
                Err(SubmitRejected::Invalid(errors)) => {
                    info!("Contact form has {} invalid field(s)", errors.len());
                    true
                }
            },
            ContactMsg::Completed(ticket, result) => match self.form.complete(ticket, result) {
                SubmissionOutcome::Sent { notice, deep_link } => {
                    self.delivery = None;
                    self.notify(notice);
                    browser::open_in_new_tab(deep_link.url());
                    true
                }
                SubmissionOutcome::Failed { notice } => {
                    self.delivery = None;
                    self.notify(notice);
                    true
                }
                SubmissionOutcome::Ignored => false,
            },
            ContactMsg::Cancel => {
                // Stops backoff waits and aborts the fetch still in flight.
                if let Some(delivery) = self.delivery.take() {
                    delivery.cancel();
                }
                self.form.cancel()
            }
            ContactMsg::QuickContact => {
                browser::open_in_new_tab(self.form.quick_contact().url());
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(delivery) = self.delivery.take() {
            delivery.cancel();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });
        let submitting = self.form.is_submitting();

        html! {
            <section id={SECTION_CONTACT} class="section-padding contact">
                <style>
                    {r#"
                    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
                    .contact-form { padding: 2rem; }
                    .contact-form h3 { font-size: 1.5rem; margin: 0 0 1.5rem; }
                    .form-field { margin-bottom: 1.25rem; }
                    .form-field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .input-wrap input, .input-wrap textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font: inherit;
                        resize: none;
                        transition: border-color 0.3s ease;
                    }
                    .input-wrap input:focus, .input-wrap textarea:focus { outline: none; border-color: #22d3ee; }
                    .input-wrap.has-error input, .input-wrap.has-error textarea { border-color: #ef4444; }
                    .field-error { margin: 0.375rem 0 0; font-size: 0.875rem; color: #ef4444; }
                    .spinner {
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .cancel-link {
                        display: block;
                        margin: 0.75rem auto 0;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                        text-decoration: underline;
                    }
                    .contact-side { display: flex; flex-direction: column; gap: 1.5rem; }
                    .channel {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.25rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .channel-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(45deg, #6366f1, #22d3ee);
                    }
                    .channel h4 { margin: 0; }
                    .channel p { margin: 0.25rem 0 0; font-size: 0.875rem; }
                    .quick-response { padding: 2rem; text-align: center; }
                    .quick-response h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
                    @media (max-width: 1024px) { .contact-grid { grid-template-columns: 1fr; } }
                    "#}
                </style>
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">{"Contact Us"}</span>
                        <h2>{"Let's Start a "}<span class="gradient-text">{"Conversation"}</span></h2>
                        <p class="muted">{"Have questions about our services? We're here to help. Reach out to us anytime."}</p>
                    </div>
                    <div class="contact-grid">
                        <div class="glass-card contact-form">
                            <h3>{"Send us a Message"}</h3>
                            <form onsubmit={onsubmit} novalidate=true>
                                { self.render_field(Field::Name, "Full Name",
                                    self.text_input(ctx, Field::Name, "text", "John Doe")) }
                                { self.render_field(Field::Email, "Email Address",
                                    self.text_input(ctx, Field::Email, "email", "john@example.com")) }
                                { self.render_field(Field::Phone, "Phone Number",
                                    self.text_input(ctx, Field::Phone, "tel", "+91 98765 43210")) }
                                { self.render_field(Field::Message, "Your Message", html! {
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="4"
                                        placeholder="Tell us about your requirements..."
                                        value={self.form.input().message.clone()}
                                        oninput={on_message}
                                    />
                                }) }
                                <button type="submit" class="btn-primary full-width" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                    } else {
                                        <span>{"➤"}</span>
                                    }
                                    {self.form.submit_label()}
                                </button>
                                if submitting {
                                    <button type="button" class="cancel-link" onclick={ctx.link().callback(|_| ContactMsg::Cancel)}>
                                        {"Cancel"}
                                    </button>
                                }
                            </form>
                        </div>
                        <div class="contact-side">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <a class="channel glass-card-hover" href={channel.href} key={channel.title}>
                                    <div class="channel-icon">{channel.icon}</div>
                                    <div>
                                        <h4>{channel.title}</h4>
                                        <p class="muted">{channel.value}</p>
                                    </div>
                                </a>
                            }) }
                            <div class="glass-card quick-response">
                                <h3>{"Quick Response"}</h3>
                                <p class="muted">{"Get instant assistance via WhatsApp"}</p>
                                <button class="btn-whatsapp full-width" onclick={ctx.link().callback(|_| ContactMsg::QuickContact)}>
                                    {"Chat with Us Now"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        }
    }
}
