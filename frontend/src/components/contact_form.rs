use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Toast, ToastView};
use crate::config;
use crate::contact::{self, ContactError, ContactRequest};
use crate::content::{selectable_service, CONTACT_SERVICE_OPTIONS};

pub enum ContactFormMsg {
    SetName(String),
    SetEmail(String),
    SetService(String),
    SetMessage(String),
    Submit,
    Submitted(Result<(), ContactError>),
    DismissToast,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Preselects a service, e.g. when arriving from a service page.
    #[prop_or_default]
    pub service: Option<AttrValue>,
}

pub struct ContactForm {
    form: ContactRequest,
    submitting: bool,
    error: Option<String>,
    toast: Option<Toast>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let service = match ctx.props().service.as_deref() {
            Some(requested) => match selectable_service(requested) {
                Some(option) => option.to_string(),
                None => {
                    warn!("Ignoring unknown preselected service {:?}", requested);
                    String::new()
                }
            },
            None => String::new(),
        };

        Self {
            form: ContactRequest { service, ..ContactRequest::default() },
            submitting: false,
            error: None,
            toast: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetName(name) => {
                self.form.name = name;
                true
            }
            ContactFormMsg::SetEmail(email) => {
                self.form.email = email;
                true
            }
            ContactFormMsg::SetService(service) => {
                self.form.service = service;
                true
            }
            ContactFormMsg::SetMessage(message) => {
                self.form.message = message;
                true
            }
            ContactFormMsg::Submit => {
                if self.submitting {
                    return false;
                }
                let request = self.form.trimmed();
                if let Err(e) = request.validate() {
                    self.error = Some(e.to_string());
                    return true;
                }

                self.error = None;
                self.submitting = true;
                let transport = config::contact_transport();
                info!("Submitting contact form for {}", request.service);
                ctx.link().send_future(async move {
                    ContactFormMsg::Submitted(contact::submit(&transport, &request).await)
                });
                true
            }
            ContactFormMsg::Submitted(Ok(())) => {
                self.submitting = false;
                self.form = ContactRequest::default();
                self.toast = Some(Toast::success(
                    "Message Sent!",
                    "Thank you for reaching out. I'll get back to you within 24 hours.",
                ));
                true
            }
            ContactFormMsg::Submitted(Err(e)) => {
                warn!("Contact submission failed: {}", e);
                self.submitting = false;
                self.toast = Some(Toast::error("Message not sent", e.to_string()));
                true
            }
            ContactFormMsg::DismissToast => {
                self.toast = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_dismiss = ctx.link().callback(|_: ()| ContactFormMsg::DismissToast);

        html! {
            <>
                <form class="contact-form glass-card" {onsubmit} novalidate={true}>
                    if let Some(error) = &self.error {
                        <div class="form-error" role="alert">{ error }</div>
                    }
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"Your Name"}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                placeholder="John Doe"
                                required={true}
                                value={self.form.name.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    ContactFormMsg::SetName(input.value())
                                })}
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="john@example.com"
                                required={true}
                                value={self.form.email.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    ContactFormMsg::SetEmail(input.value())
                                })}
                            />
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="service">{"Service Needed"}</label>
                        <select
                            id="service"
                            name="service"
                            required={true}
                            onchange={ctx.link().callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                ContactFormMsg::SetService(select.value())
                            })}
                        >
                            <option value="" selected={self.form.service.is_empty()}>{"Select a service"}</option>
                            { for CONTACT_SERVICE_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={self.form.service == *option}>{*option}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="message">{"Your Message"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            placeholder="Tell me about your project..."
                            required={true}
                            value={self.form.message.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                ContactFormMsg::SetMessage(input.value())
                            })}
                        />
                    </div>
                    <button type="submit" class="btn-primary btn-block" disabled={self.submitting}>
                        if self.submitting {
                            <span class="spinner" aria-label="Sending"></span>
                        } else {
                            {"Send Message ➤"}
                        }
                    </button>
                </form>
                <ToastView toast={self.toast.clone()} {on_dismiss} />
            </>
        }
    }
}
