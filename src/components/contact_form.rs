use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl DraftError {
    pub fn message(self) -> &'static str {
        match self {
            DraftError::MissingName => "Please tell us your name.",
            DraftError::InvalidEmail => "Please enter a valid email address.",
            DraftError::MissingMessage => "Please write a short message.",
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(DraftError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(DraftError::MissingMessage);
        }
        Ok(())
    }

    pub fn mailto(&self, to: &str) -> String {
        let subject = format!("Enquiry from {}", self.name.trim());
        let body = format!(
            "{}\n\n{}\n{}",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let error = use_state(|| None::<DraftError>);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    error.set(None);
                    let href = draft.mailto(&config::site().contact_email);
                    info!("Opening mail client for contact enquiry");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&href);
                    }
                }
                Err(e) => error.set(Some(e)),
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="contact-form-row">
                <div>
                    <label class="contact-label">{"Name"}</label>
                    <input
                        type="text"
                        class="contact-input"
                        placeholder="Your name"
                        value={draft.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div>
                    <label class="contact-label">{"Email"}</label>
                    <input
                        type="email"
                        class="contact-input"
                        placeholder="your@email.com"
                        value={draft.email.clone()}
                        oninput={on_email}
                    />
                </div>
            </div>
            <div>
                <label class="contact-label">{"Message"}</label>
                <textarea
                    class="contact-input contact-message"
                    placeholder="Your message"
                    value={draft.message.clone()}
                    oninput={on_message}
                />
            </div>
            {
                if let Some(e) = *error {
                    html! { <p class="contact-error" role="alert">{ e.message() }</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="contact-submit">{"Send Message"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(draft(" ", "x", "").validate(), Err(DraftError::MissingName));
        assert_eq!(draft("Asha", "asha", "").validate(), Err(DraftError::InvalidEmail));
        assert_eq!(
            draft("Asha", "asha@corp.in", "  ").validate(),
            Err(DraftError::MissingMessage)
        );
        assert_eq!(draft("Asha", "asha@corp.in", "Hi").validate(), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@bco"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn test_mailto_is_encoded() {
        let href = draft("Asha R", "asha@corp.in", "Offsite for 40 people & lunch?")
            .mailto("info.onethrive@gmail.com");
        assert!(href.starts_with("mailto:info.onethrive@gmail.com?subject=Enquiry%20from%20Asha%20R&body="));
        assert!(href.contains("Offsite%20for%2040%20people%20%26%20lunch%3F"));
        assert!(href.contains("%0A%0AAsha%20R%0Aasha%40corp.in"));
    }
}
