use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::motion::ScrollAnimation;
use crate::config;
use crate::content::tel_href;
use crate::motion::reveal::Direction;

#[function_component(Contact)]
pub fn contact() -> Html {
    let site = config::site();

    html! {
        <section id="contact" class="contact">
            <div class="section-container">
                <ScrollAnimation>
                    <h2 class="contact-title">{"Get in Touch"}</h2>
                </ScrollAnimation>

                <div class="contact-body split">
                    <ScrollAnimation direction={Direction::Left} class="split-half">
                        <ContactForm />
                    </ScrollAnimation>

                    <ScrollAnimation direction={Direction::Right} class="split-half">
                        <div class="contact-info">
                            <h3 class="contact-info-title">{"Contact Information"}</h3>

                            <div class="contact-info-item">
                                <span class="contact-info-icon">{"📞"}</span>
                                <div>
                                    <p class="contact-info-label">{"Phone"}</p>
                                    {
                                        for site.phones.iter().map(|phone| html! {
                                            <a class="contact-info-link" href={tel_href(phone)}>{phone.clone()}</a>
                                        })
                                    }
                                </div>
                            </div>

                            <div class="contact-info-item">
                                <span class="contact-info-icon">{"✉️"}</span>
                                <div>
                                    <p class="contact-info-label">{"Email"}</p>
                                    <a class="contact-info-link" href={format!("mailto:{}", site.contact_email)}>
                                        {site.contact_email.clone()}
                                    </a>
                                </div>
                            </div>

                            <div class="contact-social">
                                <a href={site.linkedin.clone()} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                    <svg viewBox="0 0 24 24" fill="currentColor">
                                        <path d="M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.34V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.06 2.06 0 1 1 0-4.13 2.06 2.06 0 0 1 0 4.13zM7.12 20.45H3.56V9h3.56v11.45zM22.22 0H1.77C.79 0 0 .77 0 1.73v20.54C0 23.23.79 24 1.77 24h20.45c.98 0 1.78-.77 1.78-1.73V1.73C24 .77 23.2 0 22.22 0z" />
                                    </svg>
                                </a>
                                <a href={site.instagram.clone()} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                        <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                                        <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                                        <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                                    </svg>
                                </a>
                            </div>
                        </div>
                    </ScrollAnimation>
                </div>
            </div>

            <style>
                {r#"
                    .contact {
                        padding: 8rem 0;
                        background: #111827;
                        color: white;
                    }

                    .contact-title {
                        font-size: 3rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .contact-body {
                        max-width: 72rem;
                        margin: 0 auto;
                        gap: 4rem;
                        align-items: flex-start;
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .contact-form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }

                    .contact-label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }

                    .contact-input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #374151;
                        background: #1f2937;
                        color: white;
                        font-size: 1rem;
                        font-family: inherit;
                        transition: border-color 0.2s;
                    }

                    .contact-input:focus {
                        outline: none;
                        border-color: #22C55E;
                    }

                    .contact-message {
                        min-height: 9rem;
                        resize: vertical;
                    }

                    .contact-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .contact-submit {
                        align-self: flex-start;
                        background: #22C55E;
                        color: white;
                        border: none;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s, transform 0.2s;
                    }

                    .contact-submit:hover {
                        background: #1a9e4a;
                        transform: scale(1.05);
                    }

                    .contact-info {
                        background: #1f2937;
                        border-radius: 1rem;
                        padding: 2.5rem;
                    }

                    .contact-info-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }

                    .contact-info-item {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .contact-info-icon {
                        font-size: 1.5rem;
                    }

                    .contact-info-label {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin: 0 0 0.25rem;
                    }

                    .contact-info-link {
                        display: block;
                        color: white;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .contact-info-link:hover {
                        color: #22C55E;
                    }

                    .contact-social {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .contact-social a {
                        color: #d1d5db;
                        transition: color 0.2s;
                    }

                    .contact-social a:hover {
                        color: #22C55E;
                    }

                    .contact-social svg {
                        width: 1.75rem;
                        height: 1.75rem;
                    }

                    @media (max-width: 768px) {
                        .contact-form-row {
                            grid-template-columns: 1fr;
                        }

                        .contact-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
