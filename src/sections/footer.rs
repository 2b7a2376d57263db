use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_SERVICES, SERVICES};

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = config::site();
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="section-container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="/images/logo.png" alt={site.company.clone()} class="footer-logo" />
                        <p class="footer-blurb">
                            {"Creating engaging workplace experiences that bring teams together and drive business success."}
                        </p>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Quick Links"}</h4>
                        <ul class="footer-list">
                            <li><a href="#about">{"About Us"}</a></li>
                            <li><a href="#services">{"Services"}</a></li>
                            <li><a href="#contact">{"Contact"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Services"}</h4>
                        <ul class="footer-list">
                            {
                                for SERVICES.iter().take(FOOTER_SERVICES).map(|service| html! {
                                    <li><a href="#services">{service.title}</a></li>
                                })
                            }
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All Rights Reserved.", year, site.company)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .footer {
                        background: black;
                        color: white;
                        padding: 4rem 0 2rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                    }

                    .footer-logo {
                        height: 3rem;
                        margin-bottom: 1rem;
                    }

                    .footer-blurb {
                        color: #9ca3af;
                        max-width: 24rem;
                        line-height: 1.6;
                    }

                    .footer-heading {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .footer-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .footer-list li {
                        margin-bottom: 0.5rem;
                    }

                    .footer-list a,
                    .footer-legal a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-list a:hover,
                    .footer-legal a:hover {
                        color: #22C55E;
                    }

                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }

                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }

                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
