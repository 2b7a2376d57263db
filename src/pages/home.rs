use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::config;
use crate::dom::navigation::scroll_to_section;
use crate::sections::{
    about::About, contact::Contact, cta::CallToAction, footer::Footer, hero::Hero,
    services::Services, stats::Stats,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Section id to bring into view once the page has mounted.
    #[prop_or_default]
    pub focus: Option<AttrValue>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    {
        let focus = props.focus.clone();
        use_effect_with_deps(
            move |focus| {
                if let Some(section) = focus {
                    debug!("Focusing #{}", section);
                    scroll_to_section(section, config::site().header_offset);
                }
                || ()
            },
            focus,
        );
    }

    html! {
        <div class="home">
            <ProgressBar />
            <Hero />
            <Stats />
            <About />
            <Services />
            <CallToAction />
            <Contact />
            <Footer />

            <style>
                {r#"
                    .home {
                        overflow-x: hidden;
                    }

                    .section-container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .section-title {
                        font-size: 3rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .split {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }

                    .split-half {
                        flex: 1 1 0;
                        min-width: 0;
                    }

                    .motion-layer {
                        will-change: transform, opacity;
                    }

                    .pill-button {
                        display: inline-block;
                        background: #22C55E;
                        color: white;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: background 0.3s, transform 0.2s;
                    }

                    .pill-button:hover {
                        background: #1a9e4a;
                        transform: scale(1.05);
                    }

                    .pill-button:active {
                        transform: scale(0.95);
                    }

                    .framed-image {
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .framed-image img {
                        display: block;
                        width: 100%;
                        height: auto;
                    }

                    @media (max-width: 768px) {
                        .split {
                            flex-direction: column;
                        }

                        .section-title {
                            font-size: 2.25rem;
                            margin-bottom: 3rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off from the team."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Home"}
            </Link<Route>>

            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: black;
                        color: white;
                        text-align: center;
                        padding: 0 1rem;
                    }

                    .not-found h1 {
                        font-size: 6rem;
                        font-weight: 700;
                        color: #22C55E;
                        margin: 0 0 1rem;
                    }

                    .not-found p {
                        color: #d1d5db;
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }

                    .not-found-link {
                        color: white;
                        background: #22C55E;
                        padding: 0.875rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
