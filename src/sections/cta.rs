use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::motion::Reveal;
use crate::Route;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <div class="section-container">
                <Reveal>
                    <div class="cta-body">
                        <h2 class="cta-title">{"Ready to Transform Your Workplace?"}</h2>
                        <p class="cta-text">
                            {"Join the companies that have already elevated their team culture with OneThrive. Let's create an engaging workplace together."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="cta-button">
                            {"Get Started Today"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .cta {
                        padding: 8rem 0;
                        background: linear-gradient(to bottom right, #22C55E, #1a9e4a);
                        color: white;
                    }

                    .cta-body {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .cta-title {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                        line-height: 1.2;
                    }

                    .cta-text {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.9);
                        margin-bottom: 3rem;
                        line-height: 1.6;
                    }

                    .cta-button {
                        display: inline-block;
                        background: white;
                        color: #22C55E;
                        padding: 1.25rem 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.25rem;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                        transition: transform 0.2s, opacity 0.3s;
                    }

                    .cta-button:hover {
                        opacity: 0.9;
                        transform: scale(1.05);
                    }

                    .cta-button:active {
                        transform: scale(0.95);
                    }
                "#}
            </style>
        </section>
    }
}
