use yew::prelude::*;

use crate::components::motion::{InView, InViewEffect, ScrollAnimation};
use crate::motion::reveal::Direction;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="section-container">
                <ScrollAnimation>
                    <h2 class="section-title">{"ABOUT US"}</h2>
                </ScrollAnimation>

                <div class="about-body split">
                    <ScrollAnimation direction={Direction::Left} class="split-half">
                        <h3 class="about-heading">
                            {"Building Better Workplaces,"}<br />{"One Team at a Time"}
                        </h3>
                        <p class="about-text">
                            <span class="about-strong">
                                {"OneThrive is more than just an employee engagement company, we are workplace culture architects. "}
                            </span>
                            {"We know that a motivated workforce drives business success. That's why OneThrive is dedicated to delivering high-energy engagement solutions that make workplaces more dynamic, fulfilling, and productive."}
                        </p>
                        <p class="about-text">
                            {"As a new player in this space, we bring a fresh perspective, commitment to excellence, and a client-first mindset to every project, helping you build a workplace that's as dynamic as the people in it."}
                        </p>
                    </ScrollAnimation>
                    <ScrollAnimation direction={Direction::Right} class="split-half">
                        <InView effect={InViewEffect::Zoom} class="framed-image">
                            <img src="/images/work.png" alt="About OneThrive" />
                        </InView>
                    </ScrollAnimation>
                </div>
            </div>

            <style>
                {r#"
                    .about {
                        padding: 8rem 0;
                        background: black;
                        color: white;
                    }

                    .about-body {
                        max-width: 72rem;
                        margin: 0 auto;
                        gap: 4rem;
                    }

                    .about-heading {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                        line-height: 1.25;
                    }

                    .about-text {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                        line-height: 1.7;
                    }

                    .about-strong {
                        font-weight: 600;
                    }
                "#}
            </style>
        </section>
    }
}
