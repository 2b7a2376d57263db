use yew::prelude::*;

use crate::components::motion::{InView, InViewEffect, ScrollAnimation};
use crate::content::{STATS, STAT_STAGGER};

/// Headline numbers followed by the team collaboration pitch.
#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="section-container">
                <div class="stats-grid">
                    {
                        for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <InView effect={InViewEffect::FadeUp} delay={index as f64 * STAT_STAGGER}>
                                <div class="stat-card">
                                    <h3 class="stat-number">{stat.number}</h3>
                                    <p class="stat-text">{stat.text}</p>
                                </div>
                            </InView>
                        })
                    }
                </div>

                <div class="collab">
                    <ScrollAnimation>
                        <div class="split">
                            <div class="split-half">
                                <h2 class="collab-title">{"Team Collaboration"}</h2>
                                <p class="collab-text">
                                    {"Our team-building activities are designed to foster collaboration, improve communication, and strengthen bonds between team members. We create immersive experiences that turn colleagues into communities."}
                                </p>
                                <a href="#services" class="pill-button">{"Learn More"}</a>
                            </div>
                            <div class="split-half">
                                <InView effect={InViewEffect::Zoom} class="framed-image">
                                    <img src="/images/teamcollab.png" alt="Team Collaboration" />
                                </InView>
                            </div>
                        </div>
                    </ScrollAnimation>
                </div>
            </div>

            <style>
                {r#"
                    .stats {
                        padding: 8rem 0;
                        background: white;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }

                    .stat-card {
                        text-align: center;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        background: white;
                        border: 1px solid #f3f4f6;
                        cursor: pointer;
                        transition: transform 0.3s, box-shadow 0.3s, background-color 0.3s;
                    }

                    .stat-card:hover {
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
                        background-color: #f8fafc;
                    }

                    .stat-number {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #22C55E;
                        margin-bottom: 1rem;
                        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }

                    .stat-number:hover {
                        transform: scale(1.1);
                    }

                    .stat-text {
                        color: #4b5563;
                        font-size: 1.125rem;
                        font-weight: 500;
                        transition: color 0.3s;
                    }

                    .stat-text:hover {
                        color: #22C55E;
                    }

                    .collab {
                        margin-top: 6rem;
                    }

                    .collab-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: black;
                        margin-bottom: 1.5rem;
                    }

                    .collab-text {
                        color: #4b5563;
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                        line-height: 1.7;
                    }

                    @media (max-width: 1024px) {
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .stats-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
