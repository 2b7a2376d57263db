use yew::prelude::*;

use crate::components::motion::{Reveal, ScrollAnimation};
use crate::content::{SERVICES, SERVICE_STAGGER};
use crate::motion::reveal::Direction;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-container">
                <Reveal>
                    <h2 class="services-title">{"Tailored Services for Your Company's Growth"}</h2>
                </Reveal>

                <div class="services-grid">
                    {
                        for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ScrollAnimation direction={Direction::Up} delay={index as f64 * SERVICE_STAGGER}>
                                <div class="service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3 class="service-name">{service.title}</h3>
                                    <p class="service-text">{service.description}</p>
                                </div>
                            </ScrollAnimation>
                        })
                    }
                </div>

                <div class="services-more">
                    <a href="#contact" class="pill-button">{"Explore All Services"}</a>
                </div>
            </div>

            <style>
                {r#"
                    .services {
                        padding: 5rem 0;
                        background: #111827;
                    }

                    .services-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                        color: white;
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .service-card {
                        background: #1f2937;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        height: 100%;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }

                    .service-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }

                    .service-icon {
                        color: #22C55E;
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }

                    .service-name {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                        color: white;
                    }

                    .service-text {
                        color: #d1d5db;
                        line-height: 1.6;
                    }

                    .services-more {
                        margin-top: 4rem;
                        text-align: center;
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
