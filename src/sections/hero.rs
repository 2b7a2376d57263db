use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero_canvas::HeroCanvas;
use crate::components::typewriter::TypewriterHeading;
use crate::content::HEADLINE;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-backdrop">
                <HeroCanvas />
            </div>

            <div class="hero-container">
                <div class="hero-copy">
                    <TypewriterHeading text={HEADLINE} class="hero-title" />
                    <p class="hero-lead">
                        {"We curate "}
                        <span class="hero-accent">{"immersive experiences"}</span>
                        {" that turn colleagues into communities and challenges into opportunities."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="hero-cta">
                        {"Get Started Today"}
                    </Link<Route>>
                </div>

                <div class="hero-image">
                    <img src="/images/party.png" alt="Team Celebration" />
                </div>
            </div>

            <div class="hero-scroll-hint">
                <span>{"Scroll Down"}</span>
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: black;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        animation: hero-fade 1s ease-out both;
                    }

                    .hero-canvas {
                        width: 100%;
                        height: 100%;
                        display: block;
                    }

                    .hero-container {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                    }

                    .hero-copy {
                        width: 50%;
                        animation: hero-rise 0.8s ease-out both;
                    }

                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: white;
                        margin-bottom: 2rem;
                        line-height: 1.15;
                        white-space: pre-line;
                        min-height: 3.45em;
                    }

                    .typewriter-cursor {
                        animation: caret-blink 1s step-end infinite;
                        font-weight: 400;
                    }

                    .hero-lead {
                        font-size: 1.5rem;
                        color: white;
                        font-weight: 500;
                        margin-bottom: 3rem;
                        line-height: 1.6;
                    }

                    .hero-accent {
                        color: #22C55E;
                        font-weight: 600;
                    }

                    .hero-cta {
                        display: inline-block;
                        background: #22C55E;
                        color: white;
                        padding: 1.25rem 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.25rem;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                        transition: background 0.3s, transform 0.2s, box-shadow 0.3s;
                    }

                    .hero-cta:hover {
                        background: #1a9e4a;
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }

                    .hero-cta:active {
                        transform: scale(0.95);
                    }

                    .hero-image {
                        width: 50%;
                        animation: hero-zoom 0.8s ease-out 0.2s both;
                    }

                    .hero-image img {
                        width: 100%;
                        height: auto;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: white;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        font-size: 0.875rem;
                        animation: hint-bounce 1.5s ease-in-out infinite;
                    }

                    .hero-scroll-hint svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        margin-top: 0.5rem;
                    }

                    @keyframes hero-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    @keyframes hero-zoom {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    @keyframes hint-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    @keyframes caret-blink {
                        50% { opacity: 0; }
                    }

                    @media (max-width: 1024px) {
                        .hero-container {
                            flex-direction: column;
                            text-align: center;
                            padding-top: 6rem;
                        }

                        .hero-copy,
                        .hero-image {
                            width: 100%;
                        }

                        .hero-title {
                            font-size: 3rem;
                        }

                        .hero-lead {
                            font-size: 1.25rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
