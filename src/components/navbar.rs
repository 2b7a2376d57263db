use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::dom::hooks::use_frame_task;
use crate::dom::listener::ScopedListener;
use crate::dom::navigation::{event_within, scroll_to_section};
use crate::dom::runtime::FrameTask;
use crate::dom::tasks::NavbarTask;
use crate::nav::{MenuAction, MenuState, NavbarCurves};
use crate::Route;

const NAV_CONTAINER: &str = ".navbar-container";

const SECTIONS: &[(&str, &str)] = &[("hero", "Home"), ("about", "About Us"), ("contact", "Contact")];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(|| MenuState::Closed);
    let nav_ref = use_node_ref();

    {
        let nav_ref = nav_ref.clone();
        use_frame_task(move || match NavbarCurves::new(config::site().navbar_scroll_range) {
            Ok(curves) => Some(Box::new(NavbarTask::new(nav_ref, curves)) as Box<dyn FrameTask>),
            Err(e) => {
                warn!("Navbar scroll styling disabled: {}", e);
                None
            }
        });
    }

    // Close the mobile menu on any press outside the navbar while it is open.
    {
        let open_state = *menu;
        let menu = menu.clone();
        use_effect_with_deps(
            move |state: &MenuState| {
                let listener = if state.is_open() {
                    web_sys::window()
                        .and_then(|window| window.document())
                        .and_then(|document| {
                            let state = *state;
                            ScopedListener::new(&document, "mousedown", move |event| {
                                let inside_nav = event_within(&event, NAV_CONTAINER);
                                let next = state.apply(MenuAction::PointerDown { inside_nav });
                                if next != state {
                                    menu.set(next);
                                }
                            })
                        })
                } else {
                    None
                };
                move || drop(listener)
            },
            open_state,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.apply(MenuAction::Toggle));
        })
    };

    let go_to = |section: &'static str| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section, config::site().header_offset);
            menu.set(menu.apply(MenuAction::Navigate));
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.apply(MenuAction::Navigate));
        })
    };

    html! {
        <nav ref={nav_ref} class="navbar-container">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    <img src="/images/logo.png" alt="OneThrive Logo" />
                </Link<Route>>

                <div class="navbar-links">
                    {
                        for SECTIONS.iter().map(|(id, label)| html! {
                            <button class="navbar-link" onclick={go_to(*id)}>{*label}</button>
                        })
                    }
                    <Link<Route> to={Route::Contact} classes="navbar-cta">
                        {"Get Started"}
                    </Link<Route>>
                </div>

                <button
                    class="navbar-burger"
                    onclick={toggle_menu}
                    aria-expanded={menu.is_open().to_string()}
                >
                    <span class="sr-only">{"Open main menu"}</span>
                    {
                        if menu.is_open() {
                            html! {
                                <svg class="navbar-icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                </svg>
                            }
                        } else {
                            html! {
                                <svg class="navbar-icon" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                </svg>
                            }
                        }
                    }
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="navbar-mobile">
                            {
                                for SECTIONS.iter().map(|(id, label)| html! {
                                    <button class="navbar-mobile-link" onclick={go_to(*id)}>{*label}</button>
                                })
                            }
                            <div onclick={close_menu}>
                                <Link<Route> to={Route::Contact} classes="navbar-cta navbar-mobile-cta">
                                    {"Get Started"}
                                </Link<Route>>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .navbar-container {
                        position: fixed;
                        width: 100%;
                        z-index: 50;
                        top: 0;
                    }

                    .navbar-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .navbar-logo img {
                        height: 3rem;
                        width: auto;
                    }

                    .navbar-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .navbar-link {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: color 0.3s, transform 0.2s;
                    }

                    .navbar-link:hover {
                        color: white;
                        transform: scale(1.05);
                    }

                    .navbar-link:active {
                        transform: scale(0.95);
                    }

                    .navbar-cta {
                        background: #22C55E;
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.3s;
                    }

                    .navbar-cta:hover {
                        background: #1a9e4a;
                    }

                    .navbar-burger {
                        display: none;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        padding: 0.5rem;
                        border-radius: 0.375rem;
                        cursor: pointer;
                    }

                    .navbar-burger:hover {
                        color: white;
                        background: #374151;
                    }

                    .navbar-icon {
                        display: block;
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .navbar-mobile {
                        display: none;
                        padding: 0.5rem 0.5rem 0.75rem;
                        background: rgba(31, 41, 55, 0.95);
                        border-radius: 0 0 0.5rem 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        animation: navbar-drop 0.3s ease-out;
                    }

                    .navbar-mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        background: none;
                        border: none;
                        color: #d1d5db;
                        padding: 0.5rem 0.75rem;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                    }

                    .navbar-mobile-link:hover {
                        color: white;
                    }

                    .navbar-mobile-cta {
                        display: block;
                        margin-top: 0.25rem;
                    }

                    @keyframes navbar-drop {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    @media (max-width: 768px) {
                        .navbar-links {
                            display: none;
                        }

                        .navbar-burger {
                            display: inline-flex;
                        }

                        .navbar-mobile {
                            display: block;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
