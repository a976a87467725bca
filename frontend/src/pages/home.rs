use std::rc::Rc;

use log::info;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::content::RoadmapTable;
use crate::controllers::{
    accessibility::AccessibilityEnhancer,
    forms::FormEnhancer,
    performance::PerformanceOptimizer,
    smooth_scroll::{scroll_to_id, SmoothScroll},
};
use crate::error::{self, UiError};
use crate::events::{keep_mounted, Controller, Subscription};
use crate::pages::faq::{FaqAccordion, FAQ_ENTRIES};
use crate::pages::roadmap::RoadmapGenerator;
use crate::theme::ThemeToggle;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub table: Rc<RoadmapTable>,
}

/// Document-level behavior bound to the landing page markup.
pub const PAGE_CONTROLLERS: [&dyn Controller; 4] = [
    &SmoothScroll,
    &FormEnhancer,
    &PerformanceOptimizer,
    &AccessibilityEnhancer,
];

fn mount_page_controllers() -> Vec<Subscription> {
    let Some(document) = window().and_then(|w| w.document()) else {
        error::report("Page initialization", &UiError::NoDocument);
        return Vec::new();
    };
    let subscriptions = keep_mounted(
        PAGE_CONTROLLERS
            .iter()
            .map(|controller| (controller.name(), controller.mount(&document))),
    );
    info!("{} page initialized", config::APP_NAME);
    subscriptions
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="header">
            <div class="header-content">
                <a href="#top" class="logo">{"GrowinDataScience"}</a>
                <nav class="nav-links">
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <a href="#roadmap" class="nav-link">{"Roadmap"}</a>
                    <a href="#faq" class="nav-link">{"FAQ"}</a>
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Bound to this page's DOM: navigating away drops every listener and
    // coming back binds again.
    use_effect_with_deps(
        move |_| {
            let subscriptions = mount_page_controllers();
            move || drop(subscriptions)
        },
        (),
    );

    let scroll_to_roadmap = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(document) = window().and_then(|w| w.document()) {
            scroll_to_id(&document, "roadmap");
        }
    });

    html! {
        <div class="landing-page" id="top">
            <Header />

            <section class="hero">
                <h1>{"Grow Into Data Science, One Step at a Time"}</h1>
                <p class="hero-subtitle">
                    {"Tell us where you are and get a focused learning roadmap, from your first Python script to leading a data team."}
                </p>
                <button id="generateRoadmapBtn" class="btn btn-primary hero-cta" onclick={scroll_to_roadmap}>
                    {"Generate My Roadmap"}
                </button>
            </section>

            <section class="features" id="features">
                <h2>{"Why a Roadmap?"}</h2>
                <div class="features-grid">
                    <div class="feature-item card">
                        <h3>{"Ordered"}</h3>
                        <p>{"Every step builds on the one before it, so you never hit a wall of missing prerequisites."}</p>
                    </div>
                    <div class="feature-item card">
                        <h3>{"Prioritized"}</h3>
                        <p>{"High priority steps come first. Low priority ones can wait until the fundamentals feel easy."}</p>
                    </div>
                    <div class="feature-item card">
                        <h3>{"Realistic"}</h3>
                        <p>{"Each step carries an honest time estimate for someone studying part time."}</p>
                    </div>
                </div>
                <img class="features-illustration lazy" data-src="/assets/roadmap-illustration.svg" alt="Path from beginner to advanced data scientist" />
            </section>

            <section class="roadmap-section" id="roadmap">
                <h2>{"Build Your Roadmap"}</h2>
                <p>{"Pick your level and the skills you already have."}</p>
                <RoadmapGenerator table={props.table.clone()} />
            </section>

            <section class="faq-section" id="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqAccordion entries={FAQ_ENTRIES} />
            </section>

            <footer class="footer">
                <p>{"© GrowinDataScience. Learn at your own pace."}</p>
            </footer>

            <style>
                {r#"
                .header {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    backdrop-filter: blur(8px);
                    transition: backdrop-filter 0.2s ease;
                }
                .hidden {
                    display: none;
                }
                .select-wrapper.focused {
                    box-shadow: 0 0 0 2px var(--color-primary);
                }
                .faq-item .faq-answer {
                    display: none;
                }
                .faq-item.active .faq-answer {
                    display: block;
                }
                .faq-question {
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                }
                .step-badge.high { background: rgba(239, 68, 68, 0.15); }
                .step-badge.medium { background: rgba(234, 179, 8, 0.15); }
                .step-badge.low { background: rgba(34, 197, 94, 0.15); }
                #generateBtn:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}
