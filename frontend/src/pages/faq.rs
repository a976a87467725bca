use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::animation::{self, FrameTask};
use crate::config;
use crate::controllers::accessibility::{aria_bool, faq_answer_id, faq_question_id, is_activation_key};

/// Exclusive-expand state: at most one entry open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    /// Collapses everything, then opens `index` unless it was the one open.
    /// Indices past the end leave the state untouched.
    pub fn activate(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let was_open = self.expanded == Some(index);
        Self {
            len: self.len,
            expanded: if was_open { None } else { Some(index) },
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need a math background to start?",
        answer: "No. High school algebra is enough for the beginner roadmap. Statistics and the math behind machine learning are covered as you go.",
    },
    FaqEntry {
        question: "How long does it take to become job ready?",
        answer: "Most learners following the beginner roadmap part time reach an entry level portfolio in six to nine months. Durations on each step are estimates, not deadlines.",
    },
    FaqEntry {
        question: "Should I learn Python or R first?",
        answer: "Python. It has the broader ecosystem for data work, machine learning and deployment, and every roadmap here assumes it.",
    },
    FaqEntry {
        question: "Is the roadmap really free?",
        answer: "Yes. Generating a roadmap happens entirely in your browser and nothing you select is sent anywhere.",
    },
    FaqEntry {
        question: "What if I already know some of the steps?",
        answer: "Skip them. Pick the level that matches where you are and treat earlier steps as a checklist rather than a requirement.",
    },
];

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

fn answer_element(index: usize) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(&faq_answer_id(index))?
        .dyn_into::<HtmlElement>()
        .ok()
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_state(|| Accordion::new(props.entries.len()));
    let slide = use_mut_ref(|| None::<FrameTask>);

    // Answer panels follow the state machine; an unfinished slide is stopped first.
    {
        let len = props.entries.len();
        use_effect_with_deps(
            move |state: &Accordion| {
                if let Some(task) = slide.borrow_mut().take() {
                    task.stop();
                }
                for index in 0..len {
                    let Some(answer) = answer_element(index) else { continue };
                    if state.is_expanded(index) {
                        match animation::slide_down(&answer, config::DEFAULT_ANIMATION_MS) {
                            Ok(task) => *slide.borrow_mut() = Some(task),
                            Err(err) => warn!("FAQ answer not animated: {}", err),
                        }
                    } else {
                        animation::reset(&answer);
                    }
                }
                || ()
            },
            *accordion,
        );
    }

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let expanded = accordion.is_expanded(index);
                    let onclick = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.set(accordion.activate(index));
                        })
                    };
                    let onkeydown = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if is_activation_key(&e.key()) {
                                e.prevent_default();
                                accordion.set(accordion.activate(index));
                            }
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", expanded.then(|| "active"))}>
                            <div
                                class="faq-question"
                                role="button"
                                tabindex="0"
                                id={faq_question_id(index)}
                                aria-expanded={aria_bool(expanded)}
                                aria-controls={faq_answer_id(index)}
                                {onclick}
                                {onkeydown}
                            >
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if expanded { "−" } else { "+" }}</span>
                            </div>
                            <div class="faq-answer" id={faq_answer_id(index)} aria-labelledby={faq_question_id(index)}>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
