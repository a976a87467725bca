use std::collections::BTreeSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::animation::{self, FrameTask};
use crate::config;
use crate::content::{Priority, RoadmapTable, SkillLevel, StepRecord};
use crate::controllers::smooth_scroll::scroll_to;

pub const SKILL_TAGS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("statistics", "Statistics"),
    ("sql", "SQL"),
    ("visualization", "Data Visualization"),
    ("machine-learning", "Machine Learning"),
    ("deep-learning", "Deep Learning"),
];

/// What the visitor has picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    level: Option<SkillLevel>,
    // Collected from the checkboxes but not consulted by `generate`.
    skills: BTreeSet<String>,
}

impl SelectionState {
    pub fn select_skill_level(&mut self, value: &str) {
        self.level = SkillLevel::parse(value);
    }

    pub fn level(&self) -> Option<SkillLevel> {
        self.level
    }

    pub fn can_generate(&self) -> bool {
        self.level.is_some()
    }

    pub fn toggle_skill_tag(&mut self, tag: &str, present: bool) {
        if present {
            self.skills.insert(tag.to_string());
        } else {
            self.skills.remove(tag);
        }
    }

    pub fn selected_skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// `None` when no level is selected.
    pub fn generate(&self, table: &RoadmapTable) -> Option<Roadmap> {
        let level = self.level?;
        let steps = table
            .steps(level)
            .iter()
            .enumerate()
            .map(|(index, record)| RenderedStep {
                number: index + 1,
                record: record.clone(),
            })
            .collect();
        Some(Roadmap { level, steps })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub level: SkillLevel,
    pub steps: Vec<RenderedStep>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStep {
    pub number: usize,
    pub record: StepRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityIcon {
    Bolt,
    Target,
    Clock,
}

impl PriorityIcon {
    pub fn for_priority(priority: &str) -> Option<Self> {
        Priority::parse(priority).map(|p| match p {
            Priority::High => PriorityIcon::Bolt,
            Priority::Medium => PriorityIcon::Target,
            Priority::Low => PriorityIcon::Clock,
        })
    }

    fn view(self) -> Html {
        match self {
            PriorityIcon::Bolt => html! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <polygon points="13,2 3,14 12,14 11,22 21,10 12,10"></polygon>
                </svg>
            },
            PriorityIcon::Target => html! {
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10"></circle>
                    <circle cx="12" cy="12" r="6"></circle>
                    <circle cx="12" cy="12" r="2"></circle>
                </svg>
            },
            PriorityIcon::Clock => clock_icon(),
        }
    }
}

fn clock_icon() -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="10"></circle>
            <polyline points="12,6 12,12 16,14"></polyline>
        </svg>
    }
}

fn step_view(step: &RenderedStep) -> Html {
    let record = &step.record;
    html! {
        <li class="roadmap-step card" key={step.number.to_string()}>
            <div class="step-content">
                <div class="step-header">
                    <div class="step-main">
                        <div class="step-top">
                            <div class="step-number">{step.number}</div>
                            <h4 class="step-title">{&record.title}</h4>
                            <span class={classes!("step-badge", record.priority.clone())}>
                                {format!("{} priority", record.priority)}
                            </span>
                        </div>
                        <p class="step-description">{&record.description}</p>
                        <div class="step-meta">
                            <div class="step-duration">
                                {clock_icon()}
                                <span>{&record.duration}</span>
                            </div>
                            <div class="step-priority-icon">
                                {PriorityIcon::for_priority(&record.priority).map(PriorityIcon::view).unwrap_or_else(|| html! {})}
                            </div>
                        </div>
                    </div>
                    <svg class="step-check" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
                        <polyline points="22,4 12,14.01 9,11.01"></polyline>
                    </svg>
                </div>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoadmapGeneratorProps {
    pub table: Rc<RoadmapTable>,
}

#[function_component(RoadmapGenerator)]
pub fn roadmap_generator(props: &RoadmapGeneratorProps) -> Html {
    let selection = use_state(SelectionState::default);
    let rendered = use_state(|| None::<Vec<RenderedStep>>);
    let generation = use_state(|| 0u32);
    let results_ref = use_node_ref();
    let fade = use_mut_ref(|| None::<FrameTask>);

    // Reveal and scroll to fresh results; a newer generation cancels a pending scroll.
    {
        let results_ref = results_ref.clone();
        use_effect_with_deps(
            move |generation: &u32| {
                let mut pending_scroll = None;
                if *generation > 0 {
                    if let Some(results) = results_ref.cast::<HtmlElement>() {
                        if let Some(task) = fade.borrow_mut().take() {
                            task.stop();
                        }
                        match animation::fade_in(&results, config::DEFAULT_ANIMATION_MS) {
                            Ok(task) => *fade.borrow_mut() = Some(task),
                            Err(err) => warn!("Roadmap results not animated: {}", err),
                        }
                        pending_scroll = Some(Timeout::new(config::RESULTS_SCROLL_DELAY_MS, move || {
                            scroll_to(&results);
                        }));
                    }
                }
                move || drop(pending_scroll)
            },
            *generation,
        );
    }

    let on_level_change = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*selection).clone();
            next.select_skill_level(&select.value());
            selection.set(next);
        })
    };

    let on_generate = {
        let selection = selection.clone();
        let rendered = rendered.clone();
        let generation = generation.clone();
        let table = props.table.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(roadmap) = selection.generate(&table) else {
                debug!("Generate pressed without a skill level");
                return;
            };
            info!("Generated {} step {} roadmap", roadmap.steps.len(), roadmap.level.as_str());
            debug!("Selected skills: {:?}", selection.selected_skills().collect::<Vec<_>>());
            rendered.set(Some(roadmap.steps));
            generation.set(*generation + 1);
        })
    };

    html! {
        <div class="roadmap-generator">
            <div class="roadmap-form card">
                <div class="form-group">
                    <label for="skillLevel">{"Your current level"}</label>
                    <div class="select-wrapper">
                        <select id="skillLevel" onchange={on_level_change}>
                            <option value="" selected={selection.level().is_none()}>{"Select your level"}</option>
                            {
                                for SkillLevel::ALL.iter().map(|level| html! {
                                    <option value={level.as_str()} selected={selection.level() == Some(*level)}>
                                        {level.label()}
                                    </option>
                                })
                            }
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <span class="form-label">{"Skills you already have"}</span>
                    <div class="skill-grid">
                        {
                            for SKILL_TAGS.iter().map(|(tag, label)| {
                                let onchange = {
                                    let selection = selection.clone();
                                    let tag = tag.to_string();
                                    Callback::from(move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*selection).clone();
                                        next.toggle_skill_tag(&tag, input.checked());
                                        selection.set(next);
                                    })
                                };
                                html! {
                                    <label class="skill-option">
                                        <input type="checkbox" value={*tag} {onchange} />
                                        <span>{*label}</span>
                                    </label>
                                }
                            })
                        }
                    </div>
                </div>

                <button id="generateBtn" class="btn btn-primary" disabled={!selection.can_generate()} onclick={on_generate}>
                    {"Generate My Roadmap"}
                </button>
            </div>

            <div id="roadmapResults" ref={results_ref} class={classes!("roadmap-results", rendered.is_none().then(|| "hidden"))}>
                <h3>{"Your Personalized Roadmap"}</h3>
                <ol id="roadmapSteps" class="roadmap-steps">
                    { for rendered.iter().flatten().map(step_view) }
                </ol>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> RoadmapTable {
        RoadmapTable::builtin().unwrap()
    }

    fn selected(level: &str) -> SelectionState {
        let mut state = SelectionState::default();
        state.select_skill_level(level);
        state
    }

    #[rstest]
    #[case("beginner", SkillLevel::Beginner)]
    #[case("intermediate", SkillLevel::Intermediate)]
    #[case("advanced", SkillLevel::Advanced)]
    fn generates_every_stored_step_in_order(#[case] raw: &str, #[case] level: SkillLevel) {
        let table = table();
        let roadmap = selected(raw).generate(&table).unwrap();
        assert_eq!(roadmap.level, level);
        let steps = roadmap.steps;
        let stored = table.steps(level);
        assert_eq!(steps.len(), stored.len());
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.number, i + 1);
            assert_eq!(&step.record, &stored[i]);
        }
    }

    #[rstest]
    #[case("")]
    #[case("expert")]
    fn unset_or_invalid_level_generates_nothing(#[case] raw: &str) {
        let state = selected(raw);
        assert!(!state.can_generate());
        assert_eq!(state.generate(&table()), None);
    }

    #[test]
    fn beginner_scenario() {
        let steps = selected("beginner").generate(&table()).unwrap().steps;
        assert_eq!(steps.len(), 6);
        let first = &steps[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.record.title, "Master Python Fundamentals");
        assert_eq!(first.record.duration, "4-6 weeks");
        assert_eq!(PriorityIcon::for_priority(&first.record.priority), Some(PriorityIcon::Bolt));
    }

    #[test]
    fn level_missing_from_table_renders_empty_list() {
        let table = RoadmapTable::from_json(r#"{"beginner": []}"#).unwrap();
        let roadmap = selected("advanced").generate(&table).unwrap();
        assert_eq!(roadmap.level, SkillLevel::Advanced);
        assert!(roadmap.steps.is_empty());
    }

    #[test]
    fn reselecting_garbage_disables_generate() {
        let mut state = selected("advanced");
        assert!(state.can_generate());
        state.select_skill_level("");
        assert!(!state.can_generate());
    }

    #[test]
    fn skill_tags_are_a_set_and_do_not_change_output() {
        let table = table();
        let plain = selected("beginner").generate(&table);

        let mut state = selected("beginner");
        state.toggle_skill_tag("sql", true);
        state.toggle_skill_tag("sql", true);
        state.toggle_skill_tag("python", true);
        state.toggle_skill_tag("python", false);
        assert_eq!(state.selected_skills().collect::<Vec<_>>(), vec!["sql"]);
        assert_eq!(state.generate(&table), plain);
    }

    #[rstest]
    #[case("high", Some(PriorityIcon::Bolt))]
    #[case("medium", Some(PriorityIcon::Target))]
    #[case("low", Some(PriorityIcon::Clock))]
    #[case("urgent", None)]
    #[case("High", None)]
    #[case("", None)]
    fn priority_icon_mapping(#[case] priority: &str, #[case] expected: Option<PriorityIcon>) {
        assert_eq!(PriorityIcon::for_priority(priority), expected);
    }
}
