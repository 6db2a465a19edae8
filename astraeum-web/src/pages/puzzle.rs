use gloo_timers::callback::Timeout;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use astraeum_game::{OracleSummary, PuzzleSession, format_time};

#[derive(Properties, Clone, PartialEq)]
pub struct PuzzlePageProps {
    pub oracle: OracleSummary,
    pub puzzle: PuzzleSession,
    pub input: AttrValue,
    pub busy: bool,
    pub insight_tokens: i64,
    pub tick_ms: u32,
    pub on_input: Callback<AttrValue>,
    pub on_submit: Callback<()>,
    pub on_hint: Callback<()>,
    pub on_insight: Callback<()>,
    pub on_tick: Callback<()>,
}

#[function_component(PuzzlePage)]
pub fn puzzle_page(props: &PuzzlePageProps) -> Html {
    // Chained one-second timer, re-armed whenever the clock moves and
    // dropped (hence cancelled) on unmount or when the countdown is done.
    {
        let on_tick = props.on_tick.clone();
        let expired = props.puzzle.expired();
        let tick_ms = props.tick_ms;
        use_effect_with(props.puzzle.remaining_time(), move |remaining| {
            let timer = (!expired && matches!(remaining, Some(secs) if *secs > 0))
                .then(|| Timeout::new(tick_ms, move || on_tick.emit(())));
            move || drop(timer)
        });
    }

    let data = props.puzzle.data();
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_input.emit(AttrValue::from(area.value()));
            }
        })
    };
    let on_submit_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };
    let on_hint_click = {
        let on_hint = props.on_hint.clone();
        Callback::from(move |_: MouseEvent| on_hint.emit(()))
    };
    let on_insight_click = {
        let on_insight = props.on_insight.clone();
        Callback::from(move |_: MouseEvent| on_insight.emit(()))
    };

    let time_indicator = props.puzzle.remaining_time().map(|secs| {
        let class = if props.puzzle.time_critical() {
            "time-indicator time-critical"
        } else {
            "time-indicator"
        };
        html! { <div {class}>{ format_time(secs) }</div> }
    });

    let revealed = props.puzzle.revealed_hints();

    html! {
        <div class="puzzle-view" data-testid="puzzle-view">
            <div class="puzzle-header">
                <h3>{ format!("{}'s Challenge", props.oracle.name) }</h3>
                { time_indicator }
            </div>

            <div class="puzzle-description">
                <p>{ data.description.clone() }</p>
                <div class="puzzle-meta">
                    <span class="badge">{ format!("Type: {}", data.puzzle_type) }</span>
                    <span class="badge">{ format!("Difficulty: {}/13", data.difficulty) }</span>
                    <span class="badge">{ format!("Attempts: {}", props.puzzle.attempts()) }</span>
                </div>
            </div>

            if let Some(false_clues) = &data.false_clues {
                <div class="false-clues">
                    <p class="false-clues-warning">
                        { "Warning: Some information may be deceptive" }
                    </p>
                    { for false_clues.iter().map(|clue| html! {
                        <div class="false-clue">{ clue.clone() }</div>
                    }) }
                </div>
            }

            if !revealed.is_empty() {
                <div class="puzzle-hints">
                    <h5>{ "Hints:" }</h5>
                    { for revealed.iter().enumerate().map(|(index, hint)| html! {
                        <div class="hint">
                            <span class="hint-number">{ format!("{}.", index + 1) }</span>
                            <span class="hint-text">{ hint.clone() }</span>
                        </div>
                    }) }
                </div>
            }

            <div class="puzzle-input-area">
                <label for="solution-input">{ "Your Solution:" }</label>
                <textarea
                    id="solution-input"
                    value={props.input.clone()}
                    oninput={oninput}
                    placeholder="Enter your solution here..."
                    rows="4"
                    class="puzzle-input"
                    disabled={props.busy}
                />
            </div>

            <div class="puzzle-actions">
                <button
                    onclick={on_submit_click}
                    disabled={props.busy}
                    class="submit-btn"
                >
                    { if props.busy { "Validating..." } else { "Submit Solution" } }
                </button>
                <button
                    onclick={on_hint_click}
                    disabled={!props.puzzle.can_reveal_hint()}
                    class="hint-btn"
                >
                    { format!("Show Hint ({} remaining)", props.puzzle.hints_remaining()) }
                </button>
                <button
                    onclick={on_insight_click}
                    disabled={props.insight_tokens <= 0}
                    class="insight-btn"
                >
                    { format!("Consult the Oracles ({} tokens)", props.insight_tokens) }
                </button>
            </div>
        </div>
    }
}
