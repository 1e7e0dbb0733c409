use yew::prelude::*;

use crate::form::steps::Step;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub step: Step,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.step.progress_percent();

    html! {
        <div class="progress">
            <div class="progress-labels">
                <span class="progress-caption">
                    {format!("Step {} of {}: {}", props.step.number(), Step::COUNT, props.step.title())}
                </span>
                <span class="progress-percent">{format!("{}%", percent)}</span>
            </div>
            <div class="progress-container">
                <div class="progress-bar" style={format!("width: {}%;", percent)}></div>
            </div>
        </div>
    }
}
