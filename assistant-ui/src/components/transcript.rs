// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript panel for the conversation with the agent.

use yew::prelude::*;

/// One rendered transcript row. Non-final segments are kept so the line can
/// grow in place while the speaker is still talking.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptLine {
    pub participant: String,
    pub text: String,
    pub is_final: bool,
}

#[derive(Properties, Debug, PartialEq)]
pub struct TranscriptPanelProps {
    pub lines: Vec<TranscriptLine>,
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    if props.lines.is_empty() {
        return html! {
            <div class="transcript-panel">
                <p class="transcript-empty">{ "No transcript yet." }</p>
            </div>
        };
    }
    html! {
        <div class="transcript-panel">
            <ul class="transcript-lines">
                {
                    props.lines.iter().map(|line| {
                        let class = if line.is_final {
                            "transcript-line"
                        } else {
                            "transcript-line interim"
                        };
                        html! {
                            <li {class}>
                                <span class="transcript-speaker">{ format!("{}:", line.participant) }</span>
                                <span class="transcript-text">{ line.text.clone() }</span>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
