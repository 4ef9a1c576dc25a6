//! The AI assistant panel.
//!
//! Prompts go to the canned provider through [`Assistant`], which
//! substitutes the fixed apology string on any failure, so every
//! dispatch resolves to a displayable reply.

use crate::AssistantOpen;
use dealer_assistant::{Assistant, CannedAssistant};
use leptos::prelude::*;

/// One line of the conversation log.
#[derive(Debug, Clone, PartialEq)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let open = expect_context::<AssistantOpen>().0;
    let (draft, set_draft) = signal(String::new());
    let log = RwSignal::new(Vec::<ChatLine>::new());

    let ask = Action::new(|prompt: &String| {
        let prompt = prompt.clone();
        async move { Assistant::new(CannedAssistant::new()).ask(&prompt).await }
    });
    let pending = ask.pending();

    Effect::new(move |_| {
        if let Some(reply) = ask.value().get() {
            log.update(|lines| {
                lines.push(ChatLine {
                    from_user: false,
                    text: reply,
                })
            });
        }
    });

    let submit = move |_| {
        let prompt = draft.get_untracked();
        if prompt.trim().is_empty() {
            return;
        }
        log.update(|lines| {
            lines.push(ChatLine {
                from_user: true,
                text: prompt.clone(),
            })
        });
        set_draft.set(String::new());
        ask.dispatch(prompt);
    };

    view! {
        <Show when=move || open.get()>
            <aside class="assistant-panel">
                <div class="assistant-head">
                    <h3>"Assistant"</h3>
                    <button class="link" on:click=move |_| open.set(false)>"Close"</button>
                </div>
                <div class="assistant-log">
                    <p class="chat-line">
                        "Hi! Ask me about models, configuring a vehicle, or your pipeline."
                    </p>
                    {move || log.get().into_iter().map(|line| {
                        let from_user = line.from_user;
                        view! {
                            <p class="chat-line" class=("chat-user", move || from_user)>
                                {line.text.clone()}
                            </p>
                        }
                    }).collect::<Vec<_>>()}
                    <Show when=move || pending.get()>
                        <p class="chat-line chat-pending">"Thinking..."</p>
                    </Show>
                </div>
                <div class="assistant-input">
                    <input
                        type="text"
                        placeholder="Ask about models, pricing, deals..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button class="btn" disabled=move || pending.get() on:click=submit>
                        "Send"
                    </button>
                </div>
            </aside>
        </Show>
    }
}
