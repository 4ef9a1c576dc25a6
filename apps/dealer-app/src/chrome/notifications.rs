//! Notification bell and dropdown menu.

use crate::data::Notification;
use leptos::prelude::*;

#[component]
pub fn NotificationsMenu() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Vec<Notification>>>();
    let (open, set_open) = signal(false);
    let unread = Memo::new(move |_| notifications.with(|all| all.iter().filter(|n| !n.read).count()));

    view! {
        <div class="notifications">
            <button class="btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                "Alerts"
                {move || {
                    let count = unread.get();
                    if count > 0 {
                        format!(" ({count})")
                    } else {
                        String::new()
                    }
                }}
            </button>
            <Show when=move || open.get()>
                <div class="notifications-menu">
                    <button
                        class="link"
                        on:click=move |_| notifications.update(|all| {
                            for n in all.iter_mut() {
                                n.read = true;
                            }
                        })
                    >
                        "Mark all read"
                    </button>
                    {move || notifications.get().into_iter().map(|n| {
                        let unread_flag = !n.read;
                        let mark_read = {
                            let id = n.id.clone();
                            move |_| notifications.update(|all| {
                                if let Some(found) = all.iter_mut().find(|x| x.id == id) {
                                    found.read = true;
                                }
                            })
                        };
                        view! {
                            <div class="notification" class=("unread", move || unread_flag)>
                                <strong>{n.title.clone()}</strong>
                                <p>{n.body.clone()}</p>
                                {unread_flag.then(|| view! {
                                    <button class="link" on:click=mark_read>"Mark read"</button>
                                })}
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
