use leptos::prelude::*;

use crate::state::NoticeSlot;

#[component]
pub fn NoticeBanner(slot: NoticeSlot) -> impl IntoView {
    view! {
        <div class="message-container" node_ref=slot.container>
            {move || {
                slot.current.get().map(|notice| {
                    view! {
                        <div class=format!("message {}", notice.kind.class())>
                            {notice.text}
                        </div>
                    }
                })
            }}
        </div>
    }
}
