//! Study Form Component
//!
//! Collapsible form for creating new tasks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::FormDefaults;
use crate::form::{TaskForm, TaskFormStoreFields};
use crate::models::{NewTask, Priority};

/// Form for creating new tasks; `today` seeds the date field
#[component]
pub fn StudyForm(
    today: String,
    #[prop(into)] on_add: Callback<NewTask>,
) -> impl IntoView {
    let form = Store::new(TaskForm::new(today, &FormDefaults::default()));

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let accepted = form.write().submit();
        if let Some(task) = accepted {
            on_add.run(task);
        }
    };

    view! {
        <section class="card form-card">
            <Show
                when=move || form.expanded().get()
                fallback=move || view! {
                    <button class="add-task-btn" on:click=move |_| form.expanded().set(true)>
                        "+ Add a study task..."
                    </button>
                }
            >
                <form class="study-form" on:submit=create_task>
                    <label class="field">
                        <span class="field-label">"Task Title"</span>
                        <input
                            type="text"
                            placeholder="e.g., Review Neural Networks"
                            autofocus=true
                            prop:value=move || form.title().get()
                            on:input=move |ev| form.title().set(event_target_value(&ev))
                        />
                    </label>

                    <div class="field-row">
                        <label class="field">
                            <span class="field-label">"Subject"</span>
                            <input
                                type="text"
                                placeholder="Computer Science"
                                prop:value=move || form.subject().get()
                                on:input=move |ev| form.subject().set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Date"</span>
                            <input
                                type="date"
                                prop:value=move || form.date().get()
                                on:input=move |ev| form.date().set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="field-row">
                        <label class="field">
                            <span class="field-label">"Start Time"</span>
                            <input
                                type="time"
                                prop:value=move || form.start_time().get()
                                on:input=move |ev| form.start_time().set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"End Time"</span>
                            <input
                                type="time"
                                prop:value=move || form.end_time().get()
                                on:input=move |ev| form.end_time().set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Priority"</span>
                            <select
                                prop:value=move || form.priority().get().as_str()
                                on:change=move |ev| form.priority().set(Priority::from_str(&event_target_value(&ev)))
                            >
                                {Priority::ALL.iter().map(|p| view! {
                                    <option value=p.as_str()>{p.as_str()}</option>
                                }).collect_view()}
                            </select>
                        </label>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| form.expanded().set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn">"Create Task"</button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
