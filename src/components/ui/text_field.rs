use leptos::prelude::*;

/// Labeled input bound to a writable signal. Field-level validation stays in
/// the owning form.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="mb-5">
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                placeholder=placeholder.unwrap_or("")
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        </div>
    }
}
