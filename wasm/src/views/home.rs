use leptos::prelude::*;
use tracing::debug;

#[component]
pub fn Home() -> impl IntoView {
    debug!("rendering home view");

    view! {
        <section class="home">
            <h1>"Hello"</h1>
            <Counter step=1 />
        </section>
    }
}

#[component]
fn Counter(#[prop(default = 1)] step: i32) -> impl IntoView {
    let (count, set_count) = signal(0);
    let double_count = move || count.get() * 2;

    view! {
        <div class="counter">
            <button
                on:click=move |_| {
                    *set_count.write() += step;
                }
                class:odd=move || count.get() % 2 == 1
            >
                "Clicked: "
                {count}
            </button>
            <button on:click=move |_| set_count.set(0)>"Reset"</button>
            <ProgressBar progress=count />
            <ProgressBar progress=Signal::derive(double_count) />
        </div>
    }
}

#[component]
fn ProgressBar(
    #[prop(default = 100)] max: u16,
    #[prop(into)] progress: Signal<i32>,
) -> impl IntoView {
    view! { <progress max=max value=progress /> }
}
