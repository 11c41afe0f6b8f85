use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a001_category::ui::details::{ConfigureFieldsDialog, CreateCategoryDialog};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let toasts = use_toasts();
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let is_create_open = RwSignal::new(false);
    let configuring = RwSignal::new(None::<Category>);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_categories().await {
                Ok(loaded) => {
                    log::debug!("loaded {} categories", loaded.len());
                    categories.try_set(loaded);
                }
                Err(err) => toasts.api_error("Failed to load categories", &err),
            }
            loading.try_set(false);
        });
    };
    load();

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Category & Field Management"</h1>
                    <span class="badge badge--primary">
                        {move || categories.with(|c| c.len()).to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| is_create_open.set(true)>
                        {icon("plus")}
                        " Add Category"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || !loading.get() && categories.with(|c| c.is_empty())>
                    <div class="table__empty">"No categories yet"</div>
                </Show>
                <div class="card-grid">
                    {move || categories.get().into_iter().map(|category| {
                        let for_configure = category.clone();
                        let summary = format!(
                            "{} subcategories, {} fields",
                            category.subcategories.len(),
                            category.field_count()
                        );
                        view! {
                            <div class="card">
                                <div class="card__header">
                                    <h2 class="card__title">{category.name.clone()}</h2>
                                    <span class="badge badge--secondary">{summary}</span>
                                    <button
                                        class="button button--icon"
                                        title="Configure fields"
                                        on:click=move |_| configuring.set(Some(for_configure.clone()))
                                    >
                                        {icon("settings")}
                                    </button>
                                </div>
                                {category.description.clone().map(|d| view! {
                                    <p class="card__subtitle">{d}</p>
                                })}
                                <div class="card__body">
                                    {category.subcategories.iter().map(|sub| view! {
                                        <div class="subcategory-row">
                                            <span class="subcategory-row__name">{sub.name.clone()}</span>
                                            <div class="subcategory-row__fields">
                                                {sub.fields.iter().map(|field| view! {
                                                    <span class="badge badge--outline">{field.clone()}</span>
                                                }).collect_view()}
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <Show when=move || is_create_open.get()>
                <CreateCategoryDialog
                    on_created=Callback::new(move |_| {
                        is_create_open.set(false);
                        load();
                    })
                    on_close=Callback::new(move |_| is_create_open.set(false))
                />
            </Show>
            {move || configuring.get().map(|category| view! {
                <ConfigureFieldsDialog
                    category=category
                    on_close=Callback::new(move |_| configuring.set(None))
                />
            })}
        </PageFrame>
    }
}
