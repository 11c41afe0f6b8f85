use crate::domain::a001_category::api::create_category;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_category::{Category, CreateCategoryRequest, FIELD_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Create-category form. `on_created` runs after the backend accepted it.
#[component]
pub fn CreateCategoryDialog(on_created: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move |_| {
        let request = CreateCategoryRequest::new(&name.get_untracked(), &description.get_untracked());
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match create_category(&request).await {
                Ok(()) => {
                    toasts.success("Category Created", "New category has been successfully created.");
                    on_created.run(());
                }
                Err(err) => {
                    saving.try_set(false);
                    toasts.api_error("Failed to create category", &err);
                }
            }
        });
    };

    view! {
        <Modal
            title="Create New Category"
            on_close=on_close
            footer=move || view! {
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary disabled=saving on_click=submit>
                        "Create Category"
                    </Button>
                </Flex>
            }
        >
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Category Name"</Label>
                    <Input value=name placeholder="Enter category name" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Description"</Label>
                    <Input value=description placeholder="Category description" />
                </Flex>
                {move || error.get().map(|message| view! {
                    <div class="form__error">{message}</div>
                })}
            </Flex>
        </Modal>
    }
}

/// Field list of every subcategory with the input type picker
#[component]
pub fn ConfigureFieldsDialog(category: Category, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Configure Fields for {}", category.name);

    view! {
        <Modal
            title=title
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "Done"
                </Button>
            }
        >
            {if category.subcategories.is_empty() {
                view! { <div class="table__empty">"This category has no subcategories yet"</div> }.into_any()
            } else {
                category.subcategories.into_iter().map(|sub| view! {
                    <div class="details-section">
                        <h3 class="details-section__title">{sub.name}</h3>
                        {sub.fields.into_iter().map(|field| view! {
                            <div class="field-row">
                                <span class="field-row__name">{field}</span>
                                <select class="form__select">
                                    {FIELD_TYPES.iter().map(|t| view! {
                                        <option value=*t>{*t}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        }).collect_view()}
                    </div>
                }).collect_view().into_any()
            }}
        </Modal>
    }
}
