use contracts::domain::a001_listing::{ListingForm, ProductType, Unit, UploadMethod};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use web_sys::HtmlInputElement;

use super::view_model::AddItemViewModel;

type Getter = fn(&ListingForm) -> String;
type Setter = fn(&mut ListingForm, String);

#[component]
fn FormInput(
    vm: AddItemViewModel,
    id: &'static str,
    label: &'static str,
    get: Getter,
    set: Setter,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                class="form__input"
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
fn FormSelect(
    vm: AddItemViewModel,
    id: &'static str,
    label: &'static str,
    /// (value, label) pairs after the empty "Select..." option
    options: Vec<(&'static str, &'static str)>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                class="form__select"
                id=id
                prop:value=move || vm.form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Manual entry of a single listing.
#[component]
pub fn AddItemForm(on_success: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = AddItemViewModel::new();

    let product_types = ProductType::ALL.iter().map(|p| (p.as_str(), p.label())).collect();
    let units = Unit::ALL.iter().map(|u| (u.as_str(), u.label())).collect();
    let methods = UploadMethod::ALL.iter().map(|m| (m.as_str(), m.label())).collect();

    let on_image = move |ev: leptos::ev::Event| {
        let file = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|list| list.get(0));
        vm.image.set(file);
    };

    view! {
        <div class="detail-form add-item-form">
            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <FormSelect
                vm=vm
                id="product_type"
                label="Product type"
                options=product_types
                get=|f| f.product_type.clone()
                set=|f, v| f.product_type = v
            />
            <FormInput
                vm=vm
                id="category"
                label="Category"
                placeholder="e.g. Dairy"
                get=|f| f.category.clone()
                set=|f, v| f.category = v
            />
            <div class="form__group">
                <label class="form__label" for="description">"Description"</label>
                <textarea
                    class="form__textarea"
                    id="description"
                    rows="3"
                    prop:value=move || vm.form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| f.description = value);
                    }
                />
            </div>
            <div class="form__row">
                <FormInput
                    vm=vm
                    id="quantity"
                    label="Quantity"
                    input_type="number"
                    get=|f| f.quantity.clone()
                    set=|f, v| f.quantity = v
                />
                <FormSelect
                    vm=vm
                    id="unit"
                    label="Unit"
                    options=units
                    get=|f| f.unit.clone()
                    set=|f, v| f.unit = v
                />
            </div>

            <Show when=move || vm.shows_prices()>
                <div class="form__row">
                    <FormInput
                        vm=vm
                        id="original_price"
                        label="Original price"
                        input_type="number"
                        get=|f| f.original_price.clone()
                        set=|f, v| f.original_price = v
                    />
                    <FormInput
                        vm=vm
                        id="discounted_price"
                        label="Discounted price"
                        input_type="number"
                        get=|f| f.discounted_price.clone()
                        set=|f, v| f.discounted_price = v
                    />
                </div>
            </Show>

            <FormInput
                vm=vm
                id="expiry_date"
                label="Expiry date"
                input_type="datetime-local"
                get=|f| f.expiry_date.clone()
                set=|f, v| f.expiry_date = v
            />
            <div class="form__group">
                <label class="form__label" for="image">"Image"</label>
                <input class="form__input" type="file" id="image" accept="image/*" on:change=on_image />
            </div>
            <FormSelect
                vm=vm
                id="upload_method"
                label="Upload method"
                options=methods
                get=|f| f.upload_method.clone()
                set=|f, v| f.upload_method = v
            />
            <FormInput
                vm=vm
                id="pickup_window_duration"
                label="Pickup window"
                input_type="datetime-local"
                get=|f| f.pickup_window_duration.clone()
                set=|f, v| f.pickup_window_duration = v
            />

            <div class="form__actions">
                <Button
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || vm.is_submitting.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command(on_success)
                    disabled=Signal::derive(move || vm.is_submitting.get())
                >
                    {move || if vm.is_submitting.get() { "Adding..." } else { "Add item" }}
                </Button>
            </div>
        </div>
    }
}
