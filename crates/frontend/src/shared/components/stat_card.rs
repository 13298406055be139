use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Warning,
    Danger,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Danger => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count to show (None while loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
