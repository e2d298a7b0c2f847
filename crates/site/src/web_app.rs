use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_theme_host;
use styling::{accents, showcase_theme_items, themes, ThemeToolbarItem};
use system_ui::prelude::*;

use crate::theme_context::{use_theme, ThemeProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Theme Showcase" />
        <Meta name="description" content="Theme variants, accents and resizable workspace layout." />

        <ThemeProvider host=build_theme_host()>
            <Router>
                <main class="site-root">
                    <nav class="site-nav">
                        <A href="/">"Themes"</A>
                        <A href="/layout">"Layout"</A>
                    </nav>
                    <Routes>
                        <Route path="" view=ThemeShowcase />
                        <Route path="/layout" view=LayoutShowcase />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}

#[component]
pub fn ThemeShowcase() -> impl IntoView {
    let theme = use_theme();
    let selected = move || {
        theme
            .resolved
            .get()
            .map(|resolved| resolved.requested_id)
            .unwrap_or_default()
    };

    view! {
        <section class="showcase">
            <header class="showcase-toolbar" role="toolbar" aria-label="Theme">
                {showcase_theme_items()
                    .into_iter()
                    .map(|item: ThemeToolbarItem| {
                        view! {
                            <button
                                type="button"
                                data-ui-icon=item.icon
                                aria-pressed=move || (selected() == item.value).to_string()
                                on:click=move |_| theme.apply_variant(item.value)
                            >
                                {item.title}
                            </button>
                        }
                    })
                    .collect_view()}
            </header>
            <ThemeControlsPanel />
            <AppliedThemeReadout />
        </section>
    }
}

#[component]
fn ThemeControlsPanel() -> impl IntoView {
    let theme = use_theme();
    let controls = theme.controls;

    view! {
        <section class="theme-controls" aria-label="Theme controls">
            <label>
                "Theme"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    theme.update_controls(|controls| {
                        if let Err(err) = controls.set_theme(&value) {
                            logging::warn!("{err}");
                        }
                    });
                }>
                    {themes()
                        .iter()
                        .map(|entry| {
                            let id = entry.id.as_str();
                            view! {
                                <option
                                    value=id
                                    selected=move || controls.with(|controls| controls.theme_id() == id)
                                >
                                    {entry.name.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || controls.with(|controls| controls.is_dark())
                    on:change=move |_| theme.update_controls(|controls| controls.toggle_dark())
                />
                "Dark"
            </label>
            <div class="accent-swatches" role="radiogroup" aria-label="Accent">
                {accents()
                    .iter()
                    .map(|accent| {
                        let id = accent.id.as_str();
                        let swatch = move || {
                            let mode = controls.with(|controls| controls.mode());
                            format!("background:{};", accent.hsl(mode))
                        };
                        view! {
                            <button
                                type="button"
                                role="radio"
                                title=accent.name.as_str()
                                style=swatch
                                aria-checked=move || {
                                    controls.with(|controls| controls.accent_id() == id).to_string()
                                }
                                on:click=move |_| theme.select_accent(id)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AppliedThemeReadout() -> impl IntoView {
    let theme = use_theme();

    view! {
        <dl class="theme-readout">
            {move || match theme.resolved.get() {
                Some(resolved) => view! {
                    <dt>"Requested"</dt>
                    <dd>{resolved.requested_id}</dd>
                    <dt>"Applied"</dt>
                    <dd>{resolved.concrete_id}</dd>
                    <dt>"Mode"</dt>
                    <dd>{resolved.mode.as_str()}</dd>
                    <dt>"Follows system"</dt>
                    <dd>{resolved.follows_system.to_string()}</dd>
                }
                .into_view(),
                None => view! { <dt>"No theme applied"</dt> }.into_view(),
            }}
            <dt>"Accent"</dt>
            <dd>
                {move || {
                    theme.resolved.with(|_| ());
                    theme.controls.with(|_| ());
                    theme
                        .resolver
                        .with_value(|resolver| resolver.active_accent())
                        .unwrap_or("none")
                }}
            </dd>
        </dl>
    }
}

#[component]
pub fn LayoutShowcase() -> impl IntoView {
    let sections = create_rw_signal(LayoutSections::new(AppLayoutSections {
        left: Some(SectionConfig::default()),
        bottom: Some(SectionConfig::default()),
        right: Some(SectionConfig::default()),
        ..AppLayoutSections::default()
    }));
    let render_slot = Callback::new(|slot: LayoutSlot| {
        let label = match slot {
            LayoutSlot::Sidebar => "Sidebar",
            LayoutSlot::Editor => "Editor",
            LayoutSlot::Terminal => "Terminal",
            LayoutSlot::Auxiliary => "Auxiliary",
        };
        view! { <p class="layout-placeholder">{label}</p> }.into_view()
    });
    let toggle_button = move |slot: LayoutSlot, label: &'static str| {
        view! {
            <button
                type="button"
                aria-pressed=move || sections.with(|sections| sections.is_visible(slot)).to_string()
                on:click=move |_| sections.update(|sections| sections.toggle(slot))
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="layout-showcase">
            <header class="showcase-toolbar" role="toolbar" aria-label="Sections">
                {toggle_button(LayoutSlot::Sidebar, "Sidebar")}
                {toggle_button(LayoutSlot::Terminal, "Terminal")}
                {toggle_button(LayoutSlot::Auxiliary, "Auxiliary")}
            </header>
            {move || {
                view! {
                    <PanelLayoutView node=sections.with(LayoutSections::layout) render_slot=render_slot />
                }
            }}
        </section>
    }
}
