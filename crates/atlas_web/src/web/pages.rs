use leptos::prelude::*;

use webapi_atlas::views::{
    CategoryPage, CategorySection, DemoControl, EntryCard, LandingPage, Route, NOT_FOUND_MESSAGE,
};
use webapi_atlas::{DemoId, Registry};

#[component]
pub(super) fn LandingView(
    registry: StoredValue<Registry>,
    open_demo: Callback<DemoId>,
) -> impl IntoView {
    let page = registry.with_value(LandingPage::build);

    view! {
        <div class="landing">
            {page
                .sections
                .into_iter()
                .map(|section| view! { <CategoryBlock section=section open_demo=open_demo linked=true /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn CategoryView(
    registry: StoredValue<Registry>,
    category_id: String,
    open_demo: Callback<DemoId>,
) -> impl IntoView {
    let page = registry.with_value(|r| CategoryPage::build(r, &category_id));

    let body = match page {
        CategoryPage::Found(section) => {
            view! { <CategoryBlock section=section open_demo=open_demo linked=false /> }.into_any()
        }
        CategoryPage::NotFound { requested } => view! {
            <div class="not-found" attr:data-requested=requested>
                <p>{NOT_FOUND_MESSAGE}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="category-page">
            <a class="back" href=Route::Landing.href()>"← 返回首頁"</a>
            {body}
        </div>
    }
}

#[component]
fn CategoryBlock(section: CategorySection, open_demo: Callback<DemoId>, linked: bool) -> impl IntoView {
    let heading = if linked {
        view! { <h2><a href=section.href.clone()>{section.name}</a></h2> }.into_any()
    } else {
        view! { <h2>{section.name}</h2> }.into_any()
    };

    view! {
        <section class="category-section" id=section.id>
            {heading}
            <p class="category-desc">{section.description}</p>
            <div class="cards">
                {section
                    .cards
                    .into_iter()
                    .map(|card| view! { <ApiCard card=card open_demo=open_demo /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ApiCard(card: EntryCard, open_demo: Callback<DemoId>) -> impl IntoView {
    let badges = card
        .badges
        .iter()
        .map(|b| {
            let class = format!("badge {}", b.state.css_class());
            view! {
                <li class=class title=b.title() attr:data-vendor=b.vendor.key()>
                    <span class="vendor">{b.vendor.display_name()}</span>
                    <span class="version">{b.text}</span>
                </li>
            }
        })
        .collect_view();

    let links = card
        .links
        .iter()
        .map(|l| {
            view! {
                <a href=l.url target="_blank" rel="noopener">
                    {l.label}
                </a>
            }
        })
        .collect_view();

    let demo = match card.demo {
        DemoControl::Available(demo) => Some(view! {
            <button class="btn demo-btn" on:click=move |_| open_demo.run(demo)>
                {DemoControl::LABEL}
            </button>
        }),
        DemoControl::Absent => None,
    };

    view! {
        <article class="api-card" attr:data-entry=card.id>
            <h3>{card.name}</h3>
            <p class="api-desc">{card.description}</p>
            <ul class="support">{badges}</ul>
            <nav class="links">{links}</nav>
            {demo}
        </article>
    }
}
