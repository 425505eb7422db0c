//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, interest_rate::InterestRatePage, loan_eligibility::LoanEligibilityPage};
use crate::state::{eligibility::EligibilityState, rates::RatesState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared page-state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let eligibility = RwSignal::new(EligibilityState::default());
    let rates = RwSignal::new(RatesState::default());

    provide_context(eligibility);
    provide_context(rates);

    view! {
        <Stylesheet id="leptos" href="/pkg/finpredict.css"/>
        <Title text="FinPredict"/>

        <Router>
            <Navbar/>
            <main class="page-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("interest-rate") view=InterestRatePage/>
                    <Route path=StaticSegment("eligibility") view=LoanEligibilityPage/>
                </Routes>
            </main>
        </Router>
    }
}
