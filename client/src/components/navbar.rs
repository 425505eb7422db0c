//! Top navigation bar shared by all pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/eligibility", label: "Loan Eligibility" },
    NavLink { href: "/interest-rate", label: "Interest Rates" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"FinPredict"</A>
            <div class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <A href=link.href attr:class="navbar__link">{link.label}</A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
