//! Marketing landing page.
//!
//! Pure static content rendered from const data tables so copy edits stay in
//! one place. No state, no network.

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy)]
struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { value: "98%", label: "Prediction Accuracy" },
    Stat { value: "50+", label: "Partner Banks" },
    Stat { value: "2M+", label: "Successful Predictions" },
];

#[derive(Clone, Copy)]
struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Predictions",
        body: "Advanced machine learning algorithms provide highly accurate loan eligibility \
               predictions based on multiple factors.",
    },
    Feature {
        title: "Bank-Grade Security",
        body: "Your data is protected with enterprise-level encryption and security measures \
               that meet financial industry standards.",
    },
    Feature {
        title: "Instant Results",
        body: "Get real-time predictions and personalized interest rate calculations from \
               multiple banks in seconds.",
    },
];

const BENEFITS: &[&str] = &[
    "Compare interest rates from 50+ banks instantly",
    "Get personalized loan recommendations",
    "Understand your loan eligibility chances",
    "Access detailed repayment schedules",
    "Receive expert financial insights",
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__headline">
                    "Smart Loan Decisions with"
                    <span class="home__headline-accent">"ML-Powered Predictions"</span>
                </h1>
                <p class="home__subcopy">
                    "Make confident financial choices with our advanced AI system that predicts \
                     loan eligibility and finds you the best interest rates across multiple banks."
                </p>
                <div class="home__cta-row">
                    <A href="/eligibility" attr:class="btn btn--primary">"Check Loan Eligibility"</A>
                    <A href="/interest-rate" attr:class="btn btn--secondary">"Calculate Interest Rates"</A>
                </div>
            </section>

            <section class="home__stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="home__stat-card">
                                <div class="home__stat-value">{stat.value}</div>
                                <div class="home__stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="home__features">
                <h2>"Why Choose FinPredict?"</h2>
                <p class="home__features-lead">
                    "Our advanced algorithms provide accurate predictions to help you make \
                     better financial decisions."
                </p>
                <div class="home__feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="home__feature-card">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__benefits">
                <h2>"Make Smarter Financial Decisions"</h2>
                <ul class="home__benefit-list">
                    {BENEFITS
                        .iter()
                        .map(|benefit| view! { <li class="home__benefit-item">{*benefit}</li> })
                        .collect_view()}
                </ul>
                <A href="/eligibility" attr:class="btn btn--primary">"Get Started Now"</A>
            </section>
        </div>
    }
}
